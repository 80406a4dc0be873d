//! Tests for live server configuration.

use codehouse_core::DisplayContext;
use codehouse_server::{
    DEFAULT_ASSET_DIR, DEFAULT_BIND, DEFAULT_SHARED_ASSET_DIR, DisplaySource, ServerConfig,
};
use std::path::Path;

#[test]
fn test_builder_defaults() {
    let config = ServerConfig::builder().build().expect("Valid ServerConfig");
    assert_eq!(config.bind_addr(), DEFAULT_BIND);
    assert_eq!(config.asset_dir(), Path::new(DEFAULT_ASSET_DIR));
    assert_eq!(config.shared_asset_dir(), Path::new(DEFAULT_SHARED_ASSET_DIR));
    assert_eq!(config.display(), &DisplaySource::Environment);
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_fixed_display_source() {
    let ctx = DisplayContext::new("octo", "house", Some("https://example.org".to_string()));
    let source = DisplaySource::Fixed(ctx.clone());
    assert_eq!(source.current(), ctx);
}
