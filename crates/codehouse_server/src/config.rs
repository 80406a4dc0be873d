//! Configuration for the live server.

use codehouse_core::DisplayContext;
use derive_getters::Getters;
use std::path::PathBuf;

/// Environment variable overriding the bind address.
pub const BIND_VAR: &str = "CODEHOUSE_BIND";
/// Environment variable overriding the local asset directory.
pub const ASSET_DIR_VAR: &str = "CODEHOUSE_ASSET_DIR";
/// Environment variable overriding the shared asset directory.
pub const SHARED_ASSET_DIR_VAR: &str = "CODEHOUSE_SHARED_ASSET_DIR";

/// Default bind address.
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
/// Default local asset directory.
pub const DEFAULT_ASSET_DIR: &str = "static/svg";
/// Default shared asset directory, outside the served tree.
pub const DEFAULT_SHARED_ASSET_DIR: &str = "../_svg_assets";

/// Where each request's display variables come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplaySource {
    /// Re-read the process environment on every request
    #[default]
    Environment,
    /// Always use the same context
    Fixed(DisplayContext),
}

impl DisplaySource {
    /// Resolves the context for the current request.
    pub fn current(&self) -> DisplayContext {
        match self {
            DisplaySource::Environment => DisplayContext::from_env(),
            DisplaySource::Fixed(ctx) => ctx.clone(),
        }
    }
}

/// Configuration for the live server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ServerConfig {
    /// Socket address to listen on (e.g., "0.0.0.0:5000")
    #[builder(default = "DEFAULT_BIND.to_string()")]
    bind_addr: String,
    /// First directory searched for layer SVGs
    #[builder(default = "PathBuf::from(DEFAULT_ASSET_DIR)")]
    asset_dir: PathBuf,
    /// Second directory searched for layer SVGs
    #[builder(default = "PathBuf::from(DEFAULT_SHARED_ASSET_DIR)")]
    shared_asset_dir: PathBuf,
    /// Source of the per-request display context
    #[builder(default)]
    display: DisplaySource,
}

impl ServerConfig {
    /// Returns a builder for constructing a ServerConfig.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `CODEHOUSE_BIND` (default: "0.0.0.0:5000")
    /// - `CODEHOUSE_ASSET_DIR` (default: "static/svg")
    /// - `CODEHOUSE_SHARED_ASSET_DIR` (default: "../_svg_assets")
    pub fn from_env() -> Self {
        let bind_addr = std::env::var(BIND_VAR).unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let asset_dir =
            std::env::var(ASSET_DIR_VAR).unwrap_or_else(|_| DEFAULT_ASSET_DIR.to_string());
        let shared_asset_dir = std::env::var(SHARED_ASSET_DIR_VAR)
            .unwrap_or_else(|_| DEFAULT_SHARED_ASSET_DIR.to_string());

        Self {
            bind_addr,
            asset_dir: PathBuf::from(asset_dir),
            shared_asset_dir: PathBuf::from(shared_asset_dir),
            display: DisplaySource::Environment,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.to_string(),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            shared_asset_dir: PathBuf::from(DEFAULT_SHARED_ASSET_DIR),
            display: DisplaySource::Environment,
        }
    }
}
