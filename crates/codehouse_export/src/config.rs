//! Configuration for a static export run.

use codehouse_core::DisplayContext;
use derive_getters::Getters;
use std::path::PathBuf;

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "gh-pages";

/// Inputs of a static export.
///
/// # Examples
///
/// ```
/// use codehouse_export::ExportConfig;
/// use std::path::PathBuf;
///
/// let config = ExportConfig::builder()
///     .output_dir("site")
///     .asset_dirs(vec![PathBuf::from("static/svg")])
///     .build()
///     .unwrap();
/// assert_eq!(config.output_dir().to_str(), Some("site"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ExportConfig {
    /// Directory that is wiped and rebuilt
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT_DIR)")]
    output_dir: PathBuf,
    /// SVG source directories, copied in order (later ones overwrite earlier ones)
    #[builder(default = "default_asset_dirs()")]
    asset_dirs: Vec<PathBuf>,
    /// Account, project and published URL
    #[builder(default = "DisplayContext::from_env()")]
    display: DisplayContext,
}

impl ExportConfig {
    /// Returns a builder for constructing an ExportConfig.
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

fn default_asset_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("static/svg"), PathBuf::from("../_svg_assets")]
}
