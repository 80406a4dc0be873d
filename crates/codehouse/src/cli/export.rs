//! Static export command handler.

use super::ExportArgs;
use codehouse_core::DisplayContext;
use codehouse_error::{CodehouseResult, ConfigError, ConfigErrorKind, ConfigResult};
use codehouse_export::{ExportConfig, ExportReport, export};

/// Turns `export` flags into an export configuration.
///
/// The local directory is copied before the shared one, so shared files win on a name clash.
pub fn export_config(args: &ExportArgs, display: DisplayContext) -> ConfigResult<ExportConfig> {
    ExportConfig::builder()
        .output_dir(args.output.clone())
        .asset_dirs(vec![args.asset_dir.clone(), args.shared_asset_dir.clone()])
        .display(display)
        .build()
        .map_err(|e| {
            ConfigError::new(ConfigErrorKind::InvalidSetting {
                name: "export".to_string(),
                reason: e.to_string(),
            })
        })
}

/// Handle the `export` command
#[tracing::instrument(skip_all, fields(output = %args.output.display()))]
pub fn handle_export_command(args: &ExportArgs) -> CodehouseResult<ExportReport> {
    let config = export_config(args, DisplayContext::from_env())?;
    let report = export(&config)?;

    tracing::info!(
        copied = report.copied().len(),
        placeholders = report.placeholders().len(),
        index = %report.index_path().display(),
        preview = %report.preview_path().display(),
        "Export summary"
    );
    Ok(report)
}
