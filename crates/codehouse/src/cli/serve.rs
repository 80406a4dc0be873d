//! Live server command handler.

use super::ServeArgs;
use codehouse_error::{CodehouseResult, ConfigError, ConfigErrorKind, ConfigResult};
use codehouse_server::{BIND_VAR, ServerConfig, serve};
use std::net::SocketAddr;

/// Turns `serve` flags into a server configuration.
///
/// The bind address must be a literal `ip:port`.
pub fn server_config(args: &ServeArgs) -> ConfigResult<ServerConfig> {
    args.bind.parse::<SocketAddr>().map_err(|e| {
        ConfigError::new(ConfigErrorKind::InvalidSetting {
            name: BIND_VAR.to_string(),
            reason: format!("'{}': {}", args.bind, e),
        })
    })?;

    ServerConfig::builder()
        .bind_addr(args.bind.clone())
        .asset_dir(args.asset_dir.clone())
        .shared_asset_dir(args.shared_asset_dir.clone())
        .build()
        .map_err(|e| {
            ConfigError::new(ConfigErrorKind::InvalidSetting {
                name: "serve".to_string(),
                reason: e.to_string(),
            })
        })
}

/// Handle the `serve` command
#[tracing::instrument(skip_all, fields(bind = %args.bind))]
pub async fn handle_serve_command(args: &ServeArgs) -> CodehouseResult<()> {
    let config = server_config(args)?;
    tracing::info!("Starting live server");
    serve(&config).await?;
    Ok(())
}
