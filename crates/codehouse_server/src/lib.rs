//! Live HTTP renderer for The House that Code Built.
//!
//! Routes:
//! - `GET /` renders the page in server mode
//! - `GET /svg/{filename}` serves a layer SVG or a placeholder
//!
//! Every other path is a 404 from the router.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod assets;
mod config;

pub use api::{ApiState, SVG_CONTENT_TYPE, create_router};
pub use assets::{AssetOrigin, AssetResolver, AssetSource, DirectorySource, ResolvedAsset};
pub use config::{
    ASSET_DIR_VAR, BIND_VAR, DEFAULT_ASSET_DIR, DEFAULT_BIND, DEFAULT_SHARED_ASSET_DIR,
    DisplaySource, SHARED_ASSET_DIR_VAR, ServerConfig, ServerConfigBuilder,
};

use codehouse_core::Catalog;
use codehouse_error::{ServerError, ServerErrorKind, ServerResult};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// A bound, not yet running, live server.
#[derive(Debug)]
pub struct LiveServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    state: ApiState,
}

impl LiveServer {
    /// Binds the configured address and prepares the router state.
    #[instrument(skip_all, fields(bind = %config.bind_addr()))]
    pub async fn bind(config: &ServerConfig) -> ServerResult<Self> {
        let listener = TcpListener::bind(config.bind_addr().as_str())
            .await
            .map_err(|e| {
                ServerError::new(ServerErrorKind::Bind {
                    addr: config.bind_addr().clone(),
                    reason: e.to_string(),
                })
            })?;
        let local_addr = listener.local_addr().map_err(|e| {
            ServerError::new(ServerErrorKind::Bind {
                addr: config.bind_addr().clone(),
                reason: e.to_string(),
            })
        })?;

        let assets = AssetResolver::from_dirs(config.asset_dir(), config.shared_asset_dir());
        info!(
            %local_addr,
            asset_dir = %config.asset_dir().display(),
            shared_asset_dir = %config.shared_asset_dir().display(),
            "Live server bound"
        );

        Ok(Self {
            listener,
            local_addr,
            state: ApiState::new(Catalog::shared(), config.display().clone(), assets),
        })
    }

    /// Address actually bound (useful when binding port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves requests until `shutdown` resolves.
    pub async fn run_until<F>(self, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = create_router(self.state);
        info!(addr = %self.local_addr, "Serving The House that Code Built");
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;
        info!("Live server stopped");
        Ok(())
    }

    /// Serves requests until Ctrl+C.
    pub async fn run(self) -> ServerResult<()> {
        self.run_until(shutdown_signal()).await
    }
}

/// Binds and serves until Ctrl+C.
pub async fn serve(config: &ServerConfig) -> ServerResult<()> {
    LiveServer::bind(config).await?.run().await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C, serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping gracefully...");
}
