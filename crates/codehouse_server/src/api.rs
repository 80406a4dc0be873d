//! HTTP routes of the live renderer.

use crate::{AssetResolver, DisplaySource};
use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};
use codehouse_core::Catalog;
use codehouse_render::{PageContext, RenderMode, render_index};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::instrument;

/// Content type of every `/svg/` response.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Shared, read-only state of the live renderer.
#[derive(Clone, Debug)]
pub struct ApiState {
    /// Layers and chapters rendered on the page.
    pub catalog: &'static Catalog,
    /// Where each request's display variables come from.
    pub display: DisplaySource,
    /// Asset lookup chain.
    pub assets: Arc<AssetResolver>,
}

impl ApiState {
    /// Creates a new API state.
    pub fn new(catalog: &'static Catalog, display: DisplaySource, assets: AssetResolver) -> Self {
        Self {
            catalog,
            display,
            assets: Arc::new(assets),
        }
    }
}

/// Creates the API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/svg/*filename", get(serve_asset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Renders the page with the current display context.
#[instrument(skip(state))]
async fn index(State(state): State<ApiState>) -> Html<String> {
    let display = state.display.current();
    Html(render_index(&PageContext::new(
        state.catalog,
        &display,
        RenderMode::Server,
    )))
}

/// Serves a layer SVG, falling back to a placeholder.
#[instrument(skip(state))]
async fn serve_asset(
    State(state): State<ApiState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    let resolved = state.assets.resolve(&filename).await;
    ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], resolved.bytes)
}
