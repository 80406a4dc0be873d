//! Deployment mode and the inputs of a page render.

use codehouse_core::{Catalog, DisplayContext};

/// Directory (relative to the site root) holding layer SVGs.
pub const SVG_DIR: &str = "svg";
/// Path (relative to the site root) of the social preview image.
pub const PREVIEW_IMAGE_PATH: &str = "static/house-preview.png";

/// Where the rendered page will be served from.
///
/// The live server answers at the site root, so it uses server-absolute paths. A static
/// export may be hosted under any sub-path, so it uses relative paths and pins them with a
/// `<base>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum RenderMode {
    /// Rendered per request by the live server
    #[default]
    #[display("server")]
    Server,
    /// Rendered once into a static export
    #[display("static")]
    Static,
}

impl RenderMode {
    /// Prefix the page script puts in front of `{layer_id}.svg`.
    pub fn asset_base(self) -> &'static str {
        match self {
            RenderMode::Server => "/svg/",
            RenderMode::Static => "svg/",
        }
    }

    /// URL used for the Open Graph and Twitter preview image.
    pub fn preview_image_url(self, display: &DisplayContext) -> String {
        match self {
            RenderMode::Server => format!(
                "{}/{}",
                display.published_site_url().trim_end_matches('/'),
                PREVIEW_IMAGE_PATH
            ),
            RenderMode::Static => PREVIEW_IMAGE_PATH.to_string(),
        }
    }

    /// Value of the `<base href>` tag, if this mode emits one.
    pub fn base_href(self, display: &DisplayContext) -> Option<String> {
        match self {
            RenderMode::Server => None,
            RenderMode::Static => Some(display.base_href()),
        }
    }
}

/// Everything a page render reads.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    catalog: &'a Catalog,
    display: &'a DisplayContext,
    mode: RenderMode,
}

impl<'a> PageContext<'a> {
    /// Creates a page context.
    pub fn new(catalog: &'a Catalog, display: &'a DisplayContext, mode: RenderMode) -> Self {
        Self {
            catalog,
            display,
            mode,
        }
    }

    /// Layers and chapters to render controls for.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Account, project and published URL.
    pub fn display(&self) -> &'a DisplayContext {
        self.display
    }

    /// Path style and base tag selection.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }
}
