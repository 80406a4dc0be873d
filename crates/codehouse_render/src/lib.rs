//! Rendering for The House that Code Built.
//!
//! One maud template serves both entry points. [`RenderMode`] decides the path style:
//! the live server emits server-absolute asset paths, the static export emits relative
//! paths plus a `<base>` tag.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod mode;
mod page;
mod svg;

pub use mode::{PREVIEW_IMAGE_PATH, PageContext, RenderMode, SVG_DIR};
pub use page::{SITE_TITLE, index_markup, render_index};
pub use svg::{
    PREVIEW_HEIGHT, PREVIEW_WIDTH, layer_placeholder_svg, missing_asset_svg, preview_svg,
};
