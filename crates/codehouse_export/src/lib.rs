//! Static site export for The House that Code Built.
//!
//! Produces a directory that any static host can serve from a sub-path:
//! `index.html` with a `<base>` tag, every layer SVG under `svg/`, and the
//! social preview under `static/`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod contract;
mod exporter;
mod preview;

pub use config::{DEFAULT_OUTPUT_DIR, ExportConfig, ExportConfigBuilder};
pub use contract::verify_static_page;
pub use exporter::{ExportReport, INDEX_FILE, StaticExporter, export};
pub use preview::rasterize_preview;
