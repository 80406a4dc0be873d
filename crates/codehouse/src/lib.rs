//! The House that Code Built.
//!
//! An interactive, layered SVG illustration of a house used to teach how web pages are
//! built. Checkboxes show and hide visual layers; chapter presets switch between curated
//! layer combinations.
//!
//! The workspace ships two entry points over one shared catalog:
//! - a live HTTP renderer ([`serve`])
//! - a static exporter producing a self-contained site ([`export`])
//!
//! # Example
//!
//! ```no_run
//! use codehouse::{ExportConfig, export};
//!
//! let config = ExportConfig::builder().output_dir("gh-pages").build().unwrap();
//! let report = export(&config).unwrap();
//! println!("wrote {}", report.index_path().display());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;

pub use codehouse_core::{
    Catalog, Chapter, ChapterBuilder, DisplayContext, Layer, LayerBuilder, get_chapters,
    get_layers,
};
pub use codehouse_error::{
    CodehouseError, CodehouseErrorKind, CodehouseResult, ConfigError, ConfigErrorKind,
    ExportError, ExportErrorKind, ServerError, ServerErrorKind,
};
pub use codehouse_export::{ExportConfig, ExportReport, StaticExporter, export};
pub use codehouse_render::{PageContext, RenderMode, render_index};
pub use codehouse_server::{LiveServer, ServerConfig, serve};
