//! Core data types for The House that Code Built.
//!
//! This crate is the single source of the layer/chapter configuration. The live server
//! and the static exporter both read it from here, so the two can never drift apart.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod chapter;
mod display;
mod layer;

pub use catalog::{Catalog, get_chapters, get_layers};
pub use chapter::{Chapter, ChapterBuilder};
pub use display::{
    ACCOUNT_VAR, DEFAULT_ACCOUNT, DEFAULT_PROJECT, DisplayContext, PROJECT_VAR, SITE_URL_VAR,
};
pub use layer::{Layer, LayerBuilder, title_case_id};
