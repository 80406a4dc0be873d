//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the codehouse binary.

mod commands;
mod env;
mod export;
mod layers;
mod serve;

pub use commands::{Cli, Commands, ExportArgs, LayersFormat, ServeArgs};
pub use env::load_env_files;
pub use export::{export_config, handle_export_command};
pub use layers::{handle_layers_command, render_layers};
pub use serve::{handle_serve_command, server_config};
