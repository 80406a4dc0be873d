//! Argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use codehouse_export::DEFAULT_OUTPUT_DIR;
use codehouse_server::{
    ASSET_DIR_VAR, BIND_VAR, DEFAULT_ASSET_DIR, DEFAULT_BIND, DEFAULT_SHARED_ASSET_DIR,
    SHARED_ASSET_DIR_VAR,
};
use std::path::PathBuf;

/// The House that Code Built.
#[derive(Parser, Debug)]
#[command(name = "codehouse")]
#[command(about = "Interactive layered SVG house: live server and static exporter")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the page over HTTP until Ctrl+C
    Serve(ServeArgs),
    /// Write a self-contained static site
    Export(ExportArgs),
    /// Print the layer and chapter catalog
    Layers {
        /// Output format
        #[arg(long, value_enum, default_value_t = LayersFormat::Human)]
        format: LayersFormat,
    },
}

/// Flags of `codehouse serve`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = BIND_VAR, default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Project-local SVG directory, searched first
    #[arg(long, env = ASSET_DIR_VAR, default_value = DEFAULT_ASSET_DIR)]
    pub asset_dir: PathBuf,

    /// Shared SVG directory, searched second
    #[arg(long, env = SHARED_ASSET_DIR_VAR, default_value = DEFAULT_SHARED_ASSET_DIR)]
    pub shared_asset_dir: PathBuf,
}

/// Flags of `codehouse export`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ExportArgs {
    /// Output directory (deleted and rebuilt)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Project-local SVG directory, copied first
    #[arg(long, env = ASSET_DIR_VAR, default_value = DEFAULT_ASSET_DIR)]
    pub asset_dir: PathBuf,

    /// Shared SVG directory, copied second
    #[arg(long, env = SHARED_ASSET_DIR_VAR, default_value = DEFAULT_SHARED_ASSET_DIR)]
    pub shared_asset_dir: PathBuf,
}

/// Output format of `codehouse layers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayersFormat {
    /// One line per layer and chapter
    Human,
    /// Pretty-printed JSON
    Json,
}
