//! The codehouse binary: live server, static export and catalog inspection.

use anyhow::Context;
use clap::Parser;
use codehouse::cli::{
    Cli, Commands, handle_export_command, handle_layers_command, handle_serve_command,
    load_env_files,
};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Parent directory first so a project-level .env wins
    let env_errors = load_env_files(&[Path::new("../.env"), Path::new(".env")]);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    for (file, e) in env_errors {
        warn!(file = %file.display(), error = %e, "Ignoring unreadable .env file");
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve(args) => handle_serve_command(&args)
            .await
            .with_context(|| format!("serving on {}", args.bind))?,
        Commands::Export(args) => {
            handle_export_command(&args)
                .with_context(|| format!("exporting to {}", args.output.display()))?;
        }
        Commands::Layers { format } => {
            handle_layers_command(format).context("printing the catalog")?
        }
    }
    Ok(())
}
