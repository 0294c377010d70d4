//! FinMate CLI - receipt and voice-entry extraction
//!
//! Usage:
//!   finmate extract --file seq.txt     Run the pipeline over saved model output
//!   finmate scan --file receipt.jpg    Scan an image via the vision backend

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Extract { file } => commands::cmd_extract(file.as_deref()),
        Commands::Scan { file } => commands::cmd_scan(&file).await,
    }
}
