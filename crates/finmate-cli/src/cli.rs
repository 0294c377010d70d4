//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// FinMate - receipt and voice-entry extraction
#[derive(Parser)]
#[command(name = "finmate")]
#[command(about = "Extract transactions from receipt scans and saved model output", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the extraction pipeline over a saved raw model sequence
    Extract {
        /// File containing the raw tagged sequence (stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Scan a receipt image via the configured vision backend
    ///
    /// Requires VISION_HOST (or VISION_BACKEND=mock for a dry run).
    Scan {
        /// Receipt image file (JPG/PNG)
        #[arg(short, long)]
        file: PathBuf,
    },
}
