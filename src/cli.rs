//! Command-line argument surface.

use clap::Parser;
use std::path::PathBuf;

/// Extracts tagged field values from application log files into CSV.
#[derive(Debug, Parser)]
#[command(name = "logsift", version, about)]
pub struct Cli {
    /// Path to the JSON manifest describing the files to process
    pub manifest: PathBuf,

    /// Emit epoch-millisecond companion columns for every file,
    /// regardless of the per-file `emitEpoch` setting
    #[arg(long)]
    pub epoch: bool,
}
