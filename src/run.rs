//! Per-run orchestration.
//!
//! Loads the manifest, creates a fresh timestamped output directory next
//! to it, then processes each file spec in order. Manifest and output
//! directory failures are fatal; everything after that is per-file — a
//! file that cannot be read, uses an unsupported strategy, or fails to
//! write is reported and skipped without touching the rest of the run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use tracing::{error, info};

use crate::cli::Cli;
use crate::extract;
use crate::manifest::Manifest;
use crate::output;

/// Counts of manifest entries that produced output vs. were skipped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
}

/// Directory holding the manifest; relative source paths resolve against
/// it and the output directory is created inside it.
fn base_dir(manifest_path: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Runs the full extraction described by the CLI arguments.
pub fn execute(cli: &Cli) -> anyhow::Result<RunSummary> {
    let manifest = Manifest::load(&cli.manifest)?;
    let base_dir = base_dir(&cli.manifest);
    info!(
        files = manifest.files.len(),
        base_dir = %base_dir.display(),
        "manifest loaded"
    );

    let output_dir = base_dir.join(format!("output-{}", Local::now().format("%Y%m%d-%H%M%S")));
    fs::create_dir(&output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let mut summary = RunSummary::default();
    for spec in &manifest.files {
        let emit_epoch = spec.emit_epoch || cli.epoch;
        let source = spec.resolved_source(&base_dir);
        info!(
            label = %spec.label,
            source = %source.display(),
            keywords = spec.keywords.len(),
            "processing file"
        );

        let lines: Vec<String> = match fs::read_to_string(&source) {
            Ok(content) => content.lines().map(String::from).collect(),
            Err(err) => {
                error!(source = %source.display(), %err, "cannot read source, skipping");
                summary.skipped += 1;
                continue;
            }
        };

        let records = match extract::run(&lines, spec, emit_epoch) {
            Ok(records) => records,
            Err(err) => {
                error!(label = %spec.label, %err, "skipping file");
                summary.skipped += 1;
                continue;
            }
        };

        let out_path = output_dir.join(format!("{}.csv", spec.label));
        if let Err(err) = output::write_csv(&out_path, spec, emit_epoch, &records) {
            error!(path = %out_path.display(), %err, "cannot write output, skipping");
            summary.skipped += 1;
            continue;
        }

        info!(
            label = %spec.label,
            records = records.len(),
            path = %out_path.display(),
            "wrote output"
        );
        summary.processed += 1;
    }

    Ok(summary)
}
