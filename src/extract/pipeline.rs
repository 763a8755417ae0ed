//! Strategy dispatch for one file's extraction.

use tracing::info;

use super::{grouper, segmenter, Record};
use crate::manifest::{FileSpec, Strategy};

/// Per-file extraction failures. Unsupported strategies are reported and
/// the file skipped; they never abort the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("Unsupported strategy: {0}")]
    UnsupportedStrategy(String),
}

/// Runs the extraction variant configured for this file over an
/// already-read line sequence.
pub fn run(lines: &[String], spec: &FileSpec, emit_epoch: bool) -> Result<Vec<Record>, ExtractError> {
    match &spec.strategy {
        Strategy::Direct => Ok(segmenter::segment(lines, spec, emit_epoch)),
        Strategy::TransactionGrouped => {
            let grouped = grouper::flatten(grouper::group(lines));
            info!(
                label = %spec.label,
                kept = grouped.len(),
                total = lines.len(),
                "transaction grouping pass complete"
            );
            Ok(segmenter::segment(&grouped, spec, emit_epoch))
        }
        Strategy::Unsupported(tag) => Err(ExtractError::UnsupportedStrategy(tag.clone())),
    }
}
