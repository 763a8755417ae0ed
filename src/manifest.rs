//! Manifest data model and JSON loading.
//!
//! A manifest is a JSON document with a top-level `files` list. Each entry
//! names a source log file (relative to the manifest's directory), an
//! output label, a processing strategy, the record-boundary and context
//! markers, and an ordered list of keyword/tag pairs to extract.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading a manifest. Both are fatal: nothing is
/// processed on a manifest that cannot be read and parsed in full.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One keyword to look for within a record's span.
///
/// `tag` names the output column. Tags are expected to be unique within a
/// file's keyword set; a duplicate tag silently overwrites the field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSpec {
    /// Substring that marks a matching line.
    pub match_pattern: String,
    /// Output column name for the extracted value.
    pub tag: String,
}

/// Per-file processing strategy.
///
/// Unrecognized manifest tags are preserved rather than rejected at parse
/// time: an unsupported strategy skips that file without aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Strategy {
    /// Segment the raw line sequence directly.
    Direct,
    /// Group lines by transaction id before segmenting.
    TransactionGrouped,
    /// Anything else, e.g. the legacy `IDM` placeholder.
    Unsupported(String),
}

impl From<String> for Strategy {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "direct" => Strategy::Direct,
            "transactionGrouped" => Strategy::TransactionGrouped,
            _ => Strategy::Unsupported(tag),
        }
    }
}

/// Description of one log file to process.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSpec {
    /// Source log file, relative to the manifest's directory.
    pub source_path: PathBuf,
    /// Output label; names the CSV file and fills the first column.
    pub label: String,
    /// Substring whose presence on a line starts a new record.
    pub record_start_marker: String,
    /// Substring identifying a line that carries the current timestamp.
    pub context_marker: String,
    /// Keywords to extract, in output column order.
    pub keywords: Vec<KeywordSpec>,
    /// Extraction strategy for this file.
    pub strategy: Strategy,
    /// Emit an epoch-millisecond companion column per keyword.
    #[serde(default)]
    pub emit_epoch: bool,
}

impl FileSpec {
    /// Resolves the source path against the manifest's directory.
    pub fn resolved_source(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.source_path)
    }
}

/// The full manifest: an ordered list of file descriptions, loaded once at
/// startup and immutable for the run.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub files: Vec<FileSpec>,
}

impl Manifest {
    /// Loads and parses a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let source = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&source).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
