//! Manifest-driven log field extraction.
//!
//! `logsift` reads a JSON manifest describing a set of log files and, for
//! each one, a record-boundary marker, a context marker, and keyword/tag
//! pairs. It segments each file into logical records, associates keyword
//! matches with the timestamp carried by the most recent context line, and
//! writes one CSV per file into a fresh timestamped output directory.
//!
//! # Module Structure
//!
//! - [`cli`] - Command-line argument surface
//! - [`manifest`] - Manifest data model and JSON loading
//! - [`extract`] - The extraction engine (timestamp normalization,
//!   transaction grouping, record segmentation, strategy dispatch)
//! - [`output`] - CSV serialization of extracted records
//! - [`run`] - Per-run orchestration and error policy

pub mod cli;
pub mod extract;
pub mod manifest;
pub mod output;
pub mod run;

pub use cli::Cli;
pub use extract::{ExtractError, Record};
pub use manifest::{FileSpec, KeywordSpec, Manifest, ManifestError, Strategy};
