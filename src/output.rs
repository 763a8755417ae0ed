//! CSV serialization of extracted records.
//!
//! One CSV per file spec. Column order is fixed by the manifest: the
//! `label` field first, then each keyword's tag (and its `-epoch`
//! companion when enabled) in declaration order. The header row is always
//! written, even when no records follow; a field absent from a record
//! serializes as an empty cell.

use std::path::Path;

use crate::extract::segmenter::{EPOCH_SUFFIX, LABEL_FIELD};
use crate::extract::Record;
use crate::manifest::FileSpec;

/// Builds the ordered column list for one file spec.
pub fn columns(spec: &FileSpec, emit_epoch: bool) -> Vec<String> {
    let mut columns = Vec::with_capacity(1 + spec.keywords.len() * 2);
    columns.push(LABEL_FIELD.to_string());
    for keyword in &spec.keywords {
        columns.push(keyword.tag.clone());
        if emit_epoch {
            columns.push(format!("{}{}", keyword.tag, EPOCH_SUFFIX));
        }
    }
    columns
}

/// Writes records to `path` as CSV with a leading header row.
pub fn write_csv(
    path: &Path,
    spec: &FileSpec,
    emit_epoch: bool,
    records: &[Record],
) -> Result<(), csv::Error> {
    let columns = columns(spec, emit_epoch);
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&columns)?;
    for record in records {
        let row = columns
            .iter()
            .map(|column| record.get(column).map(String::as_str).unwrap_or(""));
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
