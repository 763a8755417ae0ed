//! Record segmentation.
//!
//! A single pass over the line sequence. A line containing the record
//! start marker closes the in-progress record (if one was started) and
//! opens a fresh one. A line containing the context marker becomes the
//! current timestamp context. Any other line is checked against every
//! keyword; a match stores the value derived from the current context
//! under the keyword's tag. The in-progress record is always flushed at
//! end of input, even when no marker was ever seen.

use indexmap::IndexMap;
use tracing::warn;

use super::timestamp;
use crate::manifest::FileSpec;

/// Field name carrying the file's label in every record.
pub const LABEL_FIELD: &str = "label";

/// Suffix of the epoch-millisecond companion column.
pub const EPOCH_SUFFIX: &str = "-epoch";

/// Timezone label terminating the useful part of a context line.
const ZONE_LABEL: &str = "UTC";

/// One extracted record: field name → value, in insertion order.
pub type Record = IndexMap<String, String>;

fn seeded_record(label: &str) -> Record {
    let mut record = Record::new();
    record.insert(LABEL_FIELD.to_string(), label.to_string());
    record
}

/// Derives a field value from the current context line: strip the
/// `marker:` prefix, trim, and cut off the zone label and anything after.
fn derive_value(context: &str, context_marker: &str) -> String {
    let prefix = format!("{context_marker}:");
    let stripped = context.strip_prefix(&prefix).unwrap_or(context).trim();
    match stripped.find(ZONE_LABEL) {
        Some(pos) => stripped[..pos].trim().to_string(),
        None => stripped.to_string(),
    }
}

/// Segments a line sequence into records per the file's markers and
/// keywords.
pub fn segment(lines: &[String], spec: &FileSpec, emit_epoch: bool) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current = seeded_record(&spec.label);
    let mut context = String::new();
    let mut started = false;

    for line in lines {
        if line.contains(&spec.record_start_marker) {
            if started {
                records.push(std::mem::replace(&mut current, seeded_record(&spec.label)));
            }
            // A start marker always (re)opens a record, whatever the
            // prior state.
            started = true;
            continue;
        }

        if line.contains(&spec.context_marker) {
            context = line.clone();
            continue;
        }

        for keyword in &spec.keywords {
            if !line.contains(&keyword.match_pattern) {
                continue;
            }
            let value = derive_value(&context, &spec.context_marker);
            current.insert(keyword.tag.clone(), value.clone());
            if emit_epoch {
                let epoch_tag = format!("{}{}", keyword.tag, EPOCH_SUFFIX);
                match timestamp::normalize(&value) {
                    Ok(millis) => {
                        current.insert(epoch_tag, millis.to_string());
                    }
                    Err(err) => {
                        // Last match wins for the raw field; drop any
                        // epoch left over from an earlier match so the
                        // pair stays consistent.
                        warn!(tag = %keyword.tag, %err, "epoch column omitted");
                        current.shift_remove(&epoch_tag);
                    }
                }
            }
        }
    }

    // The final record is flushed once, unconditionally.
    records.push(current);
    records
}
