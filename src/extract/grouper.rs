//! Transaction grouping pre-pass.
//!
//! Some logs interleave lines from concurrent transactions. Before
//! segmentation those files are reordered so that every line belonging to
//! one transaction id sits contiguously, in first-seen id order. This is a
//! narrowing transform: only `TransactionId` marker lines and the single
//! line following each one survive; everything else is dropped.

use indexmap::IndexMap;
use tracing::{debug, warn};

/// Substring identifying a line that names its transaction.
const CORRELATION_MARKER: &str = "TransactionId";

/// Whitespace-token position of the `TransactionId[...]` token.
const ID_TOKEN_INDEX: usize = 5;

/// Mapping from transaction id to its captured lines, in first-seen order.
pub type GroupTable = IndexMap<String, Vec<String>>;

/// Groups lines by transaction id.
///
/// Each marker line contributes itself plus exactly the one line that
/// follows it to its id's block. A marker on the final line of input
/// yields a block of size 1; a marker line missing the id token is
/// skipped. Neither is a fault.
pub fn group(lines: &[String]) -> GroupTable {
    let mut table = GroupTable::new();

    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        if !line.contains(CORRELATION_MARKER) {
            i += 1;
            continue;
        }

        let Some(id) = extract_id(line) else {
            warn!(line = %line, "transaction marker line has no id token, skipping");
            i += 1;
            continue;
        };

        let block = table.entry(id.clone()).or_insert_with(|| {
            debug!(%id, "new transaction");
            Vec::new()
        });
        block.push(line.clone());

        match lines.get(i + 1) {
            Some(next) => {
                block.push(next.clone());
                i += 2;
            }
            None => {
                // Marker is the last line of the file: keep the half block.
                warn!(%id, "transaction marker at end of input, block truncated");
                i += 1;
            }
        }
    }

    table
}

/// Flattens a group table into one line sequence, blocks concatenated in
/// first-seen id order.
pub fn flatten(table: GroupTable) -> Vec<String> {
    table.into_values().flatten().collect()
}

/// Pulls the transaction id out of a marker line.
///
/// The id is the 6th whitespace-delimited token, written as
/// `TransactionId[<id>]`; the label and brackets are stripped.
fn extract_id(line: &str) -> Option<String> {
    let token = line.split_whitespace().nth(ID_TOKEN_INDEX)?;
    let id = token
        .trim_start_matches("TransactionId[")
        .trim_end_matches(']');
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}
