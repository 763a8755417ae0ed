//! Timestamp normalization.
//!
//! Log lines carry timestamps as `MM/DD/YYYY` plus a colon-separated time
//! portion, sometimes followed by a timezone label that has already been
//! stripped by the caller. Two time shapes occur in the wild:
//!
//! - the legacy four-segment form `HH:mm:ss:SSS`, where either of the
//!   last two segments may carry a `.`-suffixed remnant to discard
//! - the dotted form `HH:mm:ss.SSS`
//!
//! Both normalize to the same instant. The zone label, when present in
//! the source line, is discarded rather than interpreted; the result is
//! always treated as UTC.

use chrono::NaiveDate;

/// Raised when a timestamp string does not tokenize into the expected
/// date and time segments, or a segment is not numeric.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed timestamp: {raw:?}")]
pub struct TimestampError {
    pub raw: String,
}

impl TimestampError {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }
}

/// Normalizes a raw timestamp string into epoch milliseconds (UTC).
pub fn normalize(raw: &str) -> Result<i64, TimestampError> {
    let malformed = || TimestampError::new(raw);

    let (date, time) = raw.trim().split_once(' ').ok_or_else(malformed)?;

    let date_parts: Vec<&str> = date.split('/').collect();
    let (month, day, year) = match date_parts.as_slice() {
        [m, d, y] => (*m, *d, *y),
        _ => return Err(malformed()),
    };

    let time_parts: Vec<&str> = time.split(':').collect();
    let (hour, minute, second, millisecond) = match time_parts.as_slice() {
        // Legacy form: second and millisecond segments may carry a
        // dotted remnant that must be discarded before parsing.
        [h, m, s, ms] => (*h, *m, before_dot(s), before_dot(ms)),
        [h, m, s_ms] => {
            let (s, ms) = s_ms.split_once('.').ok_or_else(malformed)?;
            (*h, *m, s, ms)
        }
        _ => return Err(malformed()),
    };

    let year: i32 = year.parse().map_err(|_| malformed())?;
    let month: u32 = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;
    let hour: u32 = hour.parse().map_err(|_| malformed())?;
    let minute: u32 = minute.parse().map_err(|_| malformed())?;
    let second: u32 = second.parse().map_err(|_| malformed())?;
    let millisecond: u32 = millisecond.parse().map_err(|_| malformed())?;

    let instant = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_milli_opt(hour, minute, second, millisecond))
        .ok_or_else(malformed)?;

    Ok(instant.and_utc().timestamp_millis())
}

fn before_dot(segment: &str) -> &str {
    match segment.split_once('.') {
        Some((head, _)) => head,
        None => segment,
    }
}
