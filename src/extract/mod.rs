//! The log record extraction engine.
//!
//! Raw lines flow through an optional transaction-grouping pre-pass, then
//! a single-pass record segmenter that detects record boundaries, tracks
//! the current timestamp context, and matches keyword patterns. Free-form
//! timestamp strings are normalized to epoch milliseconds.
//!
//! - [`timestamp`] - timestamp string → epoch millisecond normalization
//! - [`grouper`] - reorders lines so each transaction's lines are contiguous
//! - [`segmenter`] - the boundary/context/keyword state machine
//! - [`pipeline`] - composes the above per configured strategy

pub mod grouper;
pub mod pipeline;
pub mod segmenter;
pub mod timestamp;

pub use pipeline::{run, ExtractError};
pub use segmenter::{segment, Record};
pub use timestamp::{normalize, TimestampError};
