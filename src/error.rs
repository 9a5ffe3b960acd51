//! Errors returned by tracker operations.

use thiserror::Error;

/// An edit range that does not fit the current string.
///
/// Returned when `start > end` or `end` exceeds the modified length. The
/// tracker is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("edit range {start}..{end} out of bounds for length {len}")]
pub struct OutOfRangeError {
    pub start: usize,
    pub end: usize,
    /// Modified length, in chars, at the time of the edit.
    pub len: usize,
}
