//! String Tracker - tracks how a string has been edited over time.
//!
//! A tracker keeps the string it was created with (the *original*), the
//! string after every edit so far (the *current* or *modified* string), and a
//! change log relating the two: a sequence of unchanged, added, and removed
//! spans. Removed text stays in the log, so either string can be rebuilt and
//! positions can be translated between them.
//!
//! The log is split into chunks that cache their lengths in both strings, so
//! locating an edit or translating a position walks chunk summaries instead
//! of every change.
//!
//! # Quick Start
//!
//! ```
//! use string_tracker::StringTracker;
//!
//! let mut tracker = StringTracker::new("hello");
//! tracker.edit(5, 5, " world").unwrap();
//! tracker.edit(0, 5, "goodbye").unwrap();
//!
//! assert_eq!(tracker.current(), "goodbye world");
//! assert_eq!(tracker.original(), "hello");
//! assert_eq!(tracker.diff(), "{+goodbye world}{-hello}");
//!
//! // Positions translate between the two strings.
//! let mut tracker = StringTracker::new("abcdef");
//! tracker.edit(1, 4, "").unwrap();
//! assert_eq!(tracker.current(), "aef");
//! assert_eq!(tracker.modified_to_original(1), 4);
//! assert_eq!(tracker.original_to_modified(2), 1);
//! ```

pub mod change;
pub mod change_log;
pub mod chunk;
pub mod config;
mod edit;
pub mod error;
pub mod tracker;

pub use change::{Change, ChangeKind};
pub use chunk::Chunk;
pub use config::{TrackerConfig, DEFAULT_CHUNK_SIZE};
pub use error::OutOfRangeError;
pub use tracker::{Bias, StringTracker};
