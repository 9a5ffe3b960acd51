//! The string tracker: an original string, its change log, and the chunk
//! index over that log.
//!
//! Edits are expressed in modified-string coordinates. Each edit only
//! rebuilds a small window of chunks:
//!
//! - the first chunk whose modified span reaches `start` (it holds the char
//!   just before the edit, or is the first chunk),
//! - the first chunk whose modified span passes `end` (it holds the char
//!   just after the edit, or is the last chunk),
//! - everything in between, plus one neighbour on either side.
//!
//! Every entry that the splice can regroup lies inside that window, so the
//! chunks outside it never need to be touched or recounted.

use std::fmt;
use std::ops::Range;

use crate::change::{Change, ChangeKind};
use crate::change_log;
use crate::chunk::{self, Chunk};
use crate::config::TrackerConfig;
use crate::edit::splice;
use crate::error::OutOfRangeError;

/// Which way to resolve a position that sits on the boundary of text that
/// exists in only one of the two strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bias {
    /// Resolve to the earliest matching position.
    Before,
    /// Resolve past any text missing from the source string.
    After,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timeline {
    Modified,
    Original,
}

impl Timeline {
    #[inline(always)]
    fn other(self) -> Timeline {
        return match self {
            Timeline::Modified => Timeline::Original,
            Timeline::Original => Timeline::Modified,
        };
    }

    #[inline(always)]
    fn change_len(self, change: &Change) -> usize {
        return match self {
            Timeline::Modified => change.modified_len(),
            Timeline::Original => change.original_len(),
        };
    }

    #[inline(always)]
    fn chunk_len(self, chunk: &Chunk) -> usize {
        return match self {
            Timeline::Modified => chunk.modified_len(),
            Timeline::Original => chunk.original_len(),
        };
    }
}

/// Tracks how a string has been edited since construction.
#[derive(Clone, Debug)]
pub struct StringTracker {
    /// Frozen at construction.
    original: String,
    /// Never empty. Concatenated in order, the entries form the change log.
    chunks: Vec<Chunk>,
    config: TrackerConfig,
}

impl StringTracker {
    pub fn new(text: impl Into<String>) -> StringTracker {
        return StringTracker::with_config(text, TrackerConfig::default());
    }

    pub fn with_config(text: impl Into<String>, config: TrackerConfig) -> StringTracker {
        let original = text.into();
        let entry = if original.is_empty() {
            Change::sentinel()
        } else {
            Change::unchanged(original.clone())
        };
        return StringTracker {
            original,
            chunks: vec![Chunk::new(vec![entry])],
            config,
        };
    }

    pub fn config(&self) -> TrackerConfig {
        return self.config;
    }

    // --- Queries ---

    /// The string the tracker was created with.
    pub fn original(&self) -> &str {
        return &self.original;
    }

    /// The string after every edit so far.
    pub fn current(&self) -> String {
        return change_log::modified_text(self.changes(), self.len());
    }

    /// Length of the current string in chars.
    pub fn len(&self) -> usize {
        return self.chunks.iter().map(Chunk::modified_len).sum();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Length of the original string in chars.
    pub fn original_len(&self) -> usize {
        return self.chunks.iter().map(Chunk::original_len).sum();
    }

    /// The flattened change log.
    pub fn changes(&self) -> impl Iterator<Item = &Change> + '_ {
        return self.chunks.iter().flat_map(|chunk| chunk.entries().iter());
    }

    pub fn change_chunks(&self) -> &[Chunk] {
        return &self.chunks;
    }

    /// True when no edit has had any lasting effect.
    pub fn is_pristine(&self) -> bool {
        return self.changes().all(Change::is_unchanged);
    }

    /// Total inserted chars still present in the current string.
    pub fn added_len(&self) -> usize {
        return self.chunks.iter().map(Chunk::added_len).sum();
    }

    /// Total chars of the original string that are no longer present.
    pub fn removed_len(&self) -> usize {
        return self.chunks.iter().map(Chunk::removed_len).sum();
    }

    /// Render the change log as `text{+added}{-removed}`.
    pub fn diff(&self) -> String {
        let mut out = String::new();
        for change in self.changes() {
            out.push_str(&change.to_string());
        }
        return out;
    }

    // --- Edits ---

    /// Replace the chars `[start, end)` of the current string with
    /// `replacement`. Fails without side effects when the range does not fit.
    pub fn edit(&mut self, start: usize, end: usize, replacement: &str) -> Result<(), OutOfRangeError> {
        let len = self.len();
        if start > end || end > len {
            return Err(OutOfRangeError { start, end, len });
        }

        let (first, last, before) = self.window(start, end);
        log::trace!(
            "edit {}..{} with {} bytes, window chunks {}..={} of {}",
            start,
            end,
            replacement.len(),
            first,
            last,
            self.chunks.len()
        );

        let mut entries = Vec::new();
        for chunk in &mut self.chunks[first..=last] {
            entries.append(&mut chunk.take_entries());
        }

        let spliced = splice(entries, start - before, end - before, replacement);
        let mut rebuilt = chunk::pack(spliced, self.config.max_chunk_entries());
        if rebuilt.is_empty() {
            assert!(
                first == 0 && last + 1 == self.chunks.len(),
                "edit emptied chunks {}..={} but the log continues past them",
                first,
                last
            );
            rebuilt.push(Chunk::new(vec![Change::sentinel()]));
        }

        let replaced = last - first + 1;
        if rebuilt.len() != replaced {
            log::debug!(
                "rebuilt {} chunks into {} ({} total)",
                replaced,
                rebuilt.len(),
                self.chunks.len() - replaced + rebuilt.len()
            );
        }
        self.chunks.splice(first..=last, rebuilt);

        self.check_invariants();
        return Ok(());
    }

    pub fn insert(&mut self, pos: usize, text: &str) -> Result<(), OutOfRangeError> {
        return self.edit(pos, pos, text);
    }

    pub fn delete(&mut self, start: usize, end: usize) -> Result<(), OutOfRangeError> {
        return self.edit(start, end, "");
    }

    /// Replace the whole current string.
    pub fn replace_all(&mut self, text: &str) -> Result<(), OutOfRangeError> {
        let len = self.len();
        return self.edit(0, len, text);
    }

    /// Find the chunks an edit of `[start, end)` must rebuild.
    /// Returns `(first, last, modified chars before first)`.
    fn window(&self, start: usize, end: usize) -> (usize, usize, usize) {
        let last_index = self.chunks.len() - 1;

        let mut before = 0usize;
        let mut first = last_index;
        let mut first_before = 0usize;
        let mut i = 0;
        while i < self.chunks.len() {
            let here = self.chunks[i].modified_len();
            if before + here >= start {
                first = i;
                first_before = before;
                break;
            }
            before += here;
            i += 1;
        }

        let mut last = last_index;
        while i < self.chunks.len() {
            let here = self.chunks[i].modified_len();
            if before + here > end {
                last = i;
                break;
            }
            before += here;
            i += 1;
        }

        if first > 0 {
            first -= 1;
            first_before -= self.chunks[first].modified_len();
        }
        let last = (last + 1).min(last_index);

        return (first, last, first_before);
    }

    // --- Position translation ---

    /// Map a position in the current string to the original string.
    ///
    /// A position inside inserted text maps to the original position just
    /// before the insertion. A position right after deleted text maps past
    /// it. Positions beyond the end are clamped.
    pub fn modified_to_original(&self, pos: usize) -> usize {
        return self.translate(pos, Timeline::Modified, Bias::After);
    }

    /// Map a position in the original string to the current string.
    ///
    /// A position inside deleted text maps to the current position where the
    /// deletion happened. A position right before inserted text maps past
    /// it. Positions beyond the end are clamped.
    pub fn original_to_modified(&self, pos: usize) -> usize {
        return self.translate(pos, Timeline::Original, Bias::After);
    }

    pub fn modified_to_original_with(&self, pos: usize, bias: Bias) -> usize {
        return self.translate(pos, Timeline::Modified, bias);
    }

    pub fn original_to_modified_with(&self, pos: usize, bias: Bias) -> usize {
        return self.translate(pos, Timeline::Original, bias);
    }

    /// Map a span of the original string onto the current string. Text
    /// inserted at either edge is left out; a span whose text was deleted
    /// entirely maps to an empty range.
    pub fn original_range_to_modified(&self, range: Range<usize>) -> Range<usize> {
        return self.translate_range(range, Timeline::Original);
    }

    /// Map a span of the current string onto the original string.
    pub fn modified_range_to_original(&self, range: Range<usize>) -> Range<usize> {
        return self.translate_range(range, Timeline::Modified);
    }

    fn translate_range(&self, range: Range<usize>, from: Timeline) -> Range<usize> {
        let start = self.translate(range.start, from, Bias::After);
        if range.end <= range.start {
            return start..start;
        }
        let end = self.translate(range.end, from, Bias::Before);
        return start..end.max(start);
    }

    fn translate(&self, pos: usize, from: Timeline, bias: Bias) -> usize {
        let to = from.other();
        let mut remaining = pos;
        let mut other = 0usize;

        for chunk in &self.chunks {
            let here = from.chunk_len(chunk);
            let inside = match bias {
                Bias::Before => remaining <= here,
                Bias::After => remaining < here,
            };
            if !inside {
                remaining -= here;
                other += to.chunk_len(chunk);
                continue;
            }

            for change in chunk.entries() {
                if bias == Bias::Before && remaining == 0 {
                    return other;
                }
                let source = from.change_len(change);
                if remaining < source {
                    return match change.kind() {
                        ChangeKind::Unchanged => other + remaining,
                        ChangeKind::Added | ChangeKind::Removed => other,
                    };
                }
                remaining -= source;
                other += to.change_len(change);
            }
            debug_assert_eq!(remaining, 0, "INVARIANT VIOLATED: chunk length cache disagrees with entries");
            return other;
        }

        return other;
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        let max = self.config.max_chunk_entries();
        assert!(!self.chunks.is_empty(), "INVARIANT VIOLATED: no chunks");
        for (i, chunk) in self.chunks.iter().enumerate() {
            assert!(
                !chunk.is_empty() && chunk.len() <= max,
                "INVARIANT VIOLATED: chunk {} has {} entries (max {})",
                i,
                chunk.len(),
                max
            );
            chunk.check_counts();
        }

        let log: Vec<Change> = self.changes().cloned().collect();
        if let Some(violation) = change_log::find_violation(&log, true) {
            panic!("INVARIANT VIOLATED: {}", violation);
        }

        let original = change_log::original_text(&log, self.original.len());
        assert_eq!(
            original, self.original,
            "INVARIANT VIOLATED: log no longer reconstructs the original"
        );
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}
}

impl Default for StringTracker {
    fn default() -> Self {
        return StringTracker::new(String::new());
    }
}

/// Writes the current string.
impl fmt::Display for StringTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for change in self.changes() {
            if change.kind().counts_in_modified() {
                f.write_str(change.text())?;
            }
        }
        return Ok(());
    }
}
