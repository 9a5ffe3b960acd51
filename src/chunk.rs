//! Chunk index over the change log.
//!
//! The log is stored as a sequence of chunks, each holding a bounded run of
//! consecutive changes together with cached modified/original char counts.
//! Position lookups walk the chunk summaries first and only scan the entries
//! of a single chunk, so a lookup costs O(chunks + chunk_size) rather than
//! O(changes).

use crate::change::Change;

/// A bounded group of consecutive changes with cached lengths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    modified_len: usize,
    original_len: usize,
    entries: Vec<Change>,
}

impl Chunk {
    pub(crate) fn new(entries: Vec<Change>) -> Chunk {
        let mut chunk = Chunk {
            modified_len: 0,
            original_len: 0,
            entries,
        };
        chunk.recount();
        return chunk;
    }

    fn recount(&mut self) {
        self.modified_len = self.entries.iter().map(Change::modified_len).sum();
        self.original_len = self.entries.iter().map(Change::original_len).sum();
    }

    /// Chars this chunk contributes to the modified string.
    #[inline(always)]
    pub fn modified_len(&self) -> usize {
        return self.modified_len;
    }

    /// Chars this chunk contributes to the original string.
    #[inline(always)]
    pub fn original_len(&self) -> usize {
        return self.original_len;
    }

    #[inline(always)]
    pub fn entries(&self) -> &[Change] {
        return &self.entries;
    }

    /// Number of entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    /// Inserted chars held by this chunk.
    pub fn added_len(&self) -> usize {
        return self.modified_len - self.unchanged_len();
    }

    /// Deleted chars held by this chunk.
    pub fn removed_len(&self) -> usize {
        return self.original_len - self.unchanged_len();
    }

    fn unchanged_len(&self) -> usize {
        return self
            .entries
            .iter()
            .filter(|c| c.is_unchanged())
            .map(Change::len)
            .sum();
    }

    /// Move the entries out, leaving this chunk empty.
    pub(crate) fn take_entries(&mut self) -> Vec<Change> {
        self.modified_len = 0;
        self.original_len = 0;
        return std::mem::take(&mut self.entries);
    }

    /// Check that the cached counts match the entries.
    #[cfg(any(test, debug_assertions))]
    pub(crate) fn check_counts(&self) {
        let modified: usize = self.entries.iter().map(Change::modified_len).sum();
        let original: usize = self.entries.iter().map(Change::original_len).sum();
        assert_eq!(
            modified, self.modified_len,
            "INVARIANT VIOLATED: chunk modified_len={} but entries sum to {}",
            self.modified_len, modified
        );
        assert_eq!(
            original, self.original_len,
            "INVARIANT VIOLATED: chunk original_len={} but entries sum to {}",
            self.original_len, original
        );
    }
}

/// Pack `entries` into the fewest chunks of at most `max_entries` each,
/// sized as evenly as possible. Returns no chunks for no entries.
pub(crate) fn pack(mut entries: Vec<Change>, max_entries: usize) -> Vec<Chunk> {
    assert!(max_entries > 0, "chunks must hold at least one entry");
    let total = entries.len();
    if total == 0 {
        return Vec::new();
    }

    let count = total.div_ceil(max_entries);
    if count == 1 {
        return vec![Chunk::new(entries)];
    }

    let base = total / count;
    let extra = total % count;

    let mut chunks = Vec::with_capacity(count);
    for i in (0..count).rev() {
        let size = base + usize::from(i < extra);
        let right = entries.split_off(entries.len() - size);
        chunks.push(Chunk::new(right));
    }
    chunks.reverse();

    return chunks;
}
