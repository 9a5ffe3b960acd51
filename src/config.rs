//! Tracker configuration.

use std::num::NonZeroUsize;

/// Default target number of changes per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 64;

const DEFAULT_CHUNK_SIZE_NONZERO: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CHUNK_SIZE) {
    Some(size) => size,
    None => panic!("DEFAULT_CHUNK_SIZE must be non-zero"),
};

/// Tunable parameters for a `StringTracker`.
///
/// `chunk_size` only trades lookup speed against rebuild cost; every
/// positive value yields the same observable behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackerConfig {
    chunk_size: NonZeroUsize,
}

impl TrackerConfig {
    pub fn new(chunk_size: NonZeroUsize) -> TrackerConfig {
        return TrackerConfig { chunk_size };
    }

    /// Returns `None` for a chunk size of zero.
    pub fn with_chunk_size(chunk_size: usize) -> Option<TrackerConfig> {
        return NonZeroUsize::new(chunk_size).map(TrackerConfig::new);
    }

    #[inline(always)]
    pub fn chunk_size(&self) -> usize {
        return self.chunk_size.get();
    }

    /// A chunk never holds more than this many changes.
    #[inline(always)]
    pub fn max_chunk_entries(&self) -> usize {
        return self.chunk_size.get().saturating_mul(2);
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        return TrackerConfig::new(DEFAULT_CHUNK_SIZE_NONZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chunk_size() {
        let config = TrackerConfig::default();
        assert_eq!(config.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert_eq!(config.max_chunk_entries(), 2 * DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(TrackerConfig::with_chunk_size(0), None);
    }

    #[test]
    fn one_is_allowed() {
        let config = TrackerConfig::with_chunk_size(1).unwrap();
        assert_eq!(config.max_chunk_entries(), 2);
    }
}
