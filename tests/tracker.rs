//! Scenario tests for the tracker API.

use string_tracker::{Change, ChangeKind, OutOfRangeError, StringTracker, TrackerConfig};

// =============================================================================
// Helper functions
// =============================================================================

/// Assert every structural property of the change log and its chunks.
fn assert_well_formed(tracker: &StringTracker) {
    let changes: Vec<&Change> = tracker.changes().collect();
    assert!(!changes.is_empty(), "log is never empty");

    let modified: String = changes
        .iter()
        .filter(|c| c.kind() != ChangeKind::Removed)
        .map(|c| c.text())
        .collect();
    let original: String = changes
        .iter()
        .filter(|c| c.kind() != ChangeKind::Added)
        .map(|c| c.text())
        .collect();
    assert_eq!(modified, tracker.current());
    assert_eq!(original, tracker.original());

    for (i, change) in changes.iter().enumerate() {
        if change.is_empty() {
            assert_eq!(changes.len(), 1, "only a lone first entry may be empty");
        }
        if i > 0 {
            let prev = changes[i - 1];
            assert_ne!(prev.kind(), change.kind(), "adjacent same-kind entries at {}", i);
            assert!(
                !(prev.is_removed() && change.is_added()),
                "Removed precedes Added at {}",
                i
            );
        }
    }

    let max = tracker.config().max_chunk_entries();
    for chunk in tracker.change_chunks() {
        assert!(chunk.len() <= max, "chunk of {} entries exceeds {}", chunk.len(), max);
        let modified: usize = chunk.entries().iter().filter(|c| !c.is_removed()).map(|c| c.len()).sum();
        let original: usize = chunk.entries().iter().filter(|c| !c.is_added()).map(|c| c.len()).sum();
        assert_eq!(chunk.modified_len(), modified);
        assert_eq!(chunk.original_len(), original);
    }
}

fn tiny(text: &str) -> StringTracker {
    return StringTracker::with_config(text, TrackerConfig::with_chunk_size(2).unwrap());
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn append_world() {
    let mut tracker = StringTracker::new("hello");
    tracker.edit(5, 5, " world").unwrap();

    assert_eq!(tracker.current(), "hello world");
    assert_eq!(tracker.original(), "hello");
    assert_well_formed(&tracker);
}

#[test]
fn replace_hello_with_goodbye() {
    let mut tracker = StringTracker::new("hello");
    tracker.edit(5, 5, " world").unwrap();
    tracker.edit(0, 5, "goodbye").unwrap();

    assert_eq!(tracker.current(), "goodbye world");
    assert_eq!(tracker.original(), "hello");
    assert_well_formed(&tracker);
}

#[test]
fn delete_middle_maps_boundary_forward() {
    let mut tracker = StringTracker::new("abcdef");
    tracker.edit(1, 4, "").unwrap();

    assert_eq!(tracker.current(), "aef");
    assert_eq!(tracker.modified_to_original(1), 4);
    assert_eq!(tracker.modified_to_original(0), 0);
    assert_eq!(tracker.modified_to_original(2), 5);
    assert_eq!(tracker.modified_to_original(3), 6);
    assert_well_formed(&tracker);
}

#[test]
fn out_of_range_edit_fails_cleanly() {
    let mut tracker = StringTracker::new("hello");
    let err = tracker.edit(10, 20, "x").unwrap_err();

    assert_eq!(err, OutOfRangeError { start: 10, end: 20, len: 5 });
    assert_eq!(tracker.current(), "hello");
    assert_eq!(tracker.original(), "hello");
    assert!(tracker.is_pristine());
}

#[test]
fn reversed_range_fails() {
    let mut tracker = StringTracker::new("hello");
    assert!(tracker.edit(3, 1, "").is_err());
    assert!(tracker.edit(5, 6, "").is_err());
    assert!(tracker.insert(6, "x").is_err());
    assert_eq!(tracker.current(), "hello");
}

#[test]
fn round_trip_restores_original() {
    let mut tracker = StringTracker::new("the quick brown fox");
    tracker.edit(4, 9, "slow").unwrap();
    tracker.insert(0, ">> ").unwrap();

    let len = tracker.len();
    tracker.edit(0, len, "").unwrap();
    assert_eq!(tracker.current(), "");
    assert_well_formed(&tracker);

    let original = tracker.original().to_string();
    tracker.edit(0, 0, &original).unwrap();
    assert_eq!(tracker.current(), tracker.original());
    assert_well_formed(&tracker);
}

#[test]
fn noop_edit_changes_nothing() {
    let mut tracker = tiny("abcdefgh");
    tracker.edit(2, 4, "XY").unwrap();
    tracker.delete(6, 7).unwrap();
    tracker.insert(0, "_").unwrap();

    let log: Vec<Change> = tracker.changes().cloned().collect();
    let chunks = tracker.change_chunks().len();
    for pos in 0..=tracker.len() {
        tracker.edit(pos, pos, "").unwrap();
        let after: Vec<Change> = tracker.changes().cloned().collect();
        assert_eq!(after, log, "no-op edit at {} changed the log", pos);
    }
    assert!(tracker.change_chunks().len() <= chunks);
    assert_well_formed(&tracker);
}

#[test]
fn empty_original() {
    let mut tracker = StringTracker::new("");
    assert_well_formed(&tracker);

    tracker.insert(0, "abc").unwrap();
    assert_eq!(tracker.current(), "abc");
    assert_eq!(tracker.original(), "");
    assert_eq!(tracker.modified_to_original(2), 0);
    assert_eq!(tracker.original_to_modified(0), 3);
    assert_well_formed(&tracker);
}

#[test]
fn unicode_offsets_are_chars() {
    let mut tracker = StringTracker::new("naïve café");
    tracker.edit(6, 10, "résumé").unwrap();

    assert_eq!(tracker.current(), "naïve résumé");
    assert_eq!(tracker.len(), 12);
    assert_eq!(tracker.original_len(), 10);
    assert_well_formed(&tracker);
}

#[test]
fn typing_and_backspacing() {
    let mut tracker = tiny("");
    let text = "the spoken word lines up with the page";
    for (i, ch) in text.chars().enumerate() {
        tracker.insert(i, &ch.to_string()).unwrap();
    }
    assert_eq!(tracker.current(), text);
    assert_eq!(tracker.changes().count(), 1);

    for _ in 0..5 {
        let len = tracker.len();
        tracker.delete(len - 1, len).unwrap();
    }
    assert_eq!(tracker.current(), "the spoken word lines up with the");
    assert_well_formed(&tracker);
}

#[test]
fn many_scattered_edits_stay_bounded() {
    let original: String = (0..200).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    let mut tracker = tiny(&original);

    for i in 0..60 {
        let pos = (i * 7) % tracker.len();
        let end = (pos + 1).min(tracker.len());
        tracker.edit(pos, end, "#").unwrap();
        assert_well_formed(&tracker);
    }

    assert_eq!(tracker.original(), original);
    assert!(tracker.change_chunks().len() > 1);
}

// =============================================================================
// Translation
// =============================================================================

#[test]
fn translation_inside_insertion_clamps_back() {
    let mut tracker = StringTracker::new("hello world");
    tracker.insert(6, "big ").unwrap();
    assert_eq!(tracker.current(), "hello big world");

    for pos in 6..10 {
        assert_eq!(tracker.modified_to_original(pos), 6);
    }
    assert_eq!(tracker.modified_to_original(10), 6);
    assert_eq!(tracker.modified_to_original(11), 7);
}

#[test]
fn translation_inside_deletion_clamps_back() {
    let mut tracker = StringTracker::new("hello big world");
    tracker.delete(6, 10).unwrap();
    assert_eq!(tracker.current(), "hello world");

    for pos in 6..10 {
        assert_eq!(tracker.original_to_modified(pos), 6);
    }
    assert_eq!(tracker.original_to_modified(10), 6);
    assert_eq!(tracker.original_to_modified(11), 7);
}

#[test]
fn word_spans_follow_edits() {
    // word spans over the original text, as an aligner would produce them
    let original = "one two three";
    let words = [0..3, 4..7, 8..13];

    let mut tracker = tiny(original);
    tracker.insert(0, "and ").unwrap();
    tracker.edit(8, 11, "2").unwrap();

    assert_eq!(tracker.current(), "and one 2 three");
    let mapped: Vec<_> = words
        .iter()
        .map(|w| tracker.original_range_to_modified(w.clone()))
        .collect();
    assert_eq!(mapped, vec![4..7, 9..9, 10..15]);
    assert_eq!(&tracker.current()[10..15], "three");
}

#[test]
fn translation_past_end_clamps() {
    let mut tracker = StringTracker::new("abc");
    tracker.insert(3, "de").unwrap();
    assert_eq!(tracker.modified_to_original(5), 3);
    assert_eq!(tracker.modified_to_original(50), 3);
    assert_eq!(tracker.original_to_modified(3), 5);
    assert_eq!(tracker.original_to_modified(50), 5);
}
