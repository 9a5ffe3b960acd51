//! Splicing an edit into a run of changes.
//!
//! An edit replaces the modified-string span `[start, end)` with new text.
//! Applied to a run of changes it works in three steps:
//!
//! 1. Partition the run into the part before the edit, the part the edit
//!    covers, and the part after it, splitting changes that straddle a
//!    boundary.
//! 2. Rewrite the covered part: unchanged text becomes removed, added text
//!    is dropped, removed text stays removed. Removed entries sitting exactly
//!    on either boundary join the covered part. The replacement goes in front
//!    as added text.
//! 3. Normalize, which merges neighbours and restores add-before-remove.
//!
//! Offsets are local to the run and counted in chars of the modified string.

use smallvec::SmallVec;

use crate::change::{Change, ChangeKind};
use crate::change_log::normalize;

/// Apply an edit to `changes`, returning the canonical result.
///
/// The caller guarantees `start <= end <= modified length of changes`.
pub(crate) fn splice(changes: Vec<Change>, start: usize, end: usize, replacement: &str) -> Vec<Change> {
    debug_assert!(start <= end);

    let mut before: Vec<Change> = Vec::with_capacity(changes.len() + 2);
    let mut after: Vec<Change> = Vec::new();
    let mut removed: Option<Change> = None;
    let mut pos = 0usize;

    for mut change in changes {
        match change.kind() {
            ChangeKind::Removed => {
                if pos < start {
                    before.push(change);
                } else if pos <= end {
                    absorb(&mut removed, change);
                } else {
                    after.push(change);
                }
            }
            ChangeKind::Unchanged | ChangeKind::Added => {
                let change_end = pos + change.len();
                if change_end <= start {
                    before.push(change);
                } else if pos >= end {
                    after.push(change);
                } else {
                    let tail = change.split(change_end.min(end) - pos);
                    let covered = change.split(start.max(pos) - pos);
                    before.push(change);
                    if covered.is_unchanged() {
                        absorb(&mut removed, covered.with_kind(ChangeKind::Removed));
                    }
                    after.push(tail);
                }
                pos = change_end;
            }
        }
    }
    debug_assert!(end <= pos, "edit end {} past run length {}", end, pos);

    let mut middle: SmallVec<[Change; 2]> = SmallVec::new();
    if !replacement.is_empty() {
        middle.push(Change::added(replacement));
    }
    if let Some(removed) = removed {
        middle.push(removed);
    }

    return normalize(before.into_iter().chain(middle).chain(after));
}

fn absorb(slot: &mut Option<Change>, change: Change) {
    if let Some(existing) = slot.as_mut() {
        existing.push_str(change.text(), change.len());
        return;
    }
    *slot = Some(change);
}
