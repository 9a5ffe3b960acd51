//! Canonical form for runs of changes.
//!
//! A change log is canonical when:
//!
//! 1. No entry is empty (except a lone sentinel, see `Change::sentinel`).
//! 2. No two adjacent entries share a kind.
//! 3. A `Removed` entry is never immediately followed by an `Added` entry.
//!
//! Between two `Unchanged` entries there can therefore be at most one `Added`
//! followed by at most one `Removed`. Moving added text before removed text
//! inside such a run does not change either reconstruction, since each one
//! ignores the other kind entirely, so `normalize` is free to regroup.

use crate::change::{Change, ChangeKind};

/// Accumulates one run of edited text between two unchanged spans.
struct PendingRun {
    added: Option<Change>,
    removed: Option<Change>,
}

impl PendingRun {
    fn new() -> PendingRun {
        return PendingRun {
            added: None,
            removed: None,
        };
    }

    fn absorb(slot: &mut Option<Change>, change: Change) {
        if let Some(existing) = slot.as_mut() {
            existing.push_str(change.text(), change.len());
            return;
        }
        *slot = Some(change);
    }

    fn push(&mut self, change: Change) {
        match change.kind() {
            ChangeKind::Added => PendingRun::absorb(&mut self.added, change),
            ChangeKind::Removed => PendingRun::absorb(&mut self.removed, change),
            ChangeKind::Unchanged => unreachable!("unchanged text never joins an edited run"),
        }
    }

    fn flush(&mut self, out: &mut Vec<Change>) {
        if let Some(added) = self.added.take() {
            out.push(added);
        }
        if let Some(removed) = self.removed.take() {
            out.push(removed);
        }
    }
}

/// Rewrite a sequence of changes into canonical form.
///
/// Empty entries are dropped, so the result is empty when the input holds no
/// text at all. Callers that need a non-empty log substitute the sentinel.
pub fn normalize(changes: impl IntoIterator<Item = Change>) -> Vec<Change> {
    let mut out: Vec<Change> = Vec::new();
    let mut run = PendingRun::new();

    for change in changes {
        if change.is_empty() {
            continue;
        }
        match change.kind() {
            ChangeKind::Unchanged => {
                run.flush(&mut out);
                if let Some(last) = out.last_mut() {
                    if last.is_unchanged() {
                        last.push_str(change.text(), change.len());
                        continue;
                    }
                }
                out.push(change);
            }
            ChangeKind::Added | ChangeKind::Removed => run.push(change),
        }
    }
    run.flush(&mut out);

    return out;
}

/// Describe the first canonical-form violation in `changes`, if any.
/// `allow_sentinel` permits a single empty entry at index 0.
pub fn find_violation(changes: &[Change], allow_sentinel: bool) -> Option<String> {
    for (i, change) in changes.iter().enumerate() {
        if change.is_empty() && !(allow_sentinel && i == 0 && changes.len() == 1) {
            return Some(format!("empty entry at index {}", i));
        }
        if i == 0 {
            continue;
        }
        let prev = &changes[i - 1];
        if prev.kind() == change.kind() {
            return Some(format!(
                "adjacent {:?} entries at indices {} and {}",
                change.kind(),
                i - 1,
                i
            ));
        }
        if prev.is_removed() && change.is_added() {
            return Some(format!("Removed before Added at indices {} and {}", i - 1, i));
        }
    }
    return None;
}

/// Concatenate the text visible in the modified string.
pub fn modified_text<'a>(changes: impl IntoIterator<Item = &'a Change>, capacity: usize) -> String {
    let mut out = String::with_capacity(capacity);
    for change in changes {
        if change.kind().counts_in_modified() {
            out.push_str(change.text());
        }
    }
    return out;
}

/// Concatenate the text visible in the original string.
pub fn original_text<'a>(changes: impl IntoIterator<Item = &'a Change>, capacity: usize) -> String {
    let mut out = String::with_capacity(capacity);
    for change in changes {
        if change.kind().counts_in_original() {
            out.push_str(change.text());
        }
    }
    return out;
}
