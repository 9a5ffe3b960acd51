//! Changes: kind-tagged spans of edit history.
//!
//! A change is one contiguous run of text that is either untouched since the
//! tracker was created, inserted by an edit, or deleted by an edit. Deleted
//! text is never thrown away, so the original string can always be rebuilt.
//!
//! All lengths are counted in `char`s. Each change caches its length so that
//! `len()` is O(1); the cached value is kept in sync by every constructor and
//! mutator in this module.

use std::fmt;

/// What happened to a span of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Present in both the original and the modified string.
    Unchanged,
    /// Present only in the modified string.
    Added,
    /// Present only in the original string.
    Removed,
}

impl ChangeKind {
    #[inline(always)]
    pub fn is_unchanged(self) -> bool {
        return self == ChangeKind::Unchanged;
    }

    #[inline(always)]
    pub fn is_added(self) -> bool {
        return self == ChangeKind::Added;
    }

    #[inline(always)]
    pub fn is_removed(self) -> bool {
        return self == ChangeKind::Removed;
    }

    /// Whether text of this kind is part of the modified string.
    #[inline(always)]
    pub fn counts_in_modified(self) -> bool {
        return match self {
            ChangeKind::Unchanged | ChangeKind::Added => true,
            ChangeKind::Removed => false,
        };
    }

    /// Whether text of this kind is part of the original string.
    #[inline(always)]
    pub fn counts_in_original(self) -> bool {
        return match self {
            ChangeKind::Unchanged | ChangeKind::Removed => true,
            ChangeKind::Added => false,
        };
    }
}

/// One contiguous span of the change log.
#[derive(Clone, PartialEq, Eq)]
pub struct Change {
    kind: ChangeKind,
    text: String,
    /// Length of `text` in chars.
    len: usize,
}

impl Change {
    pub fn new(kind: ChangeKind, text: impl Into<String>) -> Change {
        let text = text.into();
        let len = text.chars().count();
        return Change { kind, text, len };
    }

    pub fn unchanged(text: impl Into<String>) -> Change {
        return Change::new(ChangeKind::Unchanged, text);
    }

    pub fn added(text: impl Into<String>) -> Change {
        return Change::new(ChangeKind::Added, text);
    }

    pub fn removed(text: impl Into<String>) -> Change {
        return Change::new(ChangeKind::Removed, text);
    }

    /// The empty entry a log holds when there is no text at all.
    pub(crate) fn sentinel() -> Change {
        return Change {
            kind: ChangeKind::Unchanged,
            text: String::new(),
            len: 0,
        };
    }

    #[inline(always)]
    pub fn kind(&self) -> ChangeKind {
        return self.kind;
    }

    #[inline(always)]
    pub fn text(&self) -> &str {
        return &self.text;
    }

    /// Length in chars.
    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.len;
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline(always)]
    pub fn is_unchanged(&self) -> bool {
        return self.kind.is_unchanged();
    }

    #[inline(always)]
    pub fn is_added(&self) -> bool {
        return self.kind.is_added();
    }

    #[inline(always)]
    pub fn is_removed(&self) -> bool {
        return self.kind.is_removed();
    }

    /// Chars this change contributes to the modified string.
    #[inline(always)]
    pub fn modified_len(&self) -> usize {
        if self.kind.counts_in_modified() {
            return self.len;
        }
        return 0;
    }

    /// Chars this change contributes to the original string.
    #[inline(always)]
    pub fn original_len(&self) -> usize {
        if self.kind.counts_in_original() {
            return self.len;
        }
        return 0;
    }

    /// Append text to this change. The caller guarantees the kinds match.
    pub(crate) fn push_str(&mut self, text: &str, len: usize) {
        debug_assert_eq!(text.chars().count(), len);
        self.text.push_str(text);
        self.len += len;
    }

    /// The same text under a different kind.
    pub(crate) fn with_kind(self, kind: ChangeKind) -> Change {
        return Change { kind, ..self };
    }

    /// Split this change at the given char offset, returning the right half.
    /// Both halves keep this change's kind.
    pub(crate) fn split(&mut self, offset: usize) -> Change {
        debug_assert!(offset <= self.len);
        let at = byte_offset(&self.text, offset);
        let right = Change {
            kind: self.kind,
            text: self.text.split_off(at),
            len: self.len - offset,
        };
        self.len = offset;
        return right;
    }
}

/// Byte index of the char at `offset`, or the end of the string.
pub(crate) fn byte_offset(text: &str, offset: usize) -> usize {
    return text
        .char_indices()
        .nth(offset)
        .map_or(text.len(), |(i, _)| i);
}

impl fmt::Debug for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{:?}({:?})", self.kind, self.text);
    }
}

/// Compact diff notation: `text`, `{+text}`, `{-text}`.
impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self.kind {
            ChangeKind::Unchanged => f.write_str(&self.text),
            ChangeKind::Added => write!(f, "{{+{}}}", self.text),
            ChangeKind::Removed => write!(f, "{{-{}}}", self.text),
        };
    }
}
