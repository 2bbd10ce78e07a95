use serde::{Deserialize, Serialize};

/// Half-open byte interval `[start, end)` over a text buffer.
///
/// Offsets are UTF-8 byte offsets. A range is only meaningful for a given
/// text when both bounds fall on character boundaries, see [`Range::is_valid_in`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty range, i.e. a bare cursor.
    pub const fn cursor(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check whether `other` lies entirely inside this range (bounds inclusive).
    pub const fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Check `0 <= start <= end <= text.len()` with both bounds on char boundaries.
    pub fn is_valid_in(&self, text: &str) -> bool {
        self.start <= self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end)
    }

    /// Borrow the text covered by this range, if it is valid for `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        if self.is_valid_in(text) {
            text.get(self.start..self.end)
        } else {
            None
        }
    }
}
