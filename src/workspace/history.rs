//! Per-buffer selection history.

use log::debug;

use crate::domain::Range;

/// Stack of selections that were the input of a successful grow.
///
/// The history also remembers the last selection the engine wrote to the
/// buffer. Any observed selection that differs from it is a change made by
/// the user (cursor motion, typing, clicking), and wipes the stack so that a
/// shrink can never jump back across an unrelated edit.
#[derive(Debug, Default)]
pub struct SelectionHistory {
    stack: Vec<Vec<Range>>,
    last_written: Option<Vec<Range>>,
}

impl SelectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Selection most recently written by the engine, if still current.
    pub fn last_written(&self) -> Option<&[Range]> {
        self.last_written.as_deref()
    }

    /// Remember `prior` as the input of a grow.
    ///
    /// Consecutive identical entries are coalesced.
    pub fn record_grow(&mut self, prior: Vec<Range>) {
        if self.stack.last() != Some(&prior) {
            self.stack.push(prior);
        }
    }

    /// Take the most recent entry.
    pub fn pop(&mut self) -> Option<Vec<Range>> {
        self.stack.pop()
    }

    /// Note that the engine is about to write `selection` to the buffer.
    pub fn mark_written(&mut self, selection: Vec<Range>) {
        self.last_written = Some(selection);
    }

    /// Handle a selection-changed notification from the host.
    ///
    /// Returns `true` when the change was the engine's own write. Otherwise
    /// the history is cleared and `false` is returned.
    pub fn observe(&mut self, observed: &[Range]) -> bool {
        if self.last_written.as_deref() == Some(observed) {
            return true;
        }
        if !self.stack.is_empty() {
            debug!(
                target: "syntax_select::history",
                "Selection changed externally, dropping {} history entries",
                self.stack.len()
            );
        }
        self.clear();
        false
    }

    /// Drop all entries and forget the last write.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.last_written = None;
    }
}
