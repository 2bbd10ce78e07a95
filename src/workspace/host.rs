//! Host editor surface consumed by the selection commands.

use crate::domain::Range;

/// What the selection commands need from the hosting editor.
///
/// Offsets are byte offsets into [`EditorHost::text`]; hosts that count in
/// other units convert at this boundary (see [`crate::text::OffsetMapper`]).
pub trait EditorHost {
    /// Text of the active document, `None` when no document is active.
    fn text(&self) -> Option<&str>;

    /// Language identifier of the active document.
    fn language_id(&self) -> Option<&str>;

    /// Current selections, empty when there is nothing selected.
    fn selections(&self) -> Vec<Range>;

    /// Replace the current selections.
    fn set_selections(&mut self, selections: Vec<Range>);

    /// Run the host's own "expand selection" command.
    fn native_grow(&mut self);

    /// Run the host's own "shrink selection" command.
    fn native_shrink(&mut self);
}

/// In-memory host holding a single document.
///
/// Native commands are counted rather than executed.
#[derive(Debug, Default, Clone)]
pub struct MemoryHost {
    document: Option<(String, String)>,
    selections: Vec<Range>,
    native_grows: usize,
    native_shrinks: usize,
}

impl MemoryHost {
    pub fn new(text: impl Into<String>, language_id: impl Into<String>) -> Self {
        Self {
            document: Some((text.into(), language_id.into())),
            ..Default::default()
        }
    }

    /// Host with no active document.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn with_selections(mut self, selections: Vec<Range>) -> Self {
        self.selections = selections;
        self
    }

    pub fn native_grows(&self) -> usize {
        self.native_grows
    }

    pub fn native_shrinks(&self) -> usize {
        self.native_shrinks
    }
}

impl EditorHost for MemoryHost {
    fn text(&self) -> Option<&str> {
        self.document.as_ref().map(|(text, _)| text.as_str())
    }

    fn language_id(&self) -> Option<&str> {
        self.document.as_ref().map(|(_, id)| id.as_str())
    }

    fn selections(&self) -> Vec<Range> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: Vec<Range>) {
        self.selections = selections;
    }

    fn native_grow(&mut self) {
        self.native_grows += 1;
    }

    fn native_shrink(&mut self) {
        self.native_shrinks += 1;
    }
}
