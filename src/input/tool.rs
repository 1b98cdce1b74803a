//! Drawing tool selection.

use crate::draw::ShapeKind;

/// Exclusive choice of the shape kind created by the next gesture.
///
/// At most one kind is selected at any time, like a toolbar radio group.
/// With nothing selected, pointer presses on the canvas are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolSelection {
    current: Option<ShapeKind>,
}

impl ToolSelection {
    pub fn new(initial: Option<ShapeKind>) -> Self {
        Self { current: initial }
    }

    /// Currently selected kind, if any.
    pub fn current(&self) -> Option<ShapeKind> {
        self.current
    }

    /// Selects `kind`, replacing any previous choice.
    pub fn select(&mut self, kind: ShapeKind) {
        self.current = Some(kind);
    }

    pub fn deselect(&mut self) {
        self.current = None;
    }

    pub fn is_selected(&self, kind: ShapeKind) -> bool {
        self.current == Some(kind)
    }
}
