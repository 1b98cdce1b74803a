use crate::document::DrawingDocument;
use crate::draw::{EditPayload, Shape, ValidationError};
use crate::input::events::Key;
use log::debug;

use super::InteractionController;

impl InteractionController {
    /// Processes a key press on the canvas. Escape cancels the current gesture.
    pub fn on_key_press(&mut self, key: Key) {
        if key == Key::Escape {
            self.cancel();
        }
    }
}

/// Selection state of the shape list beside the canvas.
///
/// Editing and deletion act on the selected entry without any gesture state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSelection {
    selected: Option<usize>,
}

impl ListSelection {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    /// Handles a raw key press on the list.
    ///
    /// Delete removes the selected shape immediately and clears the selection.
    /// Returns the removed shape.
    pub fn on_key_press(&mut self, key: Key, document: &mut DrawingDocument) -> Option<Shape> {
        if key != Key::Delete {
            return None;
        }
        let shape = document.get(self.selected?)?.clone();
        if document.remove(&shape) {
            debug!("Deleted {} from the list", shape);
            self.selected = None;
            Some(shape)
        } else {
            None
        }
    }

    /// Double activation of the selected entry: opens an edit of its fields.
    pub fn activate(&self, document: &DrawingDocument) -> Option<PendingEdit> {
        let shape = document.get(self.selected?)?;
        Some(PendingEdit {
            target: shape.clone(),
            payload: shape.describe_editable_fields(),
        })
    }
}

/// An edit dialog's state: the shape being edited and the fields shown.
///
/// Dropping it is a cancellation.
#[derive(Debug, Clone)]
pub struct PendingEdit {
    target: Shape,
    /// Field values, changed by the dialog before confirmation
    pub payload: EditPayload,
}

impl PendingEdit {
    pub fn target(&self) -> &Shape {
        &self.target
    }

    /// Sets one field by name, see [`EditPayload::set`].
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), ValidationError> {
        self.payload.set(field, value)
    }

    /// Applies the payload to the document.
    ///
    /// On a validation error nothing changes and the edit stays open, so the
    /// caller can report the error and let the user correct the fields.
    pub fn confirm(&self, document: &mut DrawingDocument) -> Result<bool, ValidationError> {
        document.change(&self.target, &self.payload)
    }
}
