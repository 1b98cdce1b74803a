//! List-view model: the shape names shown beside the canvas.

use super::{DocumentListener, DrawingDocument, IndexRange};
use crate::draw::ShapeName;

/// Mirrors the document's shape names, applying index ranges exactly as
/// notified.
#[derive(Debug, Default)]
pub struct ShapeListModel {
    entries: Vec<ShapeName>,
    revision: u64,
}

impl ShapeListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Model already populated from `document`.
    pub fn from_document(document: &DrawingDocument) -> Self {
        Self {
            entries: document.shapes().iter().map(|shape| shape.name()).collect(),
            revision: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ShapeName> {
        self.entries.get(index).copied()
    }

    /// Display labels in list order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Bumped on every notification; views compare it to decide on a refresh.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn refresh(&mut self, document: &DrawingDocument, range: IndexRange) {
        for index in range.as_range() {
            if let (Some(entry), Some(shape)) = (self.entries.get_mut(index), document.get(index)) {
                *entry = shape.name();
            }
        }
    }
}

impl DocumentListener for ShapeListModel {
    fn shapes_added(&mut self, document: &DrawingDocument, range: IndexRange) {
        let names = range
            .as_range()
            .filter_map(|index| document.get(index).map(|shape| shape.name()));
        let at = range.first().min(self.entries.len());
        self.entries.splice(at..at, names);
        self.revision += 1;
    }

    fn shapes_removed(&mut self, _document: &DrawingDocument, range: IndexRange) {
        let span = range.as_range();
        let end = span.end.min(self.entries.len());
        let start = span.start.min(end);
        self.entries.drain(start..end);
        self.revision += 1;
    }

    fn shapes_changed(&mut self, document: &DrawingDocument, range: IndexRange) {
        self.refresh(document, range);
        self.revision += 1;
    }
}
