//! The drawing document: an ordered, observable collection of shapes.
//!
//! Insertion order is render order and list order. Every mutation marks the
//! document modified and notifies registered [`DocumentListener`]s
//! synchronously before returning.

pub mod io;
pub mod list_view;
pub mod listener;


pub use io::{DRAWING_EXTENSION, DocumentError, LoadReport};
pub use list_view::ShapeListModel;
pub use listener::{DocumentListener, IndexRange};

use crate::draw::{EditPayload, Shape, ShapeName, ShapeNamer, ValidationError};
use crate::observer::{ListenerList, listener_ptr};
use log::debug;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Ordered store of shapes backing one open drawing.
#[derive(Debug, Default)]
pub struct DrawingDocument {
    shapes: Vec<Shape>,
    modified: bool,
    namer: ShapeNamer,
    listeners: ListenerList<dyn DocumentListener>,
}

impl DrawingDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shape at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Index of the shape with the same identity as `shape`.
    pub fn index_of(&self, shape: &Shape) -> Option<usize> {
        self.shapes.iter().position(|candidate| candidate == shape)
    }

    /// Name allocator for shapes created for this document.
    pub fn namer_mut(&mut self) -> &mut ShapeNamer {
        &mut self.namer
    }

    /// Appends `shape` and notifies listeners of its index.
    ///
    /// Shapes named by another [`ShapeNamer`] are accepted. Their names are
    /// reserved in this document's namer, and a shape whose name is already in
    /// the document is given a fresh one. Returns the name it was stored under.
    pub fn add(&mut self, mut shape: Shape) -> ShapeName {
        if self.index_of(&shape).is_some() {
            let fresh = self.namer.next(shape.name().kind());
            debug!("Renaming incoming {} to {}", shape.name(), fresh);
            shape.rename(fresh);
        } else {
            self.namer.reserve(shape.name());
        }
        debug!("Adding {}", shape);
        let name = shape.name();
        self.shapes.push(shape);
        self.modified = true;
        self.fire_added(IndexRange::single(self.shapes.len() - 1));
        name
    }

    /// Removes the first shape equal to `shape`.
    ///
    /// Returns false, without marking the document modified or notifying,
    /// when no such shape exists.
    pub fn remove(&mut self, shape: &Shape) -> bool {
        let Some(index) = self.index_of(shape) else {
            return false;
        };
        let removed = self.shapes.remove(index);
        debug!("Removed {} from index {}", removed, index);
        self.modified = true;
        self.fire_removed(IndexRange::single(index));
        true
    }

    /// Applies `payload` to the shape with the same identity as `shape`.
    ///
    /// Returns `Ok(false)` when the shape is not in the document. A rejected
    /// edit leaves the document untouched and fires nothing.
    pub fn change(&mut self, shape: &Shape, payload: &EditPayload) -> Result<bool, ValidationError> {
        let Some(index) = self.index_of(shape) else {
            return Ok(false);
        };
        self.shapes[index].apply_edit(payload)?;
        debug!("Edited {} at index {}", self.shapes[index], index);
        self.modified = true;
        self.fire_changed(IndexRange::single(index));
        Ok(true)
    }

    /// Removes every shape with a single notification spanning the prior range.
    ///
    /// Clearing an empty document still notifies, with an empty range.
    pub fn clear(&mut self) {
        let range = if self.shapes.is_empty() {
            IndexRange::empty_at(0)
        } else {
            IndexRange::inclusive(0, self.shapes.len() - 1)
        };
        self.shapes.clear();
        self.modified = true;
        self.fire_removed(range);
    }

    /// Replaces the contents with `shapes`, in order.
    ///
    /// Fires the clear notification followed by one added notification for
    /// the whole new range (skipped when `shapes` is empty). The document is
    /// left modified; loaders reading from storage reset the flag themselves.
    ///
    /// Names are reserved as in [`add`](Self::add); repeats within `shapes`
    /// are renamed so every stored name stays unique.
    pub fn load_all(&mut self, mut shapes: Vec<Shape>) {
        self.clear();
        if shapes.is_empty() {
            return;
        }
        for shape in &shapes {
            self.namer.reserve(shape.name());
        }
        let mut seen = HashSet::with_capacity(shapes.len());
        for shape in &mut shapes {
            if !seen.insert(shape.name()) {
                let fresh = self.namer.next(shape.name().kind());
                debug!("Renaming repeated {} to {}", shape.name(), fresh);
                shape.rename(fresh);
                seen.insert(fresh);
            }
        }
        let count = shapes.len();
        self.shapes = shapes;
        self.modified = true;
        self.fire_added(IndexRange::with_len(0, count));
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    /// Registers `listener` without taking ownership of it.
    pub fn add_listener<T: DocumentListener + 'static>(&mut self, listener: &Rc<RefCell<T>>) {
        let listener: Rc<RefCell<dyn DocumentListener>> = listener.clone();
        self.listeners.add(Rc::downgrade(&listener));
    }

    /// Removes one registration of `listener`. Returns whether one was found.
    pub fn remove_listener<T: DocumentListener + ?Sized>(&mut self, listener: &Rc<RefCell<T>>) -> bool {
        self.listeners.remove_ptr(listener_ptr(listener))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn fire_added(&self, range: IndexRange) {
        self.listeners.notify(|l| l.shapes_added(self, range));
    }

    fn fire_removed(&self, range: IndexRange) {
        self.listeners.notify(|l| l.shapes_removed(self, range));
    }

    fn fire_changed(&self, range: IndexRange) {
        self.listeners.notify(|l| l.shapes_changed(self, range));
    }
}
