//! Registration list for observers that the subject does not own.
//!
//! Subjects (the drawing document, color areas) keep weak references so a
//! dropped view silently stops receiving notifications. Delivery is synchronous
//! and follows registration order.

use log::warn;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Ordered list of weakly held listeners of type `L`.
pub struct ListenerList<L: ?Sized> {
    entries: Vec<Weak<RefCell<L>>>,
}

impl<L: ?Sized> Default for ListenerList<L> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<L: ?Sized> fmt::Debug for ListenerList<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerList")
            .field("listeners", &format!("<{} listeners>", self.len()))
            .finish()
    }
}

/// Address of a listener allocation, used to match registrations.
pub fn listener_ptr<T: ?Sized>(listener: &Rc<RefCell<T>>) -> *const () {
    Rc::as_ptr(listener) as *const ()
}

impl<L: ?Sized> ListenerList<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a registration. Registering the same listener twice means it is
    /// notified twice until removed twice.
    pub fn add(&mut self, listener: Weak<RefCell<L>>) {
        self.prune();
        self.entries.push(listener);
    }

    /// Removes the first registration whose allocation is `ptr`.
    ///
    /// Returns whether a registration was removed; at most one is removed per call.
    pub fn remove_ptr(&mut self, ptr: *const ()) -> bool {
        let position = self
            .entries
            .iter()
            .position(|entry| Weak::as_ptr(entry) as *const () == ptr);
        let removed = match position {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        };
        self.prune();
        removed
    }

    /// Number of registrations whose listener is still alive.
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `f` on every live listener in registration order.
    ///
    /// A listener that is already borrowed (it is the one currently being
    /// notified further up the stack) is skipped with a warning instead of
    /// panicking.
    pub fn notify(&self, mut f: impl FnMut(&mut L)) {
        for entry in &self.entries {
            let Some(listener) = entry.upgrade() else {
                continue;
            };
            match listener.try_borrow_mut() {
                Ok(mut listener) => f(&mut listener),
                Err(_) => warn!("Skipping re-entrant notification of a busy listener"),
            }
        }
    }

    fn prune(&mut self) {
        self.entries.retain(|entry| entry.strong_count() > 0);
    }
}
