//! Notification contract between the drawing document and its views.

use super::DrawingDocument;
use std::fmt;
use std::ops::Range;

/// Contiguous run of document indices carried by a notification.
///
/// Non-empty ranges are reported with inclusive ends via [`IndexRange::first`]
/// and [`IndexRange::last`]; a single-index change has `first == last`. The only
/// empty range is the one fired when an already empty document is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    first: usize,
    len: usize,
}

impl IndexRange {
    /// Range covering exactly `index`.
    pub const fn single(index: usize) -> Self {
        Self {
            first: index,
            len: 1,
        }
    }

    /// Inclusive range `first..=last`. `last` must not be below `first`.
    pub fn inclusive(first: usize, last: usize) -> Self {
        debug_assert!(last >= first);
        Self {
            first,
            len: last - first + 1,
        }
    }

    /// Degenerate range starting at `index` that covers nothing.
    pub const fn empty_at(index: usize) -> Self {
        Self {
            first: index,
            len: 0,
        }
    }

    /// Range covering `len` indices from `first`.
    pub const fn with_len(first: usize, len: usize) -> Self {
        Self { first, len }
    }

    pub fn first(&self) -> usize {
        self.first
    }

    /// Inclusive last index, or `None` for an empty range.
    pub fn last(&self) -> Option<usize> {
        (self.len > 0).then(|| self.first + self.len - 1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Half-open equivalent, convenient for slicing.
    pub fn as_range(&self) -> Range<usize> {
        self.first..self.first + self.len
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last() {
            Some(last) => write!(f, "[{}, {}]", self.first, last),
            None => write!(f, "[{}, empty]", self.first),
        }
    }
}

/// A view that mirrors the document.
///
/// Callbacks run synchronously after the mutation they describe, in
/// registration order. The document is passed read-only: a listener that needs
/// to mutate it in response must schedule that work for after the current call
/// returns.
pub trait DocumentListener {
    /// Shapes were inserted at `range`; they are already present in `document`.
    fn shapes_added(&mut self, document: &DrawingDocument, range: IndexRange);

    /// Shapes that occupied `range` are gone from `document`.
    fn shapes_removed(&mut self, document: &DrawingDocument, range: IndexRange);

    /// Shapes at `range` were edited in place.
    fn shapes_changed(&mut self, document: &DrawingDocument, range: IndexRange);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_ranges_report_both_ends() {
        let range = IndexRange::inclusive(2, 4);
        assert_eq!(range.first(), 2);
        assert_eq!(range.last(), Some(4));
        assert_eq!(range.len(), 3);
        assert_eq!(range.as_range(), 2..5);
        assert_eq!(IndexRange::single(3), IndexRange::inclusive(3, 3));
    }

    #[test]
    fn empty_range_has_no_last_index() {
        let range = IndexRange::empty_at(0);
        assert!(range.is_empty());
        assert_eq!(range.last(), None);
        assert_eq!(range.to_string(), "[0, empty]");
    }
}
