use thiserror::Error;

/// An error raised while reading elements for a lazy index+element iterator.
///
/// The upper bound of an [`IndexedElements`](crate::IndexedElements) iterator is fixed when it is
/// created, but its elements are read on demand. A sequence that shrinks in between (for example a
/// [`RefCell<Vec<T>>`](core::cell::RefCell) truncated mid-iteration) can no longer produce the element
/// the cursor points at.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IndicesError {
    /// A sequence had no element at an index inside the common range.
    #[error(
        "sequence {sequence} has no element at index {index}, its length is now {len}"
    )]
    MissingElement {
        /// Position of the failing sequence within the sequence set.
        sequence: usize,
        /// The index that was requested.
        index: usize,
        /// The length the sequence reported when the read failed.
        len: usize,
    },
}
