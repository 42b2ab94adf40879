use core::{iter::FusedIterator, ops::Range};

use crate::Sequences;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Returns every index the given sequences have in common, from `0` up to the length of the
/// shortest one.
///
/// An empty set of sequences has no indices, so `indices(())` is an empty [`Vec`].
/// This is the eager counterpart of [`iter_indices`].
///
/// # Example
///
/// ```
/// # use indices_core::indices;
/// let numbers = [1, 2, 3];
/// assert_eq!(indices((&numbers, "ab")), vec![0, 1]);
/// assert_eq!(indices(()), Vec::<usize>::new());
/// ```
#[cfg(feature = "alloc")]
pub fn indices<S: Sequences>(sequences: S) -> Vec<usize> {
    iter_indices(sequences).collect()
}

/// Returns a lazy iterator over every index the given sequences have in common.
///
/// The common length is computed once, right here. Sequences that grow or shrink afterwards do not
/// move the upper bound of the returned [`Indices`], and the iterator keeps no reference to them.
///
/// # Example
///
/// ```
/// # use indices_core::iter_indices;
/// let numbers = [1, 2, 3];
/// let mut iter = iter_indices((&numbers, "ab"));
///
/// assert_eq!(iter.next(), Some(0));
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next(), None);
/// ```
pub fn iter_indices<S: Sequences>(sequences: S) -> Indices {
    let end = sequences.common_len().unwrap_or(0);

    #[cfg(feature = "tracing")]
    tracing::trace!(arity = sequences.arity(), end, "created lazy index iterator");

    Indices { range: 0..end }
}

/// A lazy iterator over the indices common to a set of sequences.
///
/// This `struct` is created by [`iter_indices`]. See its documentation for more.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Indices {
    range: Range<usize>,
}

impl Indices {
    /// Returns the exclusive upper bound fixed when this iterator was created.
    #[inline]
    pub fn end(&self) -> usize {
        self.range.end
    }
}

impl Iterator for Indices {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;

        #[cfg(feature = "detailed_trace")]
        tracing::trace!(index, "yielding index");

        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}
