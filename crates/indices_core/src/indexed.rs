use core::iter::FusedIterator;

use crate::{IndicesError, Sequences};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Returns one `(index, a, b, ...)` tuple for every index the given sequences have in common.
///
/// Each tuple holds the index followed by the element each sequence has at that index, in the
/// order the sequences were given. Only the indices of the shortest sequence are covered.
///
/// Unlike [`indices`](fn@crate::indices), passing no sequences at all returns `None` rather than an
/// empty [`Vec`]. This is the eager counterpart of [`iter_indexed`].
///
/// # Panics
///
/// Panics if a sequence does not produce an element for an index below its own reported length.
/// See [`IndexedElements::try_next`].
///
/// # Example
///
/// ```
/// # use indices_core::indexed;
/// let numbers = [1, 2, 3];
///
/// assert_eq!(
///     indexed((&numbers, "ab")),
///     Some(vec![(0, &1, 'a'), (1, &2, 'b')])
/// );
/// assert_eq!(indexed(()), None);
/// ```
#[cfg(feature = "alloc")]
pub fn indexed<S: Sequences>(sequences: S) -> Option<Vec<S::Indexed>> {
    if sequences.arity() == 0 {
        return None;
    }

    let iter = IndexedElements::new(sequences);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        arity = iter.sequences.arity(),
        common_len = iter.end,
        "collecting index+element tuples"
    );

    Some(iter.collect())
}

/// Returns a lazy iterator over one `(index, a, b, ...)` tuple for every index the given sequences
/// have in common.
///
/// The upper bound is the length of the shortest sequence, computed once, right here. No element
/// is read until the iterator reaches it, and every step reads the elements as they are at that
/// moment.
///
/// If no sequences are given the iterator is exhausted from the start, and no length is ever
/// computed: [`IndexedElements::common_len`] reports `None`.
///
/// # Example
///
/// ```
/// # use indices_core::iter_indexed;
/// let numbers = [1, 2, 3];
/// let mut iter = iter_indexed((&numbers, "ab"));
///
/// assert_eq!(iter.next(), Some((0, &1, 'a')));
/// assert_eq!(iter.next(), Some((1, &2, 'b')));
/// assert_eq!(iter.next(), None);
/// ```
pub fn iter_indexed<S: Sequences>(sequences: S) -> IndexedElements<S> {
    let iter = IndexedElements::new(sequences);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        arity = iter.sequences.arity(),
        common_len = ?iter.common_len,
        "created lazy index+element iterator"
    );

    iter
}

/// A lazy iterator over `(index, a, b, ...)` tuples drawn from a set of sequences.
///
/// This `struct` is created by [`iter_indexed`]. See its documentation for more.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IndexedElements<S: Sequences> {
    sequences: S,
    cursor: usize,
    end: usize,
    common_len: Option<usize>,
}

impl<S: Sequences> IndexedElements<S> {
    fn new(sequences: S) -> Self {
        let common_len = if sequences.arity() == 0 {
            None
        } else {
            sequences.common_len()
        };

        Self {
            sequences,
            cursor: 0,
            end: common_len.unwrap_or(0),
            common_len,
        }
    }

    /// Returns the common length fixed when this iterator was created, or `None` if it was
    /// created without any sequences.
    #[inline]
    pub fn common_len(&self) -> Option<usize> {
        self.common_len
    }

    /// Returns the index the next call to [`next`](Iterator::next) will read.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reads the next tuple, reporting sequences that can no longer produce it.
    ///
    /// Returns `Ok(None)` once the cursor reaches the upper bound. A sequence that has shrunk
    /// below the cursor since this iterator was created yields
    /// [`IndicesError::MissingElement`], and the iterator is exhausted from then on.
    ///
    /// # Example
    ///
    /// ```
    /// # use indices_core::iter_indexed;
    /// let mut iter = iter_indexed(("ab",));
    ///
    /// assert_eq!(iter.try_next(), Ok(Some((0, 'a'))));
    /// assert_eq!(iter.try_next(), Ok(Some((1, 'b'))));
    /// assert_eq!(iter.try_next(), Ok(None));
    /// ```
    ///
    /// A sequence that can shrink, such as a [`RefCell<Vec<T>>`](core::cell::RefCell), is shown
    /// failing in the documentation of its [`Sequence`](crate::Sequence) implementation.
    pub fn try_next(&mut self) -> Result<Option<S::Indexed>, IndicesError> {
        if self.cursor >= self.end {
            return Ok(None);
        }

        #[cfg(feature = "detailed_trace")]
        tracing::trace!(index = self.cursor, "reading elements");

        match self.sequences.try_get_indexed(self.cursor) {
            Ok(item) => {
                self.cursor += 1;
                Ok(Some(item))
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%err, end = self.end, "sequence shrank below the common length");

                self.cursor = self.end;
                Err(err)
            }
        }
    }
}

impl<S: Sequences> Iterator for IndexedElements<S> {
    type Item = S::Indexed;

    /// # Panics
    ///
    /// Panics if a sequence does not produce an element for the current index, the same way
    /// indexing a slice out of bounds does. Use [`IndexedElements::try_next`] to handle this.
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<S: Sequences> ExactSizeIterator for IndexedElements<S> {}

impl<S: Sequences> FusedIterator for IndexedElements<S> {}
