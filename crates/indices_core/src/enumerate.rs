use core::iter::{Fuse, FusedIterator};

/// Pairs every item of `iterable` with its position, starting at `0`.
///
/// Unlike the other operations in this crate this only needs an [`IntoIterator`], not a
/// [`Sequence`](crate::Sequence): items are drawn one at a time and the iterator ends exactly when
/// the input does. Once it has ended it stays ended, even if the input would resume.
///
/// # Example
///
/// ```
/// # use indices_core::enumerate;
/// let mut iter = enumerate(['x', 'y', 'z']);
///
/// assert_eq!(iter.next(), Some((0, 'x')));
/// assert_eq!(iter.next(), Some((1, 'y')));
/// assert_eq!(iter.next(), Some((2, 'z')));
/// assert_eq!(iter.next(), None);
/// ```
pub fn enumerate<I: IntoIterator>(iterable: I) -> Enumerate<I::IntoIter> {
    Enumerate {
        iter: iterable.into_iter().fuse(),
        count: 0,
    }
}

/// An iterator that yields the current count and the element during iteration.
///
/// This `struct` is created by [`enumerate`]. See its documentation for more.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Enumerate<I> {
    iter: Fuse<I>,
    count: usize,
}

impl<I> Enumerate<I> {
    /// Returns the index the next item will be paired with.
    #[inline]
    pub fn count_so_far(&self) -> usize {
        self.count
    }
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = (usize, I::Item);

    /// # Overflow Behavior
    ///
    /// The method does no guarding against overflows, so enumerating more than
    /// [`usize::MAX`] elements either produces the wrong result or panics. If
    /// debug assertions are enabled, a panic is guaranteed.
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.count;
        self.count += 1;

        #[cfg(feature = "detailed_trace")]
        tracing::trace!(index, "enumerated item");

        Some((index, item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn count(self) -> usize {
        self.iter.count()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Enumerate<I> {}

impl<I: Iterator> FusedIterator for Enumerate<I> {}
