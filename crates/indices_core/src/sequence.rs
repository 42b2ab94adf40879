#[cfg(feature = "alloc")]
use alloc::{collections::VecDeque, vec::Vec};
#[cfg(feature = "alloc")]
use core::cell::RefCell;

/// An ordered, finite, indexable and length-queryable handle to a sequence of elements.
///
/// Implementors are usually references: the iterators in this crate store the handles they are
/// given, so a lazy iterator reads from the original sequence rather than from a copy.
///
/// # Example
///
/// ```
/// use indices_core::Sequence;
///
/// let letters = "abc";
/// assert_eq!(Sequence::len(&letters), 3);
/// assert_eq!(Sequence::get(&letters, 1), Some('b'));
/// assert_eq!(Sequence::get(&letters, 3), None);
/// ```
pub trait Sequence {
    /// The element produced for each index.
    type Item;

    /// Returns the current number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence currently has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` if `index` is out of bounds.
    fn get(&self, index: usize) -> Option<Self::Item>;
}

impl<'a, T> Sequence for &'a [T] {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        <[T]>::get(*self, index)
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        <[T]>::get(*self, index)
    }
}

/// Strings are sequences of [`char`]s.
///
/// Both the length and the element lookup walk the string from the start, so they are linear in
/// the length of the string rather than constant.
impl Sequence for &str {
    type Item = char;

    #[inline]
    fn len(&self) -> usize {
        self.chars().count()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        self.chars().nth(index)
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> Sequence for &'a Vec<T> {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        <[T]>::get(*self, index)
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> Sequence for &'a VecDeque<T> {
    type Item = &'a T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        VecDeque::get(*self, index)
    }
}

/// A vector behind a [`RefCell`] is read at the moment each element is requested.
///
/// Elements are cloned out so that no borrow outlives a single call. Mutations made between two
/// steps of a lazy iterator are therefore visible to the next step. The usual [`RefCell`] rules
/// apply: reading while the vector is mutably borrowed panics.
///
/// ```
/// # use core::cell::RefCell;
/// # use indices_core::{iter_indexed, IndicesError};
/// let cell = RefCell::new(vec!['a', 'b']);
/// let mut iter = iter_indexed((&cell,));
///
/// assert_eq!(iter.try_next(), Ok(Some((0, 'a'))));
/// cell.borrow_mut().clear();
/// assert_eq!(
///     iter.try_next(),
///     Err(IndicesError::MissingElement { sequence: 0, index: 1, len: 0 })
/// );
/// assert_eq!(iter.try_next(), Ok(None));
/// ```
#[cfg(feature = "alloc")]
impl<T: Clone> Sequence for &RefCell<Vec<T>> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.borrow().len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        self.borrow().get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_and_arrays() {
        let array = [10, 20, 30];
        let slice = &array[..2];

        assert_eq!(Sequence::len(&&array), 3);
        assert_eq!(Sequence::get(&&array, 2), Some(&30));
        assert_eq!(Sequence::get(&&array, 3), None);

        assert_eq!(Sequence::len(&slice), 2);
        assert!(!Sequence::is_empty(&slice));
        assert_eq!(Sequence::get(&slice, 2), None);
    }

    #[test]
    fn str_counts_chars_not_bytes() {
        let text = "añb";

        assert_eq!(Sequence::len(&text), 3);
        assert_eq!(Sequence::get(&text, 1), Some('ñ'));
        assert_eq!(Sequence::get(&text, 2), Some('b'));
        assert!(Sequence::is_empty(&""));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn ref_cell_reads_live_contents() {
        let cell = RefCell::new(alloc::vec![1, 2]);
        let handle = &cell;

        assert_eq!(Sequence::get(&handle, 1), Some(2));
        cell.borrow_mut()[1] = 5;
        assert_eq!(Sequence::get(&handle, 1), Some(5));
        cell.borrow_mut().push(7);
        assert_eq!(Sequence::len(&handle), 3);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn vec_deque() {
        let mut deque = VecDeque::from([2, 3]);
        deque.push_front(1);
        let handle = &deque;

        assert_eq!(Sequence::len(&handle), 3);
        assert_eq!(Sequence::get(&handle, 0), Some(&1));
    }
}
