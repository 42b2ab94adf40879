use variadics_please::all_tuples;

use crate::{IndicesError, Sequence};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// An ordered set of [`Sequence`]s that are iterated over in lockstep.
///
/// This is implemented for tuples of up to 15 sequences, whose element types may all differ, and
/// (with the `alloc` feature) for slices, [`Vec`]s and arrays of a single sequence type, for when
/// the number of sequences is only known at runtime.
///
/// The empty tuple `()` and empty slices are valid sets. They have no common length at all,
/// which is how the operations in this crate tell "no sequences" apart from "empty sequences".
pub trait Sequences {
    /// The tuple produced for a single index: the index followed by one element per sequence.
    type Indexed;

    /// Returns the number of sequences in the set.
    fn arity(&self) -> usize;

    /// Returns the length of the shortest sequence, or `None` if the set has no sequences.
    ///
    /// Every sequence's [`len`](Sequence::len) is queried exactly once. No element is read.
    fn common_len(&self) -> Option<usize>;

    /// Reads the element at `index` from every sequence and pairs them with `index`.
    ///
    /// Fails with [`IndicesError::MissingElement`] naming the first sequence that has no element
    /// at `index`. Sequences after it are not read.
    fn try_get_indexed(&self, index: usize) -> Result<Self::Indexed, IndicesError>;
}

/// Reads `index` from `sequence`, advancing `position` to the next sequence of the set.
#[inline]
fn fetch<S: Sequence>(
    sequence: &S,
    position: &mut usize,
    index: usize,
) -> Result<S::Item, IndicesError> {
    let current = *position;
    *position += 1;
    sequence
        .get(index)
        .ok_or_else(|| IndicesError::MissingElement {
            sequence: current,
            index,
            len: sequence.len(),
        })
}

macro_rules! impl_sequences_tuple {
    ($($S: ident),*) => {
        #[expect(
            clippy::allow_attributes,
            reason = "This is within a macro, and as such, the below lints may not always apply."
        )]
        #[allow(
            non_snake_case,
            unused_variables,
            unused_mut,
            reason = "Certain variable names are provided by the caller, not by us."
        )]
        impl<$($S: Sequence),*> Sequences for ($($S,)*) {
            type Indexed = (usize, $($S::Item,)*);

            #[inline]
            fn arity(&self) -> usize {
                let ($($S,)*) = self;
                0 $(+ { let _ = $S; 1 })*
            }

            #[inline]
            fn common_len(&self) -> Option<usize> {
                let ($($S,)*) = self;
                let mut len: Option<usize> = None;
                $(
                    let current = $S.len();
                    len = Some(len.map_or(current, |len| len.min(current)));
                )*
                len
            }

            #[inline]
            fn try_get_indexed(&self, index: usize) -> Result<Self::Indexed, IndicesError> {
                let ($($S,)*) = self;
                let mut position = 0;
                Ok((index, $(fetch($S, &mut position, index)?,)*))
            }
        }
    };
}

all_tuples!(impl_sequences_tuple, 0, 15, S);

#[cfg(feature = "alloc")]
fn common_len_of<S: Sequence>(sequences: &[S]) -> Option<usize> {
    sequences.iter().map(Sequence::len).min()
}

#[cfg(feature = "alloc")]
fn try_get_indexed_of<S: Sequence>(
    sequences: &[S],
    index: usize,
) -> Result<(usize, Vec<S::Item>), IndicesError> {
    let mut position = 0;
    let items = sequences
        .iter()
        .map(|sequence| fetch(sequence, &mut position, index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((index, items))
}

#[cfg(feature = "alloc")]
impl<S: Sequence> Sequences for &[S] {
    type Indexed = (usize, Vec<S::Item>);

    #[inline]
    fn arity(&self) -> usize {
        self.len()
    }

    fn common_len(&self) -> Option<usize> {
        common_len_of(self)
    }

    fn try_get_indexed(&self, index: usize) -> Result<Self::Indexed, IndicesError> {
        try_get_indexed_of(self, index)
    }
}

#[cfg(feature = "alloc")]
impl<S: Sequence> Sequences for Vec<S> {
    type Indexed = (usize, Vec<S::Item>);

    #[inline]
    fn arity(&self) -> usize {
        self.len()
    }

    fn common_len(&self) -> Option<usize> {
        common_len_of(self)
    }

    fn try_get_indexed(&self, index: usize) -> Result<Self::Indexed, IndicesError> {
        try_get_indexed_of(self, index)
    }
}

#[cfg(feature = "alloc")]
impl<S: Sequence, const N: usize> Sequences for [S; N] {
    type Indexed = (usize, Vec<S::Item>);

    #[inline]
    fn arity(&self) -> usize {
        N
    }

    fn common_len(&self) -> Option<usize> {
        common_len_of(self)
    }

    fn try_get_indexed(&self, index: usize) -> Result<Self::Indexed, IndicesError> {
        try_get_indexed_of(self, index)
    }
}
