#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod enumerate;
mod error;
mod indexed;
mod indices;
mod sequence;
mod sequences;

/// The indices prelude.
///
/// This includes the operations and traits you need for everyday use.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        enumerate::enumerate, indexed::iter_indexed, indices::iter_indices, sequence::Sequence,
        sequences::Sequences,
    };

    #[cfg(feature = "alloc")]
    #[doc(hidden)]
    pub use crate::{indexed::indexed, indices::indices};
}

pub use enumerate::*;
pub use error::*;
pub use indexed::*;
pub use indices::*;
pub use sequence::*;
pub use sequences::*;
