//! Iterators backing lazy [`SequenceAdapter`](crate::SequenceAdapter) links
//! that have no counterpart in [`std::iter`].

mod exclude;
mod one_pass;
mod shared;

pub use exclude::*;
pub use one_pass::*;
pub use shared::*;
