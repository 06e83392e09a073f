//! A fluent, chainable way to query and transform a sequence.
//!
//! [`SequenceAdapter`] wraps an ordered sequence and offers filtering,
//! projection, sorting, grouping, reduction and conversion as one chain of
//! method calls that reads left to right.
//!
//! # Motivation
//!
//! Suppose we have a list of people, and we are asked for the names of the
//! adults, alphabetically, as one comma-separated line.
//!
//! - Approach 1: By hand
//!
//! ```
//! let people = [("zoe", 34), ("tim", 12), ("ada", 51)];
//!
//! let mut names = Vec::new();
//! for (name, age) in people {
//!     if age >= 18 {
//!         names.push(name);
//!     }
//! }
//! names.sort();
//! let line = names.join(", ");
//!
//! assert_eq!(line, "ada, zoe");
//! ```
//!
//! **Cons:** The intent is buried under bookkeeping: a mutable buffer, a
//! separate sort statement, and a conversion at the end.
//!
//! - Approach 2: [`Iterator`]
//!
//! ```
//! let people = [("zoe", 34), ("tim", 12), ("ada", 51)];
//!
//! let mut names: Vec<_> = people
//!     .into_iter()
//!     .filter(|(_, age)| *age >= 18)
//!     .map(|(name, _)| name)
//!     .collect();
//! names.sort();
//!
//! assert_eq!(names.join(", "), "ada, zoe");
//! ```
//!
//! **Cons:** Better, but the chain breaks to sort, and the iterator is gone
//! once traversed. Asking a second question means rebuilding it.
//!
//! This crate keeps the whole query in one chain, and keeps it around:
//!
//! ```
//! use fluent_seq::seq;
//!
//! let people = seq![("zoe", 34), ("tim", 12), ("ada", 51)];
//!
//! let adults = people.clone().only(|(_, age)| *age >= 18).map(|(name, _)| name);
//!
//! assert_eq!(adults.clone().sorted().join(", "), "ada, zoe");
//! assert_eq!(adults.size(), 2);
//! assert_eq!(people.first_or_default(("nobody", 0)).0, "zoe");
//! ```
//!
//! # Laziness
//!
//! Filtering and projection are lazy and recomputed on every traversal. An
//! adapter can be traversed as many times as its underlying iterator can be
//! cloned. Sorting is the exception: it buffers the sequence once, when
//! called. See [`SequenceAdapter`] for the details, and
//! [`SequenceAdapter::once`] for sources that can be read only once.
//!
//! # More examples
//!
//! ```
//! use fluent_seq::{SequenceAdapter, cmp, seq};
//!
//! assert_eq!(seq![3, 1, 2].sort_on(cmp::natural::<i32>()).to_list(), [1, 2, 3]);
//! assert_eq!(seq!["a", "bb", "ccc"].only(|s| s.len() > 1).to_list(), ["bb", "ccc"]);
//! assert_eq!(seq![1, 2, 3].map(|x| x * 2).join(","), "2,4,6");
//!
//! let parity = seq![1, 2, 2, 3].group_by(|x| x % 2);
//! assert_eq!(parity.into_iter().collect::<Vec<_>>(), [(1, vec![1, 3]), (0, vec![2, 2])]);
//!
//! let nothing: SequenceAdapter<std::iter::Empty<i32>> = seq![];
//! assert_eq!(nothing.first_or_default(-1), -1);
//! assert_eq!(seq![5].first_or_default(-1), 5);
//!
//! assert_eq!(seq![1, 2, 3].reduce(0, |acc, x| acc + x), 6);
//! ```
//!
//! # Errors
//!
//! Operations that cannot produce a value return [`Result`] with an
//! [`Error`]: an empty sequence has no [`first`](SequenceAdapter::first) or
//! [`max`](SequenceAdapter::max), and
//! [`first_where`](SequenceAdapter::first_where) may find nothing. The
//! `_or_default` variants never fail.

mod adapter;
mod adaptors;
pub mod cmp;
mod error;
mod macros;
pub mod predicate;
pub mod prelude;

#[cfg(test)]
mod test_utils;

pub use adapter::SequenceAdapter;
pub use adaptors::*;
pub use error::{Error, Result};
