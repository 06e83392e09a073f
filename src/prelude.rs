//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the adapter, its errors, and the comparator and
//! predicate helpers.
//!
//! # Example
//!
//! ```
//! use fluent_seq::prelude::*;
//!
//! let oldest = seq![("ann", 41), ("bo", 19)].max(cmp::on_result_of(|p: &(&str, i32)| p.1));
//! assert_eq!(oldest, Ok(("ann", 41)));
//! ```

pub use crate::{Error, Result, SequenceAdapter, cmp, predicate, seq};
pub use crate::predicate::Predicate;
