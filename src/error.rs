//! Errors returned by the terminal operations of a [`SequenceAdapter`].
//!
//! [`SequenceAdapter`]: crate::SequenceAdapter

/// The reasons a terminal operation can fail.
///
/// Every failure is reported synchronously by the call that detects it.
/// No operation retries or partially applies its work.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation needs at least one element, but the sequence has none.
    ///
    /// Returned by [`first`], [`get_last`], [`max`], [`min`] and their
    /// key-based variants.
    ///
    /// [`first`]: crate::SequenceAdapter::first
    /// [`get_last`]: crate::SequenceAdapter::get_last
    /// [`max`]: crate::SequenceAdapter::max
    /// [`min`]: crate::SequenceAdapter::min
    #[error("the sequence has no elements")]
    EmptyCollection,

    /// No element satisfies the given predicate.
    ///
    /// Returned by [`first_where`](crate::SequenceAdapter::first_where).
    #[error("no element satisfies the predicate")]
    NotFound,

    /// An argument is valid for the type system but not for this sequence.
    ///
    /// Returned by [`to_array`](crate::SequenceAdapter::to_array) when the
    /// requested length differs from the number of elements.
    #[error("invalid argument: expected {expected} elements, found {actual}")]
    InvalidArgument {
        /// The number of elements the caller asked for.
        expected: usize,
        /// The number of elements the sequence actually has.
        actual: usize,
    },
}

/// A [`Result`](std::result::Result) whose error defaults to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
