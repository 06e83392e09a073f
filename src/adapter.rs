//! The [`SequenceAdapter`] type and its operations.

mod construct;
mod convert;
mod filtering;
mod group;
mod identity;
mod terminal;
mod transform;

/// A fluent, immutable wrapper around an ordered sequence.
///
/// The wrapped sequence is an [`Iterator`]. An adapter is *re-iterable*
/// when that iterator is [`Clone`]: every traversal runs a fresh clone and
/// leaves the stored iterator untouched. Every operation that reads the
/// elements, from [`first`](SequenceAdapter::first) to
/// [`group_by`](SequenceAdapter::group_by), requires this.
///
/// Operations come in three kinds:
///
/// - *Lazy links* ([`only`](SequenceAdapter::only),
///   [`exclude`](SequenceAdapter::exclude), [`map`](SequenceAdapter::map),
///   [`flat_map`](SequenceAdapter::flat_map), [`concat`](SequenceAdapter::concat), ...)
///   consume the adapter and return a new one. Nothing runs until the new
///   adapter is traversed, and their closures run again on *every*
///   traversal. Nothing is memoized.
/// - *Sorting* ([`sort_on`](SequenceAdapter::sort_on) and friends) consumes
///   the whole sequence when called and wraps the sorted buffer.
/// - *Terminal operations* borrow the adapter and return a plain value.
///   Collections they return are fresh copies and never alias the
///   adapter's backing storage.
///
/// # Backing storage
///
/// [`of`](SequenceAdapter::of) accepts anything [`IntoIterator`]. Wrapping a
/// borrowed collection (`of(&vec)`) yields references and copies nothing.
/// Owned elements are best handed over with
/// [`from_vec`](SequenceAdapter::from_vec), `collect` or [`seq!`](crate::seq):
/// the elements are stored once in a [`Shared`](crate::Shared) buffer and each
/// traversal clones only the elements it reaches. While an adapter borrows a
/// collection, the borrow checker keeps anyone from mutating it.
///
/// # Examples
///
/// ```
/// use fluent_seq::seq;
///
/// let words = seq!["pear", "fig", "apple", "kiwi", "date"];
///
/// let short = words
///     .clone()
///     .only(|w| w.len() <= 4)
///     .exclude_values(["kiwi"])
///     .map(str::to_uppercase)
///     .sorted();
///
/// assert_eq!(short.join(", "), "DATE, FIG, PEAR");
/// assert_eq!(words.size(), 5);
/// ```
#[derive(Clone)]
#[must_use]
pub struct SequenceAdapter<I> {
    values: I,
}
