//! Orderings for sorting and for picking extreme elements.
//!
//! Every ordering in this crate is a plain `FnMut(&T, &T) -> Ordering`.
//! The helpers here build such functions from the natural order of a type
//! or from the natural order of a projected key, so that
//! [`sort_on`](crate::SequenceAdapter::sort_on), [`max`](crate::SequenceAdapter::max)
//! and [`min`](crate::SequenceAdapter::min) only need the one comparator form.
//!
//! This module corresponds to [`std::cmp`].

mod comparator;

pub(crate) use comparator::*;

use std::cmp::Ordering;

use itertools::Itertools;

/// Returns the natural order of `T`, i.e. [`Ord::cmp`].
///
/// # Examples
///
/// ```
/// use fluent_seq::{cmp, seq};
///
/// assert_eq!(seq![3, 1, 2].sort_on(cmp::natural::<i32>()).to_list(), [1, 2, 3]);
/// ```
#[inline]
pub fn natural<T: Ord>() -> fn(&T, &T) -> Ordering {
    T::cmp
}

/// Orders elements by the natural order of the key `key` projects them to.
///
/// The key is recomputed on every comparison. Prefer
/// [`max_on_result_of`](crate::SequenceAdapter::max_on_result_of) and
/// [`min_on_result_of`](crate::SequenceAdapter::min_on_result_of)
/// for extremes, which compute it once per element.
///
/// # Examples
///
/// ```
/// use fluent_seq::{cmp, seq};
///
/// let by_len = seq!["ccc", "a", "bb"].sort_on(cmp::on_result_of(|s: &&str| s.len()));
///
/// assert_eq!(by_len.to_list(), ["a", "bb", "ccc"]);
/// ```
pub fn on_result_of<T, K, F>(mut key: F) -> impl FnMut(&T, &T) -> Ordering
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |a: &T, b: &T| key(a).cmp(&key(b))
}

/// Reverses an ordering.
///
/// # Examples
///
/// ```
/// use fluent_seq::{cmp, seq};
///
/// let desc = seq![1, 3, 2].sort_on(cmp::reversed(cmp::natural::<i32>()));
///
/// assert_eq!(desc.to_list(), [3, 2, 1]);
/// ```
pub fn reversed<T, F>(mut cmp: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| cmp(a, b).reverse()
}

/// The first of the greatest items, or `None` if there are no items.
pub(crate) fn first_greatest<T>(
    items: impl IntoIterator<Item = T>,
    mut cmp: impl Comparator<T>,
) -> Option<T> {
    let mut items = items.into_iter();
    let mut max = items.next()?;
    items.for_each(|item| cmp.max_assign(&mut max, item));
    Some(max)
}

/// The first of the least items, or `None` if there are no items.
pub(crate) fn first_least<T>(
    items: impl IntoIterator<Item = T>,
    mut cmp: impl Comparator<T>,
) -> Option<T> {
    let mut items = items.into_iter();
    let mut min = items.next()?;
    items.for_each(|item| cmp.min_assign(&mut min, item));
    Some(min)
}

/// Sorts stably by `cmp`, then collapses each run of items comparing equal
/// to the first item of the run.
pub(crate) fn sorted_unique_by<T>(
    items: impl IntoIterator<Item = T>,
    mut cmp: impl FnMut(&T, &T) -> Ordering,
) -> Vec<T> {
    let sorted = items.into_iter().sorted_by(&mut cmp);
    sorted.dedup_by(|a, b| cmp(a, b).is_eq()).collect()
}
