use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashSet},
    fmt::Display,
    hash::Hash,
    sync::Arc,
};

use indexmap::IndexSet;
use itertools::Itertools;

use crate::{Error, Result, SequenceAdapter, cmp};

/// Every conversion copies: the returned collection never shares storage
/// with the adapter.
impl<I> SequenceAdapter<I>
where
    I: Iterator + Clone,
{
    /// Collects the elements into a [`Vec`].
    #[inline]
    pub fn to_list(&self) -> Vec<I::Item> {
        self.iter().collect()
    }

    /// Collects the elements into a read-only shared slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use fluent_seq::seq;
    ///
    /// let frozen: Arc<[i32]> = seq![1, 2, 3].to_immutable_list();
    /// let shared = Arc::clone(&frozen);
    ///
    /// assert_eq!(&*shared, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn to_immutable_list(&self) -> Arc<[I::Item]> {
        self.iter().collect()
    }

    /// Collects the distinct elements into a [`HashSet`].
    #[inline]
    pub fn to_set(&self) -> HashSet<I::Item>
    where
        I::Item: Eq + Hash,
    {
        self.iter().collect()
    }

    /// Collects the distinct projections of the elements into a [`HashSet`].
    #[inline]
    pub fn to_set_by<R, F>(&self, transform: F) -> HashSet<R>
    where
        R: Eq + Hash,
        F: FnMut(I::Item) -> R,
    {
        self.iter().map(transform).collect()
    }

    /// Collects the distinct elements into a read-only set that iterates in
    /// first-seen order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let unique = seq!['b', 'a', 'b', 'c', 'a'].to_immutable_set();
    ///
    /// assert_eq!(unique.iter().collect::<String>(), "bac");
    /// ```
    #[inline]
    pub fn to_immutable_set(&self) -> Arc<IndexSet<I::Item>>
    where
        I::Item: Eq + Hash,
    {
        Arc::new(self.iter().collect())
    }

    /// Like [`to_immutable_set`](SequenceAdapter::to_immutable_set), over the
    /// projections of the elements.
    #[inline]
    pub fn to_immutable_set_by<R, F>(&self, transform: F) -> Arc<IndexSet<R>>
    where
        R: Eq + Hash,
        F: FnMut(I::Item) -> R,
    {
        Arc::new(self.iter().map(transform).collect())
    }

    /// Collects the distinct elements into a [`BTreeSet`], sorted by their
    /// natural order.
    #[inline]
    pub fn to_tree_set(&self) -> BTreeSet<I::Item>
    where
        I::Item: Ord,
    {
        self.iter().collect()
    }

    /// Sorts the elements by `comparator` and keeps one element per group of
    /// elements comparing equal: the first one seen.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let by_len = seq!["bb", "a", "cc", "d", "eee"]
    ///     .to_tree_set_with(|a, b| a.len().cmp(&b.len()));
    ///
    /// assert_eq!(by_len, ["a", "bb", "eee"]);
    /// ```
    pub fn to_tree_set_with<C>(&self, comparator: C) -> Vec<I::Item>
    where
        C: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        cmp::sorted_unique_by(self.iter(), comparator)
    }

    /// Collects the distinct projections of the elements into a
    /// [`BTreeSet`].
    #[inline]
    pub fn to_tree_set_by<R, F>(&self, transform: F) -> BTreeSet<R>
    where
        R: Ord,
        F: FnMut(I::Item) -> R,
    {
        self.iter().map(transform).collect()
    }

    /// Projects the elements, then sorts and deduplicates the projections by
    /// `comparator` like [`to_tree_set_with`](SequenceAdapter::to_tree_set_with).
    pub fn to_tree_set_by_with<R, F, C>(&self, transform: F, comparator: C) -> Vec<R>
    where
        F: FnMut(I::Item) -> R,
        C: FnMut(&R, &R) -> Ordering,
    {
        cmp::sorted_unique_by(self.iter().map(transform), comparator)
    }

    /// Collects the elements into an array of exactly `N` elements.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the sequence does not have exactly `N`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::{Error, seq};
    ///
    /// assert_eq!(seq![1, 2, 3].to_array::<3>(), Ok([1, 2, 3]));
    /// assert_eq!(
    ///     seq![1, 2, 3].to_array::<2>(),
    ///     Err(Error::InvalidArgument { expected: 2, actual: 3 })
    /// );
    /// ```
    pub fn to_array<const N: usize>(&self) -> Result<[I::Item; N]> {
        let items = self.to_list();
        let actual = items.len();
        items
            .try_into()
            .map_err(|_| Error::InvalidArgument {
                expected: N,
                actual,
            })
    }

    /// Concatenates the string forms of the elements, with `separator`
    /// between each pair.
    #[inline]
    pub fn join(&self, separator: &str) -> String
    where
        I::Item: Display,
    {
        self.iter().join(separator)
    }

    /// Concatenates the string forms of the elements with no separator.
    #[inline]
    pub fn joined(&self) -> String
    where
        I::Item: Display,
    {
        self.join("")
    }

    /// Appends every element to `destination` and hands it back.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::VecDeque;
    /// use fluent_seq::seq;
    ///
    /// let queue = seq![2, 3].copy_to(VecDeque::from([1]));
    ///
    /// assert_eq!(queue, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn copy_to<C>(&self, mut destination: C) -> C
    where
        C: Extend<I::Item>,
    {
        destination.extend(self.iter());
        destination
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use crate::{SequenceAdapter, cmp, seq, test_utils::Id};

    #[test]
    fn conversions_copy() {
        let source = vec![1, 2, 3];
        let adapter = SequenceAdapter::of(&source);

        let mut list = adapter.map(|n| *n).to_list();
        list.push(4);

        assert_eq!(source, [1, 2, 3]);
        assert_eq!(list, [1, 2, 3, 4]);
    }

    #[test]
    fn sets() {
        let words = seq!["to", "be", "or", "not", "to", "be"];

        assert_eq!(words.to_set(), HashSet::from(["to", "be", "or", "not"]));
        assert_eq!(words.to_set_by(str::len), HashSet::from([2, 3]));
        assert_eq!(
            words.to_tree_set().into_iter().collect::<Vec<_>>(),
            ["be", "not", "or", "to"]
        );
        assert_eq!(words.to_tree_set_by(str::len), BTreeSet::from([2, 3]));
        assert_eq!(
            words.to_immutable_set().iter().copied().collect::<Vec<_>>(),
            ["to", "be", "or", "not"]
        );
        assert_eq!(words.to_immutable_set_by(|w| w.chars().next()).len(), 4);
    }

    #[test]
    fn tree_set_with_comparator_keeps_first_equal() {
        let items = SequenceAdapter::of(Id::numbered([5, 3, 5, 3]));
        let unique = items.to_tree_set_with(cmp::natural());

        let ids: Vec<_> = unique.iter().map(|item| item.id).collect();
        assert_eq!(ids, [1, 0]);

        let descending = seq![1, 5, 3, 5]
            .to_tree_set_by_with(|n| n * 10, cmp::reversed(cmp::natural::<i32>()));
        assert_eq!(descending, [50, 30, 10]);
    }

    #[test]
    fn join_renders_display() {
        assert_eq!(seq![1.5, 2.0].join(" | "), "1.5 | 2");
        assert_eq!(seq!["a", "b"].joined(), "ab");
        assert_eq!(SequenceAdapter::of(Vec::<u8>::new()).join(","), "");
    }

    #[test]
    fn to_array_needs_exact_length() {
        assert_eq!(seq!['a'].to_array::<1>(), Ok(['a']));
        assert!(seq!['a'].to_array::<0>().is_err());
    }

    #[test]
    fn copy_to_extends_existing_items() {
        let grown = seq![3, 4].copy_to(vec![1, 2]);
        assert_eq!(grown, [1, 2, 3, 4]);
    }
}
