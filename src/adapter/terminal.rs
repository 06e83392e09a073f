use std::cmp::Ordering;

use crate::{
    Error, Result, SequenceAdapter,
    cmp::{self, KeyComparator, OrdComparator},
};

impl<I> SequenceAdapter<I>
where
    I: Iterator + Clone,
{
    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if there are no elements.
    #[inline]
    pub fn first(&self) -> Result<I::Item> {
        self.iter().next().ok_or(Error::EmptyCollection)
    }

    /// Returns the first element `predicate` accepts.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::{Error, seq};
    ///
    /// let numbers = seq![1, 4, 6];
    ///
    /// assert_eq!(numbers.first_where(|n| n % 2 == 0), Ok(4));
    /// assert_eq!(numbers.first_where(|n| *n > 10), Err(Error::NotFound));
    /// ```
    #[inline]
    pub fn first_where<P>(&self, predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter().find(predicate).ok_or(Error::NotFound)
    }

    /// Returns the first element, or `default` if there are no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// assert_eq!(seq![5].first_or_default(-1), 5);
    /// assert_eq!(seq![5].only(|n| *n > 5).first_or_default(-1), -1);
    /// ```
    #[inline]
    pub fn first_or_default(&self, default: I::Item) -> I::Item {
        self.iter().next().unwrap_or(default)
    }

    /// Returns the first element `predicate` accepts, or `default` if none is.
    #[inline]
    pub fn first_where_or_default<P>(&self, predicate: P, default: I::Item) -> I::Item
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter().find(predicate).unwrap_or(default)
    }

    /// Returns the last element. Walks the whole sequence.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if there are no elements.
    #[inline]
    pub fn get_last(&self) -> Result<I::Item> {
        self.iter().last().ok_or(Error::EmptyCollection)
    }

    /// Returns whether any element satisfies `predicate`, stopping at the
    /// first one that does.
    #[inline]
    pub fn contains<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter().any(|item| predicate(&item))
    }

    /// Counts the elements satisfying `predicate`.
    #[inline]
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter().filter(predicate).count()
    }

    /// Counts all elements.
    ///
    /// Takes constant time, without a traversal, when the backing iterator
    /// reports its exact length.
    #[inline]
    pub fn size(&self) -> usize {
        match self.values.size_hint() {
            (lower, Some(upper)) if lower == upper => lower,
            _ => self.iter().count(),
        }
    }

    /// Returns whether there are no elements.
    ///
    /// Looks at one element at most, and none when the backing iterator's
    /// length bounds already settle it.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self.values.size_hint() {
            (_, Some(0)) => true,
            (1.., _) => false,
            _ => self.iter().next().is_none(),
        }
    }

    /// Returns the greatest element according to `comparator`.
    ///
    /// If several elements are equally greatest, the first of them is
    /// returned (unlike [`Iterator::max_by`], which returns the last).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if there are no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::{cmp, seq};
    ///
    /// let words = seq!["kiwi", "fig", "pear"];
    ///
    /// assert_eq!(words.max(cmp::on_result_of(|w: &&str| w.len())), Ok("kiwi"));
    /// assert_eq!(words.max(cmp::natural()), Ok("pear"));
    /// ```
    pub fn max<C>(&self, comparator: C) -> Result<I::Item>
    where
        C: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        cmp::first_greatest(self.iter(), comparator).ok_or(Error::EmptyCollection)
    }

    /// Returns the least element according to `comparator`.
    ///
    /// If several elements are equally least, the first of them is returned.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if there are no elements.
    pub fn min<C>(&self, comparator: C) -> Result<I::Item>
    where
        C: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        cmp::first_least(self.iter(), comparator).ok_or(Error::EmptyCollection)
    }

    /// Returns the element whose key is greatest, computing each key once.
    ///
    /// Ties go to the first element, as in [`max`](SequenceAdapter::max).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if there are no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let oldest = seq![("ann", 41), ("bo", 19), ("cy", 41)].max_on_result_of(|p| p.1);
    ///
    /// assert_eq!(oldest, Ok(("ann", 41)));
    /// ```
    pub fn max_on_result_of<K, F>(&self, mut key: F) -> Result<I::Item>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let keyed = self.iter().map(|item| (key(&item), item));
        cmp::first_greatest(keyed, KeyComparator(OrdComparator))
            .map(|(_, item)| item)
            .ok_or(Error::EmptyCollection)
    }

    /// Returns the element whose key is least, computing each key once.
    ///
    /// Ties go to the first element, as in [`min`](SequenceAdapter::min).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCollection`] if there are no elements.
    pub fn min_on_result_of<K, F>(&self, mut key: F) -> Result<I::Item>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let keyed = self.iter().map(|item| (key(&item), item));
        cmp::first_least(keyed, KeyComparator(OrdComparator))
            .map(|(_, item)| item)
            .ok_or(Error::EmptyCollection)
    }

    /// Folds the elements from left to right, starting from `initial`.
    ///
    /// Returns `initial` untouched if there are no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// assert_eq!(seq![1, 2, 3].reduce(0, |acc, x| acc + x), 6);
    /// assert_eq!(seq![1, 2, 3].reduce(String::new(), |acc, x| format!("({acc}{x})")), "(((1)2)3)");
    /// ```
    #[inline]
    pub fn reduce<A, F>(&self, initial: A, accumulator: F) -> A
    where
        F: FnMut(A, I::Item) -> A,
    {
        self.iter().fold(initial, accumulator)
    }

    /// Runs `action` on every element, in order.
    #[inline]
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(I::Item),
    {
        self.iter().for_each(action);
    }

    /// Runs `action` on every element and its zero-based position, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let mut lines = Vec::new();
    /// seq!["a", "b"].for_each_indexed(|i, s| lines.push(format!("{i}:{s}")));
    ///
    /// assert_eq!(lines, ["0:a", "1:b"]);
    /// ```
    #[inline]
    pub fn for_each_indexed<F>(&self, mut action: F)
    where
        F: FnMut(usize, I::Item),
    {
        self.iter()
            .enumerate()
            .for_each(|(index, item)| action(index, item));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::{Error, SequenceAdapter, cmp, seq, test_utils::Id};

    #[test]
    fn empty_sequence_errors() {
        let empty = SequenceAdapter::of(Vec::<i32>::new());

        assert!(empty.is_empty());
        assert_eq!(empty.size(), 0);
        assert_eq!(empty.first(), Err(Error::EmptyCollection));
        assert_eq!(empty.get_last(), Err(Error::EmptyCollection));
        assert_eq!(empty.max(cmp::natural()), Err(Error::EmptyCollection));
        assert_eq!(empty.min(cmp::natural()), Err(Error::EmptyCollection));
        assert_eq!(empty.max_on_result_of(|n| *n), Err(Error::EmptyCollection));
        assert_eq!(empty.min_on_result_of(|n| *n), Err(Error::EmptyCollection));
        assert_eq!(empty.first_where(|_| true), Err(Error::NotFound));
        assert_eq!(empty.first_or_default(-1), -1);
        assert_eq!(empty.first_where_or_default(|_| true, 7), 7);
        assert_eq!(empty.reduce(10, |acc, n| acc + n), 10);
    }

    #[test]
    fn first_and_last() {
        let numbers = seq![4, 8, 15, 16];

        assert_eq!(numbers.first(), Ok(4));
        assert_eq!(numbers.get_last(), Ok(16));
        assert_eq!(numbers.first_where_or_default(|n| *n > 10, 0), 15);
        assert_eq!(numbers.first_where_or_default(|n| *n > 99, 0), 0);
    }

    #[test]
    fn contains_short_circuits() {
        let seen = Cell::new(0);
        let found = seq![1, 2, 3, 4].contains(|n| {
            seen.set(seen.get() + 1);
            *n == 2
        });

        assert!(found);
        assert_eq!(seen.get(), 2);
        assert!(!seq![1, 3].contains(|n| n % 2 == 0));
    }

    #[test]
    fn count_and_size() {
        let letters = seq!['a', 'b', 'A', 'c', 'B'];

        assert_eq!(letters.count(char::is_ascii_uppercase), 2);
        assert_eq!(letters.size(), 5);
    }

    #[test]
    fn extremes_prefer_the_first_tie() {
        let items = SequenceAdapter::of(Id::numbered([3, 7, 1, 7, 1]));

        assert_eq!(items.max(cmp::natural()).map(|item| item.id), Ok(1));
        assert_eq!(items.min(cmp::natural()).map(|item| item.id), Ok(2));
        assert_eq!(items.max_on_result_of(|item| item.num).map(|item| item.id), Ok(1));
        assert_eq!(items.min_on_result_of(|item| item.num).map(|item| item.id), Ok(2));
    }

    #[test]
    fn key_is_computed_once_per_element() {
        let calls = Cell::new(0);
        let longest = seq!["a", "abc", "ab"].max_on_result_of(|s| {
            calls.set(calls.get() + 1);
            s.len()
        });

        assert_eq!(longest, Ok("abc"));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn for_each_visits_in_order() {
        let mut seen = Vec::new();
        seq![3, 1, 2].for_each(|n| seen.push(n));
        assert_eq!(seen, [3, 1, 2]);

        let mut positions = Vec::new();
        seq!['x', 'y', 'z'].for_each_indexed(|i, c| positions.push((i, c)));
        assert_eq!(positions, [(0, 'x'), (1, 'y'), (2, 'z')]);
    }

    proptest! {
        #[test]
        fn terminals_match_iterator(
            nums in propvec(any::<i32>(), ..32),
        ) {
            terminals_match_iterator_impl(nums)?;
        }
    }

    fn terminals_match_iterator_impl(nums: Vec<i32>) -> TestCaseResult {
        let adapter = SequenceAdapter::of(&nums);
        let positive = |n: &&i32| **n > 0;

        prop_assert_eq!(adapter.size(), nums.len());
        prop_assert_eq!(adapter.is_empty(), nums.is_empty());
        prop_assert_eq!(adapter.first().ok(), nums.first());
        prop_assert_eq!(adapter.get_last().ok(), nums.last());
        prop_assert_eq!(adapter.count(positive), nums.iter().filter(positive).count());
        prop_assert_eq!(adapter.contains(positive), nums.iter().any(|n| *n > 0));
        prop_assert_eq!(adapter.max(cmp::natural()).ok(), nums.iter().max());
        prop_assert_eq!(adapter.min(cmp::natural()).ok(), nums.iter().min());
        prop_assert_eq!(
            adapter.reduce(0_i64, |acc, n| acc + i64::from(*n)),
            nums.iter().map(|n| i64::from(*n)).sum::<i64>()
        );

        Ok(())
    }
}
