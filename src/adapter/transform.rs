use std::{
    cmp::Ordering,
    iter::{Chain, FlatMap, Map},
    vec,
};

use itertools::Itertools;

use crate::{SequenceAdapter, cmp};

impl<I: Iterator> SequenceAdapter<I> {
    /// Projects every element through `transform`.
    ///
    /// Lazy, and one output per input: duplicates stay duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// assert_eq!(seq![1, 2, 3].map(|x| x * 2).join(","), "2,4,6");
    /// ```
    #[inline]
    pub fn map<R, F>(self, transform: F) -> SequenceAdapter<Map<I, F>>
    where
        F: FnMut(I::Item) -> R,
    {
        SequenceAdapter {
            values: self.values.map(transform),
        }
    }

    /// Alias of [`map`](SequenceAdapter::map).
    #[inline]
    pub fn to<R, F>(self, transform: F) -> SequenceAdapter<Map<I, F>>
    where
        F: FnMut(I::Item) -> R,
    {
        self.map(transform)
    }

    /// Projects every element to a sub-sequence and concatenates the
    /// sub-sequences in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let letters = seq!["ab", "", "cde"].flat_map(str::chars);
    ///
    /// assert_eq!(letters.joined(), "abcde");
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, transform: F) -> SequenceAdapter<FlatMap<I, U, F>>
    where
        U: IntoIterator,
        F: FnMut(I::Item) -> U,
    {
        SequenceAdapter {
            values: self.values.flat_map(transform),
        }
    }

    /// Appends the elements of `other` after this sequence's.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let more = seq![1, 2].concat(vec![3]).concat([4, 5]);
    ///
    /// assert_eq!(more.to_list(), [1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    pub fn concat<J>(self, other: J) -> SequenceAdapter<Chain<I, J::IntoIter>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        SequenceAdapter {
            values: self.values.chain(other),
        }
    }

    /// Sorts the elements by `comparator`.
    ///
    /// The sort is stable and happens right away: the whole sequence is
    /// consumed and buffered, and the returned adapter traverses the buffer.
    ///
    /// See [`cmp`] for ready-made comparators.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let by_len = seq!["bb", "a", "cc", "d"].sort_on(|a, b| a.len().cmp(&b.len()));
    ///
    /// assert_eq!(by_len.to_list(), ["a", "d", "bb", "cc"]);
    /// ```
    pub fn sort_on<C>(self, comparator: C) -> SequenceAdapter<vec::IntoIter<I::Item>>
    where
        C: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        SequenceAdapter {
            values: self.values.sorted_by(comparator),
        }
    }

    /// Sorts the elements by the natural order of the key `key` projects
    /// them to. Stable, like [`sort_on`](SequenceAdapter::sort_on).
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let by_age = seq![("ann", 41), ("bo", 19), ("cy", 41)].sort_on_result_of(|p| p.1);
    ///
    /// assert_eq!(by_age.map(|p| p.0).join(" "), "bo ann cy");
    /// ```
    pub fn sort_on_result_of<K, F>(self, key: F) -> SequenceAdapter<vec::IntoIter<I::Item>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        self.sort_on(cmp::on_result_of(key))
    }

    /// Sorts the elements by their natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// assert_eq!(seq![3, 1, 2].sorted().to_list(), [1, 2, 3]);
    /// ```
    pub fn sorted(self) -> SequenceAdapter<vec::IntoIter<I::Item>>
    where
        I::Item: Ord,
    {
        self.sort_on(Ord::cmp)
    }
}
