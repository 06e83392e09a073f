use std::{
    borrow::Borrow,
    hash::Hash,
    iter::{Filter, Flatten},
};

use crate::{
    Exclude, SequenceAdapter,
    predicate::{IsIn, IsInSet, Predicate},
};

impl<I: Iterator> SequenceAdapter<I> {
    /// Keeps only the elements `predicate` accepts.
    ///
    /// Lazy: `predicate` runs once per element on every traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let long = seq!["a", "bb", "ccc"].only(|s| s.len() > 1);
    ///
    /// assert_eq!(long.to_list(), ["bb", "ccc"]);
    /// ```
    #[inline]
    pub fn only<P>(self, predicate: P) -> SequenceAdapter<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        SequenceAdapter {
            values: self.values.filter(predicate),
        }
    }

    /// Alias of [`only`](SequenceAdapter::only).
    #[inline]
    pub fn filter<P>(self, predicate: P) -> SequenceAdapter<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.only(predicate)
    }

    /// Drops the elements `predicate` accepts, the complement of
    /// [`only`](SequenceAdapter::only).
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let odd = seq![1, 2, 3, 4, 5].exclude(|n| n % 2 == 0);
    ///
    /// assert_eq!(odd.to_list(), [1, 3, 5]);
    /// ```
    #[inline]
    pub fn exclude<P>(self, predicate: P) -> SequenceAdapter<Exclude<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.excluding(predicate)
    }

    /// Drops every element equal to one of `values`.
    ///
    /// Takes a literal list as well as any collection. Every element is
    /// compared against the values one by one; for many hashable values,
    /// [`exclude_hashed`](SequenceAdapter::exclude_hashed) is faster.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let banned = vec!["spam", "eggs"];
    /// let menu = seq!["spam", "ham", "eggs", "toast", "spam"];
    ///
    /// assert_eq!(menu.clone().exclude_values(banned).to_list(), ["ham", "toast"]);
    /// assert_eq!(menu.exclude_values(["spam"]).size(), 3);
    /// ```
    pub fn exclude_values<V>(
        self,
        values: impl IntoIterator<Item = V>,
    ) -> SequenceAdapter<Exclude<I, IsIn<V>>>
    where
        I::Item: PartialEq<V>,
    {
        self.excluding(IsIn::new(values))
    }

    /// Drops every element found in the set built from `values`.
    ///
    /// Same result as [`exclude_values`](SequenceAdapter::exclude_values),
    /// with a hash lookup per element instead of a scan. Borrowed elements
    /// (`&V`) are looked up among owned values (`V`).
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::SequenceAdapter;
    ///
    /// let words = vec![String::from("a"), String::from("b"), String::from("c")];
    /// let stop_words = [String::from("b")];
    ///
    /// let kept = SequenceAdapter::of(&words).exclude_hashed(stop_words);
    ///
    /// assert_eq!(kept.join(" "), "a c");
    /// ```
    pub fn exclude_hashed<V>(
        self,
        values: impl IntoIterator<Item = V>,
    ) -> SequenceAdapter<Exclude<I, IsInSet<V>>>
    where
        I::Item: Borrow<V>,
        V: Eq + Hash,
    {
        self.excluding(IsInSet::new(values))
    }

    fn excluding<P>(self, predicate: P) -> SequenceAdapter<Exclude<I, P>>
    where
        P: Predicate<I::Item>,
    {
        SequenceAdapter {
            values: Exclude::new(self.values, predicate),
        }
    }
}

impl<I, T> SequenceAdapter<I>
where
    I: Iterator<Item = Option<T>>,
{
    /// Drops absent elements and unwraps the present ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let present = seq![Some(1), None, Some(3), None].not_nulls();
    ///
    /// assert_eq!(present.to_list(), [1, 3]);
    /// ```
    #[inline]
    pub fn not_nulls(self) -> SequenceAdapter<Flatten<I>> {
        SequenceAdapter {
            values: self.values.flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::{SequenceAdapter, predicate, seq};

    #[test]
    fn only_and_filter_agree() {
        let numbers = seq![5, 8, 1, 9, 4];

        assert_eq!(numbers.clone().only(|n| *n > 4).to_list(), [5, 8, 9]);
        assert_eq!(numbers.filter(|n| *n > 4).to_list(), [5, 8, 9]);
    }

    #[test]
    fn filtering_is_lazy_and_recomputed() {
        let calls = Cell::new(0);
        let evens = seq![1, 2, 3, 4].only(|n| {
            calls.set(calls.get() + 1);
            n % 2 == 0
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(evens.size(), 2);
        assert_eq!(calls.get(), 4);
        assert_eq!(evens.size(), 2);
        assert_eq!(calls.get(), 8);
    }

    #[test]
    fn exclude_values_over_borrowed_items() {
        let owned = vec![String::from("a"), String::from("b"), String::from("c")];
        let b = String::from("b");
        let kept = SequenceAdapter::of(&owned).exclude_values([&b]);

        assert_eq!(kept.join(""), "ac");
    }

    #[test]
    fn combinators_plug_into_filters() {
        let pets = seq![("tom", 'c'), ("rex", 'd'), ("kit", 'c')];
        let is_cat = predicate::key_eq(|pet: &(&str, char)| pet.1, 'c');

        assert_eq!(pets.clone().only(is_cat.clone()).size(), 2);
        assert_eq!(pets.exclude(is_cat).first(), Ok(("rex", 'd')));
    }

    #[test]
    fn not_nulls_on_empty_and_all_none() {
        assert!(seq![None::<i32>, None].not_nulls().is_empty());
        assert!(SequenceAdapter::of(Vec::<Option<i32>>::new()).not_nulls().is_empty());
    }

    proptest! {
        #[test]
        fn only_and_exclude_partition(
            nums in propvec(any::<i16>(), ..32),
            modulus in 1..5_i16,
        ) {
            only_and_exclude_partition_impl(nums, modulus)?;
        }
    }

    fn only_and_exclude_partition_impl(nums: Vec<i16>, modulus: i16) -> TestCaseResult {
        let divisible = move |n: &i16| n % modulus == 0;
        let all = SequenceAdapter::of(nums.clone());

        let kept = all.clone().only(divisible);
        let dropped = all.clone().exclude(divisible);

        let expected_kept: Vec<_> = nums.iter().copied().filter(divisible).collect();
        let expected_dropped: Vec<_> = nums.iter().copied().filter(|n| !divisible(n)).collect();
        prop_assert_eq!(kept.to_list(), expected_kept);
        prop_assert_eq!(dropped.to_list(), expected_dropped);

        prop_assert!(kept.clone().exclude(divisible).is_empty());

        let kept_values = kept.to_list();
        prop_assert_eq!(
            all.clone().exclude_hashed(kept_values.iter().copied()),
            all.clone().exclude_values(kept_values)
        );

        let mut rejoined = kept.concat(dropped).to_list();
        let mut original = nums;
        rejoined.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(rejoined, original);

        Ok(())
    }
}
