use std::{collections::HashMap, hash::Hash};

use indexmap::IndexMap;

use crate::SequenceAdapter;

impl<I> SequenceAdapter<I>
where
    I: Iterator + Clone,
{
    /// Groups the elements by the key `key` projects them to.
    ///
    /// Keys iterate in the order they are first seen, and each group keeps
    /// its elements in sequence order, so concatenating the groups yields
    /// every element exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let parity = seq![1, 2, 2, 3].group_by(|x| x % 2);
    ///
    /// assert_eq!(parity.keys().collect::<Vec<_>>(), [&1, &0]);
    /// assert_eq!(parity[&1], [1, 3]);
    /// assert_eq!(parity[&0], [2, 2]);
    /// ```
    pub fn group_by<K, F>(&self, mut key: F) -> IndexMap<K, Vec<I::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        let mut groups: IndexMap<K, Vec<I::Item>> = IndexMap::new();
        for item in self.iter() {
            groups.entry(key(&item)).or_default().push(item);
        }
        groups
    }

    /// Maps the key `key` projects each element to onto that element.
    ///
    /// When several elements share a key, the last one wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::seq;
    ///
    /// let by_initial = seq!["apple", "avocado", "banana"].index_by(|s| s.as_bytes()[0]);
    ///
    /// assert_eq!(by_initial[&b'a'], "avocado");
    /// assert_eq!(by_initial[&b'b'], "banana");
    /// ```
    pub fn index_by<K, F>(&self, mut key: F) -> HashMap<K, I::Item>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        self.iter().map(|item| (key(&item), item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::{SequenceAdapter, seq};

    #[test]
    fn group_by_on_empty() {
        let groups = SequenceAdapter::of(Vec::<i32>::new()).group_by(|n| *n);
        assert!(groups.is_empty());
    }

    #[test]
    fn index_by_keeps_last() {
        let pairs = seq![("a", 1), ("b", 2), ("a", 3)];
        let index = pairs.index_by(|pair| pair.0);

        assert_eq!(index.len(), 2);
        assert_eq!(index["a"], ("a", 3));
        assert_eq!(index["b"], ("b", 2));
    }

    proptest! {
        #[test]
        fn groups_partition_the_sequence(
            nums in propvec(0..20_u8, ..40),
            buckets in 1..6_u8,
        ) {
            groups_partition_the_sequence_impl(nums, buckets)?;
        }
    }

    fn groups_partition_the_sequence_impl(nums: Vec<u8>, buckets: u8) -> TestCaseResult {
        let bucket = move |n: &u8| n % buckets;
        let adapter = SequenceAdapter::of(nums.clone());
        let groups = adapter.group_by(bucket);

        // Keys in first-seen order.
        let mut first_seen: Vec<u8> = Vec::new();
        for n in &nums {
            if !first_seen.contains(&bucket(n)) {
                first_seen.push(bucket(n));
            }
        }
        prop_assert_eq!(groups.keys().copied().collect::<Vec<_>>(), first_seen);

        // Each group is the sequence filtered to its key.
        for (key, group) in &groups {
            let expected = adapter.clone().only(|n| bucket(n) == *key).to_list();
            prop_assert_eq!(group, &expected);
        }

        prop_assert_eq!(groups.values().map(Vec::len).sum::<usize>(), nums.len());

        Ok(())
    }
}
