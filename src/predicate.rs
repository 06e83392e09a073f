//! Predicate combinators.
//!
//! A predicate is any `Fn(&T) -> bool`. The functions here build predicates
//! out of key extractors and other predicates. Everything they return is
//! [`Clone`] as long as what it captures is, so the result can be handed to
//! [`only`](crate::SequenceAdapter::only) or
//! [`exclude`](crate::SequenceAdapter::exclude) without making the adapter
//! single-pass, and can be reused across adapters.

use std::{
    borrow::Borrow,
    collections::HashSet,
    fmt::Debug,
    hash::Hash,
};

/// A test over elements of type `T`.
///
/// Implemented for every `FnMut(&T) -> bool` and for [`IsIn`], which is what
/// lets [`Exclude`](crate::Exclude) share one code path between predicate
/// and value exclusion.
pub trait Predicate<T> {
    /// Returns whether `item` passes the test.
    fn test(&mut self, item: &T) -> bool;
}

impl<F, T> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

/// Membership in a fixed list of values, by [`PartialEq`].
///
/// Each test scans the list, so testing against `m` values costs `O(m)`.
/// [`IsInSet`] answers in constant time for hashable values.
#[derive(Clone)]
pub struct IsIn<V> {
    values: Vec<V>,
}

impl<V> IsIn<V> {
    pub(crate) fn new(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    #[inline]
    fn contains<T: PartialEq<V>>(&self, item: &T) -> bool {
        self.values.iter().any(|value| item == value)
    }
}

impl<T, V> Predicate<T> for IsIn<V>
where
    T: PartialEq<V>,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<V: Debug> Debug for IsIn<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IsIn").field("values", &self.values).finish()
    }
}

/// Membership in a fixed set of values, by [`Hash`] and [`Eq`].
///
/// An element is tested through its [`Borrow`] view of the value type, so
/// borrowed elements (`&V`) test against owned values (`V`).
#[derive(Clone)]
pub struct IsInSet<V> {
    values: HashSet<V>,
}

impl<V: Eq + Hash> IsInSet<V> {
    pub(crate) fn new(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl<T, V> Predicate<T> for IsInSet<V>
where
    T: Borrow<V>,
    V: Eq + Hash,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self.values.contains(item.borrow())
    }
}

impl<V: Debug> Debug for IsInSet<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IsInSet").field("values", &self.values).finish()
    }
}

/// Tests `condition` against the key `key` projects an element to.
///
/// # Examples
///
/// ```
/// use fluent_seq::{predicate, seq};
///
/// let long = predicate::by_key(|s: &&str| s.len(), |len: &usize| *len > 2);
///
/// assert_eq!(seq!["a", "abc", "abcd"].only(&long).to_list(), ["abc", "abcd"]);
/// assert!(!long(&"ab"));
/// ```
pub fn by_key<T, K, F, P>(key: F, condition: P) -> impl Fn(&T) -> bool + Clone
where
    F: Fn(&T) -> K + Clone,
    P: Fn(&K) -> bool + Clone,
{
    move |item: &T| condition(&key(item))
}

/// Tests whether the key `key` projects an element to equals `value`.
///
/// # Examples
///
/// ```
/// use fluent_seq::{predicate, seq};
///
/// let is_cat = predicate::key_eq(|pet: &(&str, char)| pet.1, 'c');
///
/// let cats = seq![("tom", 'c'), ("rex", 'd'), ("kit", 'c')].only(is_cat);
///
/// assert_eq!(cats.map(|(name, _)| name).to_list(), ["tom", "kit"]);
/// ```
pub fn key_eq<T, K, F>(key: F, value: K) -> impl Fn(&T) -> bool + Clone
where
    K: PartialEq + Clone,
    F: Fn(&T) -> K + Clone,
{
    by_key(key, move |candidate: &K| *candidate == value)
}

/// Negates a predicate.
///
/// # Examples
///
/// ```
/// use fluent_seq::predicate;
///
/// let odd = predicate::not(|n: &i32| n % 2 == 0);
///
/// assert!(odd(&3));
/// assert!(!odd(&4));
/// ```
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool + Clone
where
    P: Fn(&T) -> bool + Clone,
{
    move |item: &T| !predicate(item)
}

/// Tests whether an element equals any of `values`.
///
/// Each test scans `values`; see [`IsInSet`] for a hashed alternative.
///
/// # Examples
///
/// ```
/// use fluent_seq::{predicate, seq};
///
/// let vowel = predicate::is_in(['a', 'e', 'i', 'o', 'u']);
///
/// assert_eq!(seq!['h', 'e', 'l', 'l', 'o'].count(vowel), 2);
/// ```
pub fn is_in<T>(values: impl IntoIterator<Item = T>) -> impl Fn(&T) -> bool + Clone
where
    T: PartialEq + Clone,
{
    let values = IsIn::new(values);
    move |item: &T| values.contains(item)
}

#[cfg(test)]
mod tests {
    use super::{IsIn, IsInSet, Predicate, by_key, is_in, key_eq, not};

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: &'static str,
        age: u32,
    }

    const ALICE: Person = Person {
        name: "alice",
        age: 31,
    };
    const BOB: Person = Person {
        name: "bob",
        age: 27,
    };

    #[test]
    fn by_key_projects_before_testing() {
        let adult_over_30 = by_key(|p: &Person| p.age, |age: &u32| *age > 30);

        assert!(adult_over_30(&ALICE));
        assert!(!adult_over_30(&BOB));

        // Reusable after cloning.
        let copy = adult_over_30.clone();
        assert!(copy(&ALICE));
    }

    #[test]
    fn key_eq_compares_projection() {
        let is_bob = key_eq(|p: &Person| p.name, "bob");

        assert!(is_bob(&BOB));
        assert!(!is_bob(&ALICE));
    }

    #[test]
    fn not_and_is_in() {
        let not_bob = not(key_eq(|p: &Person| p.name, "bob"));
        assert!(not_bob(&ALICE));
        assert!(!not_bob(&BOB));

        let small = is_in([1, 2, 3]);
        assert!(small(&2));
        assert!(!small(&4));
    }

    #[test]
    fn is_in_uses_cross_type_equality() {
        let mut names = IsIn::new(["alice", "carol"]);

        assert!(names.test(&String::from("alice")));
        assert!(!names.test(&String::from("bob")));
    }

    #[test]
    fn is_in_set_tests_through_borrow() {
        let mut owned = IsInSet::new([String::from("alice"), String::from("carol")]);
        let alice = String::from("alice");
        let bob = String::from("bob");

        assert!(owned.test(&&alice));
        assert!(!owned.test(&&bob));
        assert!(owned.test(&alice));

        let mut ages = IsInSet::new([27_u32, 31]);
        assert!(ages.test(&ALICE.age));
        assert!(!ages.test(&40_u32));
    }

    #[test]
    fn closures_are_predicates() {
        let mut even = |n: &i32| n % 2 == 0;

        assert!(Predicate::test(&mut even, &2));
        assert!(!Predicate::test(&mut even, &3));
    }
}
