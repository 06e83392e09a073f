use std::{iter::Empty, sync::Arc};

use crate::{OnePass, SequenceAdapter, Shared};

impl<I: Iterator> SequenceAdapter<I> {
    /// Wraps any iterable.
    ///
    /// Wrapping an adapter again returns an adapter over the same sequence,
    /// never a nested one.
    ///
    /// Each traversal clones the iterator `values` turns into. That is free
    /// for borrowed collections and lazy chains, but for an owned `Vec` it
    /// copies every element. Build owning adapters with
    /// [`from_vec`](SequenceAdapter::from_vec), `collect` or
    /// [`seq!`](crate::seq) instead, which share one buffer between
    /// traversals.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::SequenceAdapter;
    ///
    /// let numbers = vec![1, 2, 3];
    ///
    /// let borrowed = SequenceAdapter::of(&numbers);
    /// assert_eq!(borrowed.first(), Ok(&1));
    ///
    /// let rewrapped = SequenceAdapter::of(borrowed);
    /// assert_eq!(rewrapped.size(), 3);
    /// ```
    #[inline]
    pub fn of<S>(values: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            values: values.into_iter(),
        }
    }

    /// Returns a fresh traversal of the sequence.
    #[inline]
    pub fn iter(&self) -> I
    where
        I: Clone,
    {
        self.values.clone()
    }
}

impl<I: Iterator> SequenceAdapter<OnePass<I>> {
    /// Wraps a source that can only be traversed once, such as a channel
    /// receiver or a non-[`Clone`] iterator.
    ///
    /// The resulting adapter supports every operation, but all traversals
    /// share the one underlying iterator: items consumed by one traversal are
    /// gone for the next. Even [`is_empty`](SequenceAdapter::is_empty)
    /// consumes the item it peeks at, unless the source reports its length.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::SequenceAdapter;
    ///
    /// let lines = SequenceAdapter::once("a\nb\nc".lines().map(String::from));
    ///
    /// assert_eq!(lines.first().as_deref(), Ok("a"));
    /// assert_eq!(lines.to_list(), ["b", "c"]);
    /// assert!(lines.is_empty());
    /// ```
    pub fn once<S>(values: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            values: OnePass::new(values.into_iter()),
        }
    }
}

impl<T> SequenceAdapter<Empty<T>> {
    /// Creates an adapter over no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::{Error, SequenceAdapter};
    ///
    /// let nothing = SequenceAdapter::<std::iter::Empty<i32>>::empty();
    ///
    /// assert!(nothing.is_empty());
    /// assert_eq!(nothing.first(), Err(Error::EmptyCollection));
    /// assert_eq!(nothing.first_or_default(-1), -1);
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self {
            values: std::iter::empty(),
        }
    }
}

impl<T> Default for SequenceAdapter<Empty<T>> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> SequenceAdapter<Shared<T>> {
    /// Takes ownership of `values` and shares them between traversals.
    ///
    /// A traversal clones only the elements it actually reaches, so
    /// [`first`](SequenceAdapter::first) clones one element and
    /// [`size`](SequenceAdapter::size) clones none.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_seq::SequenceAdapter;
    ///
    /// let names = SequenceAdapter::from_vec(vec![String::from("ann"), String::from("bo")]);
    ///
    /// assert_eq!(names.first().as_deref(), Ok("ann"));
    /// assert_eq!(names.size(), 2);
    /// ```
    #[inline]
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from(Arc::<[T]>::from(values))
    }
}

impl<T> From<Arc<[T]>> for SequenceAdapter<Shared<T>> {
    #[inline]
    fn from(values: Arc<[T]>) -> Self {
        Self {
            values: Shared::new(values),
        }
    }
}

impl<T> From<Vec<T>> for SequenceAdapter<Shared<T>> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T, const N: usize> From<[T; N]> for SequenceAdapter<Shared<T>> {
    #[inline]
    fn from(values: [T; N]) -> Self {
        Self::from(Arc::<[T]>::from(values))
    }
}

impl<T> FromIterator<T> for SequenceAdapter<Shared<T>> {
    fn from_iter<S: IntoIterator<Item = T>>(iter: S) -> Self {
        Self::from(iter.into_iter().collect::<Arc<[T]>>())
    }
}

impl<I: Iterator> IntoIterator for SequenceAdapter<I> {
    type Item = I::Item;
    type IntoIter = I;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values
    }
}

impl<I> IntoIterator for &SequenceAdapter<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;
    type IntoIter = I;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
