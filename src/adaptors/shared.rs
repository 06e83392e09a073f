use std::{fmt::Debug, iter::FusedIterator, sync::Arc};

/// An iterator over a reference-counted slice that clones items only as it
/// yields them.
///
/// Cloning the iterator shares the slice and copies two indices, so an
/// owning [`SequenceAdapter`] built on it can start a new traversal without
/// copying its elements.
///
/// This struct is created by [`SequenceAdapter::from_vec`], the [`From`] and
/// [`FromIterator`] impls of [`SequenceAdapter`], and [`seq!`](crate::seq).
///
/// [`SequenceAdapter`]: crate::SequenceAdapter
/// [`SequenceAdapter::from_vec`]: crate::SequenceAdapter::from_vec
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Shared<T> {
    items: Arc<[T]>,
    front: usize,
    back: usize,
}

impl<T> Shared<T> {
    pub(crate) fn new(items: Arc<[T]>) -> Self {
        let back = items.len();
        Self {
            items,
            front: 0,
            back,
        }
    }

    /// The items not yielded yet.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items[self.front..self.back]
    }
}

impl<T> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: Clone> Iterator for Shared<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.items[self.front].clone();
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.back.min(self.front.saturating_add(n));
        self.next()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T: Clone> DoubleEndedIterator for Shared<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.items[self.back].clone())
    }
}

impl<T: Clone> ExactSizeIterator for Shared<T> {}

impl<T: Clone> FusedIterator for Shared<T> {}

impl<T: Debug> Debug for Shared<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Shared").field(&self.as_slice()).finish()
    }
}
