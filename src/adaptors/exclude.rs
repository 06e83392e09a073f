use std::{fmt::Debug, iter::FusedIterator};

use crate::predicate::Predicate;

/// An iterator that yields only the items its predicate rejects.
///
/// This struct is created by [`SequenceAdapter::exclude`] and
/// [`SequenceAdapter::exclude_values`].
///
/// [`SequenceAdapter::exclude`]: crate::SequenceAdapter::exclude
/// [`SequenceAdapter::exclude_values`]: crate::SequenceAdapter::exclude_values
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Exclude<I, P> {
    iter: I,
    pred: P,
}

impl<I, P> Exclude<I, P> {
    pub(crate) fn new(iter: I, pred: P) -> Self {
        Self { iter, pred }
    }
}

impl<I, P> Iterator for Exclude<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let pred = &mut self.pred;
        self.iter.find(|item| !pred.test(item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }

    fn count(self) -> usize {
        let mut pred = self.pred;
        self.iter.filter(|item| !pred.test(item)).count()
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut pred = self.pred;
        self.iter.fold(init, move |accum, item| {
            if pred.test(&item) {
                accum
            } else {
                f(accum, item)
            }
        })
    }
}

impl<I, P> FusedIterator for Exclude<I, P>
where
    I: FusedIterator,
    P: Predicate<I::Item>,
{
}

impl<I: Debug, P> Debug for Exclude<I, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exclude").field("iter", &self.iter).finish()
    }
}
