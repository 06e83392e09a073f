use std::{cell::RefCell, fmt::Debug, rc::Rc};

/// A shared handle to a single-pass iterator.
///
/// Cloning the handle does not clone the iterator: every clone pulls from
/// the same underlying iterator. A [`SequenceAdapter`] built on it can still
/// be traversed several times, but each traversal only sees the items no
/// earlier traversal has consumed.
///
/// This struct is created by [`SequenceAdapter::once`].
///
/// [`SequenceAdapter`]: crate::SequenceAdapter
/// [`SequenceAdapter::once`]: crate::SequenceAdapter::once
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct OnePass<I> {
    iter: Rc<RefCell<I>>,
}

impl<I> OnePass<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter: Rc::new(RefCell::new(iter)),
        }
    }
}

impl<I> Clone for OnePass<I> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            iter: Rc::clone(&self.iter),
        }
    }
}

impl<I: Iterator> Iterator for OnePass<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.borrow_mut().next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.borrow().size_hint()
    }
}

impl<I: Debug> Debug for OnePass<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnePass").field("iter", &self.iter).finish()
    }
}
