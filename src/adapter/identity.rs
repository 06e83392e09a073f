use std::{
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
};

use itertools::Itertools;

use crate::SequenceAdapter;

impl<I> SequenceAdapter<I>
where
    I: Iterator + Clone,
{
    fn elements_eq<U>(&self, other: &[U]) -> bool
    where
        I::Item: PartialEq<U>,
    {
        let mut items = self.iter();
        other
            .iter()
            .all(|expected| items.next().is_some_and(|item| item == *expected))
            && items.next().is_none()
    }
}

impl<I, J> PartialEq<SequenceAdapter<J>> for SequenceAdapter<I>
where
    I: Iterator + Clone,
    J: Iterator + Clone,
    I::Item: PartialEq<J::Item>,
{
    #[inline]
    fn eq(&self, other: &SequenceAdapter<J>) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<I> Eq for SequenceAdapter<I>
where
    I: Iterator + Clone,
    I::Item: Eq,
{
}

impl<I, U> PartialEq<[U]> for SequenceAdapter<I>
where
    I: Iterator + Clone,
    I::Item: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.elements_eq(other)
    }
}

impl<I, U> PartialEq<&[U]> for SequenceAdapter<I>
where
    I: Iterator + Clone,
    I::Item: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.elements_eq(other)
    }
}

impl<I, U, const N: usize> PartialEq<[U; N]> for SequenceAdapter<I>
where
    I: Iterator + Clone,
    I::Item: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.elements_eq(other)
    }
}

impl<I, U> PartialEq<Vec<U>> for SequenceAdapter<I>
where
    I: Iterator + Clone,
    I::Item: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Vec<U>) -> bool {
        self.elements_eq(other)
    }
}

/// Hashes exactly like a [`Vec`] of the same elements.
impl<I> Hash for SequenceAdapter<I>
where
    I: Iterator + Clone,
    I::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_list().hash(state);
    }
}

/// Renders as `[a, b, c]`.
impl<I> Display for SequenceAdapter<I>
where
    I: Iterator + Clone,
    I::Item: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().format(", "))
    }
}

impl<I> Debug for SequenceAdapter<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
