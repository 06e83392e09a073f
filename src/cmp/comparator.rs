use std::cmp::Ordering;

/// Comparator acting as an `FnMut(&T, &T) -> Ordering`
/// for internal implementation.
pub trait Comparator<T> {
    fn cmp(&mut self, a: &T, b: &T) -> Ordering;

    fn lt(&mut self, a: &T, b: &T) -> bool {
        self.cmp(a, b).is_lt()
    }

    fn gt(&mut self, a: &T, b: &T) -> bool {
        self.cmp(a, b).is_gt()
    }

    /// Only a strictly greater `value` replaces `max`, so the earliest of
    /// several greatest elements is kept.
    fn max_assign(&mut self, max: &mut T, value: T) {
        if self.gt(&value, max) {
            *max = value;
        }
    }

    /// Only a strictly smaller `value` replaces `min`, so the earliest of
    /// several least elements is kept.
    fn min_assign(&mut self, min: &mut T, value: T) {
        if self.lt(&value, min) {
            *min = value;
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrdComparator;

impl<T> Comparator<T> for OrdComparator
where
    T: Ord,
{
    #[inline]
    fn cmp(&mut self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn lt(&mut self, a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn gt(&mut self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<F, T> Comparator<T> for F
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn cmp(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// A comparator that only looks at the key half of a `(key, value)` pair.
///
/// Lets key-based extremes compute each key once instead of once per comparison.
#[derive(Debug, Clone, Copy)]
pub struct KeyComparator<C>(pub C);

impl<K, V, C> Comparator<(K, V)> for KeyComparator<C>
where
    C: Comparator<K>,
{
    #[inline]
    fn cmp(&mut self, (a, _): &(K, V), (b, _): &(K, V)) -> Ordering {
        self.0.cmp(a, b)
    }
}
