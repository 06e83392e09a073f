/// Builds a [`SequenceAdapter`](crate::SequenceAdapter) over the listed
/// values, in order.
///
/// The values are stored once and shared by every traversal, as with
/// [`SequenceAdapter::from_vec`](crate::SequenceAdapter::from_vec).
///
/// With no values it builds an empty adapter, whose element type is left to
/// inference.
///
/// # Examples
///
/// ```
/// use fluent_seq::seq;
///
/// let digits = seq![3, 1, 2];
/// assert_eq!(digits.sorted().to_list(), [1, 2, 3]);
///
/// let nothing = seq![];
/// assert_eq!(nothing.first_or_default('?'), '?');
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::SequenceAdapter::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::SequenceAdapter::from_vec(::std::vec![$($value),+])
    };
}
