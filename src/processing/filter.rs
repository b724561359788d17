//! Element filtering over any [`crate::source::Source`].

use crate::source::Source;

/// Returns a new `Vec` containing the elements of `source` for which `predicate` returns `true`.
///
/// Relative order is preserved and `predicate` runs exactly once per element, in iteration
/// order. Owned sources move their elements into the output; borrowed sources clone the
/// accepted elements and stay untouched.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use container_utils::filter;
///
/// let s = BTreeSet::from([5, 0, 3, 2, 4, 1]);
/// assert_eq!(filter(&s, |i| i % 2 == 0), vec![0, 2, 4]);
/// ```
pub fn filter<S, P>(source: S, predicate: P) -> Vec<S::Item>
where
    S: Source,
    P: FnMut(&S::Item) -> bool,
{
    source.select(predicate)
}
