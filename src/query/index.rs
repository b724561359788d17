//! Positional and quantified lookups.

use std::borrow::Borrow;

/// Returns the index of the first element equal to `value`, or the number of elements if
/// there is none.
///
/// The "not found" result is one past the last valid index, never a sentinel.
///
/// # Examples
///
/// ```rust
/// use container_utils::index_of;
///
/// let v = vec![0, 1, 2, 3, 4, 5];
/// assert_eq!(index_of(&v, &2), 2);
/// assert_eq!(index_of(&v, &6), 6);
/// ```
pub fn index_of<'a, I, T, Q>(source: I, value: &Q) -> usize
where
    I: IntoIterator<Item = &'a T>,
    T: Borrow<Q> + 'a,
    Q: PartialEq + ?Sized,
{
    index_of_by(source, |item| <T as Borrow<Q>>::borrow(item) == value)
}

/// Returns the index of the first element satisfying `predicate`, or the number of
/// elements if there is none.
///
/// ```rust
/// use container_utils::index_of_by;
///
/// let v = vec![10, 11, 12];
/// assert_eq!(index_of_by(&v, |&x| x > 10), 1);
/// assert_eq!(index_of_by(&v, |&x| x > 99), 3);
/// ```
pub fn index_of_by<I, P>(source: I, mut predicate: P) -> usize
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    let mut index = 0;
    for item in source {
        if predicate(item) {
            return index;
        }
        index += 1;
    }
    index
}

/// Returns `true` if every element satisfies `predicate` (vacuously `true` when empty).
pub fn all_of<I, P>(source: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    source.into_iter().all(predicate)
}

/// Returns `true` if at least one element satisfies `predicate`.
pub fn any_of<I, P>(source: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    source.into_iter().any(predicate)
}
