//! In-place removal: `remove_all` and `remove_duplicates`.

use super::sequence::Sequence;

/// Removes every element equal to `value`, keeping the relative order of the rest.
///
/// Returns the number of removed elements.
///
/// # Examples
///
/// ```rust
/// use container_utils::remove_all;
///
/// let mut v = vec![1, 2, 1, 2, 1];
/// assert_eq!(remove_all(&mut v, &1), 3);
/// assert_eq!(v, vec![2, 2]);
/// ```
pub fn remove_all<S>(seq: &mut S, value: &S::Item) -> usize
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    remove_all_by(seq, |item| item == value)
}

/// Removes every element for which `predicate` returns `true`, keeping the relative order
/// of the rest.
///
/// Survivors are stably partitioned to the front and the tail is truncated. `predicate`
/// runs exactly once per element, in order. Returns the number of removed elements.
pub fn remove_all_by<S, P>(seq: &mut S, mut predicate: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let items = seq.as_mut_slice();
    let len = items.len();
    let mut kept = 0;
    for read in 0..len {
        if !predicate(&items[read]) {
            items.swap(kept, read);
            kept += 1;
        }
    }
    seq.truncate(kept);
    len - kept
}

/// Removes later duplicates of every element, keeping first occurrences in order.
///
/// ```rust
/// use container_utils::remove_duplicates;
///
/// let mut v = vec![0, 1, 0, 1, 2, 2, 2, 3, 2, 2];
/// remove_duplicates(&mut v);
/// assert_eq!(v, vec![0, 1, 2, 3]);
/// ```
pub fn remove_duplicates<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    remove_duplicates_by(seq, |a, b| a == b);
}

/// Removes every element `x` for which `eq(kept, x)` holds against some earlier kept
/// element, preserving the order of the survivors.
///
/// `eq` does not have to be transitive. The first argument is always the earlier element.
/// The result matches erasing, for each surviving index in ascending order, all later
/// elements equal to it.
pub fn remove_duplicates_by<S, F>(seq: &mut S, mut eq: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let items = seq.as_mut_slice();
    let mut kept = 0;
    for read in 0..items.len() {
        let candidate = &items[read];
        let duplicate = items[..kept].iter().any(|survivor| eq(survivor, candidate));
        if !duplicate {
            items.swap(kept, read);
            kept += 1;
        }
    }
    seq.truncate(kept);
}
