//! Membership tests that prefer a container's native lookup over a linear scan.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::multiset::Multiset;

/// How a [`Membership`] implementation answers a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A native boolean membership test (hashed or ordered lookup).
    NativeContains,
    /// A native count of matching elements, tested for non-zero.
    NativeCount,
    /// A linear equality scan over all elements.
    LinearScan,
}

/// Containers that can answer "is `value` present?".
///
/// Implementations use the best capability the container has, in this order of
/// preference: a native membership test, a native count, then a linear scan. The chosen
/// capability is reported through [`Membership::STRATEGY`].
///
/// User types with their own lookup implement this trait to have [`contains`] use it:
///
/// ```rust
/// use container_utils::query::{contains, Membership, Strategy};
///
/// struct Evens;
///
/// impl Membership<u32> for Evens {
///     const STRATEGY: Strategy = Strategy::NativeContains;
///
///     fn has(&self, value: &u32) -> bool {
///         value % 2 == 0
///     }
/// }
///
/// assert!(contains(&Evens, &4));
/// assert!(!contains(&Evens, &5));
/// ```
pub trait Membership<Q: ?Sized> {
    /// Capability used to answer lookups.
    const STRATEGY: Strategy;

    /// Returns `true` if an element equal to `value` is present.
    fn has(&self, value: &Q) -> bool;
}

/// Returns `true` if `container` holds an element equal to `value`.
///
/// Dispatch is static: sets and maps answer with their native lookup, [`Multiset`] with
/// its native count, and plain sequences with a linear scan.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use container_utils::contains;
///
/// let s = BTreeSet::from([0, 1, 2, 3]);
/// assert!(contains(&s, &0));
/// assert!(!contains(&s, &-1));
///
/// let v = vec![String::from("a"), String::from("b")];
/// assert!(contains(&v, "b"));
/// ```
pub fn contains<C, Q>(container: &C, value: &Q) -> bool
where
    C: Membership<Q> + ?Sized,
    Q: ?Sized,
{
    container.has(value)
}

/// Linear equality scan over any iterable; the fallback every sequence uses.
pub fn scan_contains<'a, I, T, Q>(iter: I, value: &Q) -> bool
where
    I: IntoIterator<Item = &'a T>,
    T: Borrow<Q> + 'a,
    Q: PartialEq + ?Sized,
{
    iter.into_iter()
        .any(|item| <T as Borrow<Q>>::borrow(item) == value)
}

impl<T, Q> Membership<Q> for BTreeSet<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    const STRATEGY: Strategy = Strategy::NativeContains;

    fn has(&self, value: &Q) -> bool {
        self.contains(value)
    }
}

impl<T, Q, S> Membership<Q> for HashSet<T, S>
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    const STRATEGY: Strategy = Strategy::NativeContains;

    fn has(&self, value: &Q) -> bool {
        self.contains(value)
    }
}

impl<K, V, Q> Membership<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    const STRATEGY: Strategy = Strategy::NativeContains;

    fn has(&self, value: &Q) -> bool {
        self.contains_key(value)
    }
}

impl<K, V, Q, S> Membership<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    const STRATEGY: Strategy = Strategy::NativeContains;

    fn has(&self, value: &Q) -> bool {
        self.contains_key(value)
    }
}

/// Containers whose native lookup is a count of the elements equal to a value.
pub trait CountLookup<Q: ?Sized> {
    fn count_of(&self, value: &Q) -> usize;
}

/// Answers [`Membership`] through a container's [`CountLookup`], testing the count for
/// non-zero.
///
/// ```rust
/// use container_utils::query::{contains, ByCount, CountLookup};
///
/// struct Histogram([usize; 4]);
///
/// impl CountLookup<usize> for Histogram {
///     fn count_of(&self, bucket: &usize) -> usize {
///         self.0.get(*bucket).copied().unwrap_or(0)
///     }
/// }
///
/// let h = Histogram([0, 3, 0, 1]);
/// assert!(contains(&ByCount(&h), &1));
/// assert!(!contains(&ByCount(&h), &2));
/// ```
#[derive(Debug)]
pub struct ByCount<'a, C: ?Sized>(pub &'a C);

impl<C, Q> Membership<Q> for ByCount<'_, C>
where
    C: CountLookup<Q> + ?Sized,
    Q: ?Sized,
{
    const STRATEGY: Strategy = Strategy::NativeCount;

    fn has(&self, value: &Q) -> bool {
        self.0.count_of(value) != 0
    }
}

impl<T, Q> CountLookup<Q> for Multiset<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn count_of(&self, value: &Q) -> usize {
        self.count(value)
    }
}

impl<T, Q> Membership<Q> for Multiset<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    const STRATEGY: Strategy = Strategy::NativeCount;

    fn has(&self, value: &Q) -> bool {
        ByCount(self).has(value)
    }
}

impl<T, Q> Membership<Q> for [T]
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    const STRATEGY: Strategy = Strategy::LinearScan;

    fn has(&self, value: &Q) -> bool {
        scan_contains(self, value)
    }
}

impl<T, Q, const N: usize> Membership<Q> for [T; N]
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    const STRATEGY: Strategy = Strategy::LinearScan;

    fn has(&self, value: &Q) -> bool {
        scan_contains(self, value)
    }
}

impl<T, Q> Membership<Q> for Vec<T>
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    const STRATEGY: Strategy = Strategy::LinearScan;

    fn has(&self, value: &Q) -> bool {
        scan_contains(self, value)
    }
}

impl<T, Q> Membership<Q> for VecDeque<T>
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    const STRATEGY: Strategy = Strategy::LinearScan;

    fn has(&self, value: &Q) -> bool {
        scan_contains(self, value)
    }
}

impl<T, Q> Membership<Q> for LinkedList<T>
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    const STRATEGY: Strategy = Strategy::LinearScan;

    fn has(&self, value: &Q) -> bool {
        scan_contains(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::{contains, scan_contains, ByCount, CountLookup, Membership, Strategy};
    use crate::multiset::Multiset;
    use std::cell::Cell;
    use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

    fn strategy_of<C: Membership<i32>>(_: &C) -> Strategy {
        C::STRATEGY
    }

    #[test]
    fn ordered_and_hashed_sets_use_native_lookup() {
        let s: BTreeSet<i32> = [0, 1, 2, 3].into_iter().collect();
        assert!(contains(&s, &0));
        assert!(!contains(&s, &-1));
        assert_eq!(strategy_of(&s), Strategy::NativeContains);

        let h: HashSet<i32> = [4, 5].into_iter().collect();
        assert!(contains(&h, &5));
        assert_eq!(strategy_of(&h), Strategy::NativeContains);
    }

    #[test]
    fn maps_look_up_keys() {
        let m = BTreeMap::from([(1, "one"), (2, "two")]);
        assert!(contains(&m, &2));
        assert!(!contains(&m, &3));
    }

    #[test]
    fn multiset_uses_native_count() {
        let ms: Multiset<i32> = [1, 1, 2].into_iter().collect();
        assert!(contains(&ms, &1));
        assert!(!contains(&ms, &3));
        assert_eq!(strategy_of(&ms), Strategy::NativeCount);
    }

    #[test]
    fn sequences_scan_linearly() {
        let v = vec![0, 1, 2, 3, 4];
        assert!(contains(&v, &0));
        assert!(!contains(&v, &-1));
        assert_eq!(strategy_of(&v), Strategy::LinearScan);

        let dq: VecDeque<i32> = v.iter().copied().collect();
        assert!(contains(&dq, &4));
        assert!(contains(&v[..], &2));
    }

    #[test]
    fn boxed_elements_compare_by_value() {
        let v: Vec<Box<i32>> = (0..4).map(Box::new).collect();
        assert!(contains(&v, &Box::new(0)));
        assert!(!contains(&v, &Box::new(9)));
        assert!(scan_contains(&v, &Box::new(3)));
    }

    struct Instrumented {
        items: Vec<i32>,
        native_calls: Cell<usize>,
    }

    impl Instrumented {
        fn contains(&self, value: &i32) -> bool {
            self.native_calls.set(self.native_calls.get() + 1);
            self.items.contains(value)
        }
    }

    impl Membership<i32> for Instrumented {
        const STRATEGY: Strategy = Strategy::NativeContains;

        fn has(&self, value: &i32) -> bool {
            self.contains(value)
        }
    }

    #[test]
    fn user_type_native_method_is_preferred() {
        let w = Instrumented {
            items: vec![0, 1, 2],
            native_calls: Cell::new(0),
        };
        assert!(contains(&w, &0));
        assert!(!contains(&w, &-1));
        assert_eq!(w.native_calls.get(), 2);
    }

    struct CountingStub {
        items: Vec<i32>,
        count_calls: Cell<usize>,
    }

    impl CountLookup<i32> for CountingStub {
        fn count_of(&self, value: &i32) -> usize {
            self.count_calls.set(self.count_calls.get() + 1);
            self.items.iter().filter(|item| *item == value).count()
        }
    }

    #[test]
    fn native_count_is_called_when_no_native_contains() {
        let stub = CountingStub {
            items: vec![0, 1, 1, 2],
            count_calls: Cell::new(0),
        };
        let lookup = ByCount(&stub);
        assert_eq!(strategy_of(&lookup), Strategy::NativeCount);
        assert!(contains(&lookup, &1));
        assert!(!contains(&lookup, &-1));
        assert_eq!(stub.count_calls.get(), 2);
    }
}
