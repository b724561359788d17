//! Element mapping: `transform`, same-shape transforms and element-wise casts.

use num_traits::AsPrimitive;

use crate::source::{Reshape, Source};

/// Returns a new `Vec` by applying `f` to every element of `source`, in iteration order.
///
/// Owned sources hand each element to `f` by value, so `f` may consume it. Borrowed sources
/// hand `f` a clone and leave the container untouched. `f` runs exactly once per element.
///
/// # Examples
///
/// ```rust
/// use container_utils::transform;
///
/// let names = vec![String::from("ada"), String::from("grace")];
/// let lens = transform(&names, |s| s.len());
/// assert_eq!(lens, vec![3, 5]);
///
/// // Consuming: each `String` is moved into the closure.
/// let upper = transform(names, |mut s| {
///     s.make_ascii_uppercase();
///     s
/// });
/// assert_eq!(upper, ["ADA", "GRACE"]);
/// ```
pub fn transform<S, U, F>(source: S, f: F) -> Vec<U>
where
    S: Source,
    F: FnMut(S::Item) -> U,
{
    source.into_elements().map(f).collect()
}

/// Like [`transform`], but for functions that keep the element type, collecting into the
/// source's own container type.
///
/// A `BTreeSet<T>` source yields a `BTreeSet<T>`, a `&VecDeque<T>` source yields a
/// `VecDeque<T>`, and so on.
///
/// ```rust
/// use std::collections::BTreeSet;
/// use container_utils::transform_same;
///
/// let s = BTreeSet::from([1, 2, 3]);
/// let negated: BTreeSet<i32> = transform_same(&s, |i| -i);
/// assert_eq!(negated.into_iter().collect::<Vec<_>>(), vec![-3, -2, -1]);
/// ```
pub fn transform_same<S, F>(source: S, f: F) -> S::Container
where
    S: Source,
    S::Container: FromIterator<S::Item>,
    F: FnMut(S::Item) -> S::Item,
{
    source.into_elements().map(f).collect()
}

/// Converts every element with a primitive `as` cast, preserving the container shape
/// where possible (see [`Reshape`]).
///
/// ```rust
/// use container_utils::static_cast_all;
///
/// let ints: [i32; 3] = static_cast_all([0.0_f64, 1.9, 2.2]);
/// assert_eq!(ints, [0, 1, 2]);
///
/// let v = vec![1_u8, 255];
/// let wide: Vec<u32> = static_cast_all(&v);
/// assert_eq!(wide, vec![1, 255]);
/// ```
pub fn static_cast_all<U, S>(source: S) -> S::Rebind<U>
where
    S: Reshape,
    S::Item: AsPrimitive<U>,
    U: Copy + 'static,
{
    source.reshape(|item| item.as_())
}

/// Converts every element with [`Into`], preserving the container shape where possible.
pub fn convert_all<U, S>(source: S) -> S::Rebind<U>
where
    S: Reshape,
    S::Item: Into<U>,
{
    source.reshape(Into::into)
}

#[cfg(test)]
mod tests {
    use super::{convert_all, static_cast_all, transform, transform_same};
    use std::collections::{BTreeSet, LinkedList, VecDeque};

    #[derive(Debug, PartialEq)]
    struct MoveOnly(Box<i32>);

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct CopyOnly(i32);

    #[derive(Debug, PartialEq)]
    struct Meters(f64);

    impl From<f64> for Meters {
        fn from(v: f64) -> Self {
            Meters(v)
        }
    }

    #[test]
    fn transform_consumes_move_only_elements() {
        let input: Vec<MoveOnly> = (0..4).map(|i| MoveOnly(Box::new(i))).collect();
        let out = transform(input, |m| {
            let v = f64::from(*m.0);
            v * v
        });
        assert_eq!(out, vec![0.0, 1.0, 4.0, 9.0]);
    }

    #[test]
    fn transform_can_produce_move_only_elements() {
        let out = transform(vec![0, 1, 2, 3], |i| MoveOnly(Box::new(i)));
        for (i, m) in out.iter().enumerate() {
            assert_eq!(*m.0, i as i32);
        }
    }

    #[test]
    fn transform_borrowed_leaves_source_intact() {
        let input = vec![CopyOnly(0), CopyOnly(1), CopyOnly(2)];
        let out = transform(&input, |c| c.0);
        assert_eq!(out, vec![0, 1, 2]);
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn transform_runs_once_per_element_in_order() {
        let list: LinkedList<i32> = (0..4).collect();
        let mut calls = Vec::new();
        let _ = transform(&list, |i| {
            calls.push(i);
            i
        });
        assert_eq!(calls, vec![0, 1, 2, 3]);
    }

    #[test]
    fn transform_same_keeps_container_type() {
        let dq: VecDeque<i32> = (1..=3).collect();
        let doubled: VecDeque<i32> = transform_same(&dq, |i| i * 2);
        assert_eq!(doubled, VecDeque::from([2, 4, 6]));

        let s: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
        let same: BTreeSet<i32> = transform_same(s, |i| i % 2);
        assert_eq!(same.into_iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn static_cast_all_preserves_shapes() {
        let v = vec![0.0_f64, 1.0, 2.0];
        let ints: Vec<i32> = static_cast_all(&v);
        assert_eq!(ints, vec![0, 1, 2]);

        let dq = VecDeque::from([0.0_f64, 1.0, 2.0]);
        let dq_ints: VecDeque<i32> = static_cast_all(dq);
        assert_eq!(dq_ints, VecDeque::from([0, 1, 2]));

        let arr = [0.0_f64, 1.0, 2.0];
        let arr_ints: [i32; 3] = static_cast_all(&arr);
        assert_eq!(arr_ints, [0, 1, 2]);
    }

    #[test]
    fn static_cast_all_set_falls_back_to_vec() {
        let s: BTreeSet<u16> = [300, 1, 2].into_iter().collect();
        let bytes: Vec<u8> = static_cast_all(&s);
        assert_eq!(bytes, vec![1, 2, 44]);
    }

    #[test]
    fn convert_all_uses_from_conversions() {
        let arr = [1.5_f64, 2.5];
        let out: [Meters; 2] = convert_all(arr);
        assert_eq!(out, [Meters(1.5), Meters(2.5)]);
    }
}
