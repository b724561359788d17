//! Concatenation of one or more sources into a dense `Vec`.

use crate::source::Source;

/// Copies or moves every element of `source`, in iteration order, into a new `Vec`.
///
/// This is the primitive a single-source [`merge`] reduces to.
pub fn to_vec<S: Source>(source: S) -> Vec<S::Item> {
    source.into_elements().collect()
}

/// Appends every element of `source` to `out`, in iteration order.
///
/// Both [`merge`] and the [`merge!`](crate::merge!) macro are built on this.
pub fn extend_from<S: Source>(out: &mut Vec<S::Item>, source: S) {
    out.extend(source.into_elements());
}

/// A tuple of [`Source`]s sharing one element type.
///
/// Implemented for tuples of 1 to 12 sources. Every source after the first must produce
/// the first source's `Item`; a mismatch is a type error, not a runtime failure.
pub trait MergeSources {
    /// Shared element type.
    type Item;

    /// Append all elements of every source, source by source, to `out`.
    fn extend_into(self, out: &mut Vec<Self::Item>);
}

macro_rules! impl_merge_sources {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first, $($rest),*> MergeSources for ($first, $($rest,)*)
        where
            $first: Source,
            $($rest: Source<Item = <$first as Source>::Item>,)*
        {
            type Item = <$first as Source>::Item;

            #[allow(non_snake_case)]
            fn extend_into(self, out: &mut Vec<Self::Item>) {
                let ($first, $($rest,)*) = self;
                extend_from(out, $first);
                $(extend_from(out, $rest);)*
            }
        }
    };
}

impl_merge_sources!(A);
impl_merge_sources!(A, B);
impl_merge_sources!(A, B, C);
impl_merge_sources!(A, B, C, D);
impl_merge_sources!(A, B, C, D, E);
impl_merge_sources!(A, B, C, D, E, F);
impl_merge_sources!(A, B, C, D, E, F, G);
impl_merge_sources!(A, B, C, D, E, F, G, H);
impl_merge_sources!(A, B, C, D, E, F, G, H, I);
impl_merge_sources!(A, B, C, D, E, F, G, H, I, J);
impl_merge_sources!(A, B, C, D, E, F, G, H, I, J, K);
impl_merge_sources!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Concatenates a tuple of sources into one `Vec`.
///
/// The output holds all elements of the first source, then all of the second, and so on.
/// Sources may be different container types and may mix owned (moved) and borrowed
/// (cloned) arguments.
///
/// # Examples
///
/// ```rust
/// use std::collections::{BTreeSet, VecDeque};
/// use container_utils::merge;
///
/// let v1 = vec![0, 1];
/// let v2 = BTreeSet::from([3, 2]);
/// let v3 = VecDeque::from([4, 5]);
///
/// assert_eq!(merge((&v1, v2, &v3)), vec![0, 1, 2, 3, 4, 5]);
/// ```
///
/// Element types must agree:
///
/// ```compile_fail
/// use container_utils::merge;
///
/// let a = vec![1i32];
/// let b = vec![1i64];
/// let _ = merge((&a, &b));
/// ```
pub fn merge<M: MergeSources>(sources: M) -> Vec<M::Item> {
    let mut out = Vec::new();
    sources.extend_into(&mut out);
    out
}

/// Variadic form of [`merge`](crate::processing::merge::merge) with no arity limit.
///
/// ```rust
/// use container_utils::merge;
///
/// let tail = vec![String::from("c")];
/// let merged = merge!(vec![String::from("a")], [String::from("b")], &tail);
/// assert_eq!(merged, ["a", "b", "c"]);
/// ```
#[macro_export]
macro_rules! merge {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut merged = $crate::processing::merge::to_vec($first);
        $($crate::processing::merge::extend_from(&mut merged, $rest);)*
        merged
    }};
}
