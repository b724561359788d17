//! Ownership-aware element sources.
//!
//! Every transformation in this crate takes its input as a [`Source`]. The caller picks the
//! element path by how the container is passed:
//!
//! - an **owned** container (`Vec<T>`, `BTreeSet<T>`, `[T; N]`, ...) is consumed and its
//!   elements are moved into the output;
//! - a **shared reference** (`&Vec<T>`, `&[T]`, ...) leaves the container untouched and
//!   its elements are cloned into the output, which requires `T: Clone`.
//!
//! Both paths produce the same sequence of values.
//!
//! ```rust
//! use container_utils::{filter, to_vec};
//!
//! let words = vec![String::from("a"), String::from("bb"), String::from("ccc")];
//!
//! // Borrowed: `words` is still usable afterwards.
//! let long = filter(&words, |w| w.len() > 1);
//! assert_eq!(long, ["bb", "ccc"]);
//!
//! // Owned: the strings are moved, not cloned.
//! let all = to_vec(words);
//! assert_eq!(all.len(), 3);
//! ```
//!
//! Borrowing a container whose elements cannot be cloned does not compile, since the only
//! way to fill the output without consuming the source would be to duplicate elements:
//!
//! ```compile_fail
//! use container_utils::filter;
//!
//! struct MoveOnly(Box<i32>);
//!
//! let v = vec![MoveOnly(Box::new(1)), MoveOnly(Box::new(2))];
//! let _ = filter(&v, |m| *m.0 > 1);
//! ```
//!
//! The same holds for every other whole-container operation:
//!
//! ```compile_fail
//! use container_utils::transform;
//!
//! struct MoveOnly(Box<i32>);
//!
//! let v = vec![MoveOnly(Box::new(1))];
//! let _ = transform(&v, |m| *m.0);
//! ```
//!
//! ```compile_fail
//! use container_utils::split;
//!
//! #[derive(PartialEq)]
//! struct MoveOnly(Box<i32>);
//!
//! let v = vec![MoveOnly(Box::new(1)), MoveOnly(Box::new(0))];
//! let _ = split(&v, &MoveOnly(Box::new(0)));
//! ```
//!
//! ```compile_fail
//! use container_utils::merge;
//!
//! struct MoveOnly(Box<i32>);
//!
//! let v = vec![MoveOnly(Box::new(1))];
//! let _ = merge((&v,));
//! ```
//!
//! Passing the same container by value is fine:
//!
//! ```rust
//! use container_utils::filter;
//!
//! struct MoveOnly(Box<i32>);
//!
//! let v = vec![MoveOnly(Box::new(1)), MoveOnly(Box::new(2))];
//! let kept = filter(v, |m| *m.0 > 1);
//! assert_eq!(*kept[0].0, 2);
//! ```

use std::collections::{
    btree_map, btree_set, hash_map, hash_set, linked_list, vec_deque, BTreeMap, BTreeSet, HashMap,
    HashSet, LinkedList, VecDeque,
};
use std::{array, iter, slice, vec};

/// A container handed to a transformation, either by value (elements are moved) or by
/// shared reference (elements are cloned).
pub trait Source: Sized {
    /// Element type produced by this source.
    type Item;
    /// Owned container type behind the source (`Vec<T>` for both `Vec<T>` and `&Vec<T>`).
    type Container;
    /// Iterator over owned elements, in the container's iteration order.
    type Elements: Iterator<Item = Self::Item>;

    /// Consume the source, yielding owned elements (moved or cloned).
    fn into_elements(self) -> Self::Elements;

    /// Collect the elements accepted by `predicate`, in order.
    ///
    /// `predicate` runs exactly once per element. Borrowed sources test by reference and
    /// clone only the accepted elements.
    fn select<P>(self, predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_elements().filter(predicate).collect()
    }
}

/// A [`Source`] whose container shape can be rebuilt around a different element type.
///
/// Sequence shapes (`Vec`, `VecDeque`, `LinkedList`, `[T; N]`) are preserved. Associative
/// containers and slices cannot hold an arbitrary element type, so they fall back to
/// `Vec<U>`.
pub trait Reshape: Source {
    /// Container shape holding `U` elements.
    type Rebind<U>;

    /// Apply `f` to every element, in order, and collect into [`Self::Rebind`].
    fn reshape<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnMut(Self::Item) -> U;
}

fn select_cloned<'a, T, I, P>(iter: I, mut predicate: P) -> Vec<T>
where
    T: Clone + 'a,
    I: Iterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    iter.filter(|item| predicate(*item)).cloned().collect()
}

fn clone_entry<K: Clone, V: Clone>((k, v): (&K, &V)) -> (K, V) {
    (k.clone(), v.clone())
}

// Owned sources.

impl<T> Source for Vec<T> {
    type Item = T;
    type Container = Vec<T>;
    type Elements = vec::IntoIter<T>;

    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<T> Source for VecDeque<T> {
    type Item = T;
    type Container = VecDeque<T>;
    type Elements = vec_deque::IntoIter<T>;

    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<T> Source for LinkedList<T> {
    type Item = T;
    type Container = LinkedList<T>;
    type Elements = linked_list::IntoIter<T>;

    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<T> Source for BTreeSet<T> {
    type Item = T;
    type Container = BTreeSet<T>;
    type Elements = btree_set::IntoIter<T>;

    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<T, S> Source for HashSet<T, S> {
    type Item = T;
    type Container = HashSet<T, S>;
    type Elements = hash_set::IntoIter<T>;

    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<K, V> Source for BTreeMap<K, V> {
    type Item = (K, V);
    type Container = BTreeMap<K, V>;
    type Elements = btree_map::IntoIter<K, V>;

    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<K, V, S> Source for HashMap<K, V, S> {
    type Item = (K, V);
    type Container = HashMap<K, V, S>;
    type Elements = hash_map::IntoIter<K, V>;

    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<T, const N: usize> Source for [T; N] {
    type Item = T;
    type Container = [T; N];
    type Elements = array::IntoIter<T, N>;

    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

// Borrowed sources.

impl<'a, T: Clone> Source for &'a Vec<T> {
    type Item = T;
    type Container = Vec<T>;
    type Elements = iter::Cloned<slice::Iter<'a, T>>;

    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }

    fn select<P>(self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        select_cloned(self.iter(), predicate)
    }
}

impl<'a, T: Clone> Source for &'a [T] {
    type Item = T;
    type Container = Vec<T>;
    type Elements = iter::Cloned<slice::Iter<'a, T>>;

    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }

    fn select<P>(self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        select_cloned(self.iter(), predicate)
    }
}

impl<'a, T: Clone, const N: usize> Source for &'a [T; N] {
    type Item = T;
    type Container = [T; N];
    type Elements = iter::Cloned<slice::Iter<'a, T>>;

    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }

    fn select<P>(self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        select_cloned(self.iter(), predicate)
    }
}

impl<'a, T: Clone> Source for &'a VecDeque<T> {
    type Item = T;
    type Container = VecDeque<T>;
    type Elements = iter::Cloned<vec_deque::Iter<'a, T>>;

    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }

    fn select<P>(self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        select_cloned(self.iter(), predicate)
    }
}

impl<'a, T: Clone> Source for &'a LinkedList<T> {
    type Item = T;
    type Container = LinkedList<T>;
    type Elements = iter::Cloned<linked_list::Iter<'a, T>>;

    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }

    fn select<P>(self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        select_cloned(self.iter(), predicate)
    }
}

impl<'a, T: Clone> Source for &'a BTreeSet<T> {
    type Item = T;
    type Container = BTreeSet<T>;
    type Elements = iter::Cloned<btree_set::Iter<'a, T>>;

    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }

    fn select<P>(self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        select_cloned(self.iter(), predicate)
    }
}

impl<'a, T: Clone, S> Source for &'a HashSet<T, S> {
    type Item = T;
    type Container = HashSet<T, S>;
    type Elements = iter::Cloned<hash_set::Iter<'a, T>>;

    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }

    fn select<P>(self, predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        select_cloned(self.iter(), predicate)
    }
}

// Entries of a borrowed map only exist as `(&K, &V)`, so testing needs the clone first.
impl<'a, K: Clone, V: Clone> Source for &'a BTreeMap<K, V> {
    type Item = (K, V);
    type Container = BTreeMap<K, V>;
    type Elements = iter::Map<btree_map::Iter<'a, K, V>, fn((&'a K, &'a V)) -> (K, V)>;

    fn into_elements(self) -> Self::Elements {
        self.iter().map(clone_entry::<K, V> as fn((&'a K, &'a V)) -> (K, V))
    }
}

impl<'a, K: Clone, V: Clone, S> Source for &'a HashMap<K, V, S> {
    type Item = (K, V);
    type Container = HashMap<K, V, S>;
    type Elements = iter::Map<hash_map::Iter<'a, K, V>, fn((&'a K, &'a V)) -> (K, V)>;

    fn into_elements(self) -> Self::Elements {
        self.iter().map(clone_entry::<K, V> as fn((&'a K, &'a V)) -> (K, V))
    }
}

// Shapes.

fn rebuild_vec<S, U, F>(source: S, f: F) -> Vec<U>
where
    S: Source,
    F: FnMut(S::Item) -> U,
{
    source.into_elements().map(f).collect()
}

impl<T> Reshape for Vec<T> {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        rebuild_vec(self, f)
    }
}

impl<T: Clone> Reshape for &Vec<T> {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        rebuild_vec(self, f)
    }
}

impl<T: Clone> Reshape for &[T] {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        rebuild_vec(self, f)
    }
}

impl<T, const N: usize> Reshape for [T; N] {
    type Rebind<U> = [U; N];

    fn reshape<U, F>(self, f: F) -> [U; N]
    where
        F: FnMut(T) -> U,
    {
        self.map(f)
    }
}

impl<T: Clone, const N: usize> Reshape for &[T; N] {
    type Rebind<U> = [U; N];

    fn reshape<U, F>(self, mut f: F) -> [U; N]
    where
        F: FnMut(T) -> U,
    {
        self.each_ref().map(|item| f(item.clone()))
    }
}

impl<T> Reshape for VecDeque<T> {
    type Rebind<U> = VecDeque<U>;

    fn reshape<U, F>(self, f: F) -> VecDeque<U>
    where
        F: FnMut(T) -> U,
    {
        self.into_iter().map(f).collect()
    }
}

impl<T: Clone> Reshape for &VecDeque<T> {
    type Rebind<U> = VecDeque<U>;

    fn reshape<U, F>(self, f: F) -> VecDeque<U>
    where
        F: FnMut(T) -> U,
    {
        self.iter().cloned().map(f).collect()
    }
}

impl<T> Reshape for LinkedList<T> {
    type Rebind<U> = LinkedList<U>;

    fn reshape<U, F>(self, f: F) -> LinkedList<U>
    where
        F: FnMut(T) -> U,
    {
        self.into_iter().map(f).collect()
    }
}

impl<T: Clone> Reshape for &LinkedList<T> {
    type Rebind<U> = LinkedList<U>;

    fn reshape<U, F>(self, f: F) -> LinkedList<U>
    where
        F: FnMut(T) -> U,
    {
        self.iter().cloned().map(f).collect()
    }
}

impl<T> Reshape for BTreeSet<T> {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        rebuild_vec(self, f)
    }
}

impl<T: Clone> Reshape for &BTreeSet<T> {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        rebuild_vec(self, f)
    }
}

impl<T, S> Reshape for HashSet<T, S> {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        rebuild_vec(self, f)
    }
}

impl<T: Clone, S> Reshape for &HashSet<T, S> {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        rebuild_vec(self, f)
    }
}

impl<K, V> Reshape for BTreeMap<K, V> {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut((K, V)) -> U,
    {
        rebuild_vec(self, f)
    }
}

impl<K: Clone, V: Clone> Reshape for &BTreeMap<K, V> {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut((K, V)) -> U,
    {
        rebuild_vec(self, f)
    }
}

impl<K, V, S> Reshape for HashMap<K, V, S> {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut((K, V)) -> U,
    {
        rebuild_vec(self, f)
    }
}

impl<K: Clone, V: Clone, S> Reshape for &HashMap<K, V, S> {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut((K, V)) -> U,
    {
        rebuild_vec(self, f)
    }
}
