//! An ordered multiset with a native `count` lookup.
//!
//! Rust's standard library has no multiset, so this small one backs the
//! [`Strategy::NativeCount`](crate::query::Strategy::NativeCount) membership path and
//! serves as an ordered source that keeps duplicates.

use std::borrow::Borrow;
use std::{iter, slice, vec};

use crate::source::{Reshape, Source};

/// Ordered collection that keeps every inserted element, duplicates included.
///
/// Elements are stored sorted; equal elements stay in insertion order. Iteration yields
/// the stored elements themselves, in ascending order, so values that compare equal but
/// differ otherwise are all preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiset<T> {
    items: Vec<T>,
}

impl<T> Multiset<T> {
    /// Create an empty multiset.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Total number of elements, counting duplicates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the multiset holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate every element in ascending order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// All elements as a sorted slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Ord> Multiset<T> {
    /// Insert `value` after any elements equal to it.
    pub fn insert(&mut self, value: T) {
        let at = self.items.partition_point(|item| *item <= value);
        self.items.insert(at, value);
    }

    /// Remove and return the earliest-inserted element equal to `value`.
    pub fn remove_one<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (start, end) = self.equal_range(value);
        (start < end).then(|| self.items.remove(start))
    }

    /// Number of elements equal to `value`, found by binary search.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (start, end) = self.equal_range(value);
        end - start
    }

    /// Number of distinct elements.
    pub fn distinct_len(&self) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        1 + self.items.windows(2).filter(|pair| pair[0] != pair[1]).count()
    }

    fn equal_range<Q>(&self, value: &Q) -> (usize, usize)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let start = self.items.partition_point(|item| item.borrow() < value);
        let end = start + self.items[start..].partition_point(|item| item.borrow() <= value);
        (start, end)
    }
}

impl<T> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items: Vec<T> = iter.into_iter().collect();
        items.sort();
        Self { items }
    }
}

impl<T: Ord> Extend<T> for Multiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Multiset<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Multiset<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> Source for Multiset<T> {
    type Item = T;
    type Container = Multiset<T>;
    type Elements = vec::IntoIter<T>;

    fn into_elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<'a, T: Clone> Source for &'a Multiset<T> {
    type Item = T;
    type Container = Multiset<T>;
    type Elements = iter::Cloned<slice::Iter<'a, T>>;

    fn into_elements(self) -> Self::Elements {
        self.iter().cloned()
    }

    fn select<P>(self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(*item)).cloned().collect()
    }
}

impl<T> Reshape for Multiset<T> {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        self.into_iter().map(f).collect()
    }
}

impl<T: Clone> Reshape for &Multiset<T> {
    type Rebind<U> = Vec<U>;

    fn reshape<U, F>(self, f: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        self.iter().cloned().map(f).collect()
    }
}
