//! The mutable-sequence abstraction shared by the in-place edits and pipe stages.

use std::collections::VecDeque;

/// A growable sequence that can be edited in place.
///
/// The in-place algorithms only need contiguous mutable access, truncation and removal
/// of the first element; `Vec` and `VecDeque` provide all three.
pub trait Sequence {
    type Item;

    /// Contiguous mutable view of all elements, in order.
    fn as_mut_slice(&mut self) -> &mut [Self::Item];

    /// Shorten the sequence to `len` elements, dropping the rest.
    fn truncate(&mut self, len: usize);

    /// Remove and return the first element, or `None` if the sequence is empty.
    fn pop_front(&mut self) -> Option<Self::Item>;
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn as_mut_slice(&mut self) -> &mut [T] {
        Vec::as_mut_slice(self)
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.remove(0))
        }
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.make_contiguous()
    }

    fn truncate(&mut self, len: usize) {
        VecDeque::truncate(self, len);
    }

    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn as_mut_slice(&mut self) -> &mut [S::Item] {
        S::as_mut_slice(&mut **self)
    }

    fn truncate(&mut self, len: usize) {
        S::truncate(&mut **self, len);
    }

    fn pop_front(&mut self) -> Option<S::Item> {
        S::pop_front(&mut **self)
    }
}
