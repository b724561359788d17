//! Lazy, re-iterable integer ranges with an arbitrary non-zero step.

use std::iter::FusedIterator;

use num_traits::{CheckedAdd, PrimInt};

use crate::error::{ContainerError, ContainerResult};

/// A lazy integer range `start, start + step, ...` that stops before passing `end`.
///
/// With a positive step the values stay strictly below `end`; with a negative step they
/// stay strictly above it. Iteration also stops when the next value would overflow `T`.
///
/// `IRange` is `Copy` and iterating it does not consume any state, so the same range can
/// be walked any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IRange<T> {
    start: T,
    end: T,
    step: T,
}

impl<T: PrimInt> IRange<T> {
    /// Create a range, rejecting a zero step.
    pub fn try_new(start: T, end: T, step: T) -> ContainerResult<Self> {
        if step.is_zero() {
            return Err(ContainerError::ZeroStep);
        }
        Ok(Self { start, end, step })
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    pub fn step(&self) -> T {
        self.step
    }

    /// Start a fresh pass over the range.
    pub fn iter(&self) -> IRangeIter<T> {
        IRangeIter {
            next: Some(self.start),
            end: self.end,
            step: self.step,
            ascending: self.step > T::zero(),
        }
    }
}

/// Builds an [`IRange`] from `start` towards `end` in increments of `step`.
///
/// # Panics
///
/// Panics if `step` is zero, which would never terminate. Use [`IRange::try_new`] to get
/// an error instead.
///
/// # Examples
///
/// ```rust
/// use container_utils::irange;
///
/// assert_eq!(irange(0, 10, 3).into_iter().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
/// assert_eq!(irange(10, 0, -3).into_iter().collect::<Vec<_>>(), vec![10, 7, 4, 1]);
/// ```
pub fn irange<T: PrimInt>(start: T, end: T, step: T) -> IRange<T> {
    match IRange::try_new(start, end, step) {
        Ok(range) => range,
        Err(err) => panic!("irange: {err}"),
    }
}

/// Iterator produced by walking an [`IRange`].
#[derive(Debug, Clone)]
pub struct IRangeIter<T> {
    next: Option<T>,
    end: T,
    step: T,
    ascending: bool,
}

impl<T: PrimInt> Iterator for IRangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next?;
        let in_range = if self.ascending {
            current < self.end
        } else {
            current > self.end
        };
        if !in_range {
            self.next = None;
            return None;
        }
        self.next = CheckedAdd::checked_add(&current, &self.step);
        Some(current)
    }
}

impl<T: PrimInt> FusedIterator for IRangeIter<T> {}

impl<T: PrimInt> IntoIterator for IRange<T> {
    type Item = T;
    type IntoIter = IRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PrimInt> IntoIterator for &IRange<T> {
    type Item = T;
    type IntoIter = IRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
