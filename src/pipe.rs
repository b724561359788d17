//! Left-to-right chaining of container operations.
//!
//! [`Pipe::pipe`] feeds a value into a [`Stage`] and returns the stage's output, so a
//! sequence of edits reads in the order it runs:
//!
//! ```rust
//! use container_utils::pipe::{ForEach, Pipe, Reverse, Sort};
//!
//! let v = vec![3, 1, 2, 0]
//!     .pipe(Sort)
//!     .pipe(ForEach(|i: &mut i32| *i *= 10))
//!     .pipe(Reverse);
//! assert_eq!(v, vec![30, 20, 10, 0]);
//! ```
//!
//! Stages accept owned containers and `&mut` borrows alike, and any `FnOnce(C) -> R`
//! closure is a stage too.

use crate::edit::Sequence;

/// A step that consumes `C` and produces [`Stage::Output`].
pub trait Stage<C> {
    type Output;

    fn apply(self, input: C) -> Self::Output;
}

impl<C, R, F> Stage<C> for F
where
    F: FnOnce(C) -> R,
{
    type Output = R;

    fn apply(self, input: C) -> R {
        self(input)
    }
}

/// Method-call syntax for applying a [`Stage`]; implemented for every sized type.
pub trait Pipe: Sized {
    fn pipe<S: Stage<Self>>(self, stage: S) -> S::Output {
        stage.apply(self)
    }
}

impl<T> Pipe for T {}

/// Sorts the sequence in place (stable) and passes it on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sort;

impl<C> Stage<C> for Sort
where
    C: Sequence,
    C::Item: Ord,
{
    type Output = C;

    fn apply(self, mut input: C) -> C {
        input.as_mut_slice().sort();
        input
    }
}

/// Reverses the sequence in place and passes it on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse;

impl<C: Sequence> Stage<C> for Reverse {
    type Output = C;

    fn apply(self, mut input: C) -> C {
        input.as_mut_slice().reverse();
        input
    }
}

/// Applies the wrapped function to every element in place and passes the sequence on.
///
/// Clone the stage to apply the same function again later.
#[derive(Debug, Clone, Copy)]
pub struct ForEach<F>(pub F);

impl<C, F> Stage<C> for ForEach<F>
where
    C: Sequence,
    F: FnMut(&mut C::Item),
{
    type Output = C;

    fn apply(mut self, mut input: C) -> C {
        input.as_mut_slice().iter_mut().for_each(&mut self.0);
        input
    }
}

/// Yields the greatest element (the last one among equals), or `None` when empty.
///
/// Owned containers yield the element by value, borrowed ones by reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxElement;

impl<C> Stage<C> for MaxElement
where
    C: IntoIterator,
    C::Item: Ord,
{
    type Output = Option<C::Item>;

    fn apply(self, input: C) -> Option<C::Item> {
        input.into_iter().max()
    }
}

/// Left fold starting from `init` and combining with `op`.
#[derive(Debug, Clone, Copy)]
pub struct Accumulate<A, F>(pub A, pub F);

impl<C, A, F> Stage<C> for Accumulate<A, F>
where
    C: IntoIterator,
    F: FnMut(A, C::Item) -> A,
{
    type Output = A;

    fn apply(self, input: C) -> A {
        let Accumulate(init, op) = self;
        input.into_iter().fold(init, op)
    }
}
