//! `container-utils` is a small library of generic algorithms over the standard collections
//! (`Vec`, `VecDeque`, `LinkedList`, sets, maps, arrays and slices).
//!
//! Every algorithm that reads a whole container takes a [`Source`]. The call site picks the
//! ownership policy:
//!
//! - pass the container **by value** and its elements are moved into the result;
//! - pass it **by reference** and its elements are cloned, leaving the original untouched.
//!
//! Borrowing a container whose elements are not `Clone` does not compile, so a move-only
//! element can never be silently copied.
//!
//! ## Quick example
//!
//! ```rust
//! use container_utils::{filter, merge, split, transform};
//! use std::collections::{BTreeSet, VecDeque};
//!
//! let head = vec![1, 2, 0];
//! let tail: VecDeque<i32> = VecDeque::from([3, 0, 4]);
//! let extra: BTreeSet<i32> = BTreeSet::from([5]);
//!
//! // `head` is borrowed and cloned; `tail` and `extra` are consumed.
//! let all = merge((&head, tail, extra));
//! assert_eq!(all, vec![1, 2, 0, 3, 0, 4, 5]);
//!
//! let runs = split(&all, &0);
//! assert_eq!(runs, vec![vec![1, 2], vec![3], vec![4, 5]]);
//!
//! let odd = filter(&all, |x| x % 2 == 1);
//! let labels = transform(odd, |x| format!("#{x}"));
//! assert_eq!(labels, vec!["#1", "#3", "#5"]);
//! assert_eq!(head, vec![1, 2, 0]);
//! ```
//!
//! ## Modules
//!
//! - [`source`]: the [`Source`] / [`Reshape`] traits that encode the ownership policy
//! - [`processing`]: filter, merge, to_vec, transform, split and element conversions
//! - [`query`]: membership ([`contains`]), position ([`index_of`]) and predicates
//! - [`edit`]: in-place edits on `Vec` / `VecDeque` (removal, dedup, reordering)
//! - [`range`]: lazy stepped integer ranges ([`irange`])
//! - [`pipe`]: left-to-right chaining of stages ([`Pipe`])
//! - [`multiset`]: a counted multiset with a native membership query
//! - [`error`]: error types used across the crate
//!
//! ## In-place edits
//!
//! ```rust
//! use container_utils::{move_to_index, remove_all, remove_duplicates};
//!
//! let mut v = vec![3, 1, 3, 2, 1, 0];
//! remove_duplicates(&mut v);
//! assert_eq!(v, vec![3, 1, 2, 0]);
//!
//! move_to_index(&mut v, 3, 0);
//! assert_eq!(v, vec![0, 3, 1, 2]);
//!
//! assert_eq!(remove_all(&mut v, &3), 1);
//! assert_eq!(v, vec![0, 1, 2]);
//! ```

pub mod edit;
pub mod error;
pub mod multiset;
pub mod pipe;
pub mod processing;
pub mod query;
pub mod range;
pub mod source;

pub use edit::{
    move_to_index, pop_front, remove_all, remove_all_by, remove_duplicates, remove_duplicates_by,
    try_move_to_index, Sequence,
};
pub use error::{ContainerError, ContainerResult};
pub use multiset::Multiset;
pub use pipe::{Pipe, Stage};
pub use processing::{
    convert_all, extend_from, filter, merge, split, static_cast_all, to_vec, transform, transform_same,
};
pub use query::{all_of, any_of, contains, index_of, index_of_by, Membership, Strategy};
pub use range::{irange, IRange};
pub use source::{Reshape, Source};
