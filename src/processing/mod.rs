//! Ownership-aware transformations producing new containers.
//!
//! Every function here takes its input as a [`crate::source::Source`]: pass a container by
//! value to move its elements, or by shared reference to clone them.
//!
//! Currently implemented:
//!
//! - [`filter()`]: stable filtering by predicate
//! - [`merge()`] / [`to_vec()`]: concatenation of one or more sources
//! - [`transform()`] / [`transform_same()`]: element mapping
//! - [`static_cast_all()`] / [`convert_all()`]: element-wise conversion, preserving shape
//! - [`split()`]: runs delimited by a separator value
//!
//! ## Example: merge → filter → transform → split
//!
//! ```rust
//! use std::collections::{BTreeSet, VecDeque};
//! use container_utils::processing::{filter, merge, split, transform};
//!
//! let head = vec![0, 1, 2];
//! let tail: VecDeque<i32> = VecDeque::from([3, 4, 5]);
//! let seen = BTreeSet::from([1, 4]);
//!
//! let merged = merge((&head, tail));
//! let unseen = filter(merged, |i| !seen.contains(i));
//! let marked = transform(unseen, |i| if i == 3 { -1 } else { i * 10 });
//!
//! assert_eq!(split(marked, &-1), vec![vec![0, 20], vec![50]]);
//! ```

pub mod filter;
pub mod map;
pub mod merge;
pub mod split;

pub use filter::filter;
pub use map::{convert_all, static_cast_all, transform, transform_same};
pub use merge::{extend_from, merge, to_vec, MergeSources};
pub use split::split;
