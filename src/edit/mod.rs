//! In-place edits on growable sequences (`Vec`, `VecDeque`).
//!
//! These take exclusive access to the sequence for the duration of the call and return
//! nothing that borrows from it.

pub mod remove;
pub mod reorder;
pub mod sequence;

pub use remove::{remove_all, remove_all_by, remove_duplicates, remove_duplicates_by};
pub use reorder::{move_to_index, pop_front, try_move_to_index};
pub use sequence::Sequence;
