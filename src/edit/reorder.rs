//! Positional edits: `move_to_index` and `pop_front`.

use crate::error::{ContainerError, ContainerResult};

use super::sequence::Sequence;

/// Moves the element at `old_index` to `new_index`, shifting the elements in between by
/// one position to close the gap.
///
/// Moving towards the front shifts `[new_index, old_index)` right by one; moving towards
/// the back shifts `(old_index, new_index]` left by one. Equal indices leave the sequence
/// unchanged.
///
/// # Panics
///
/// Panics if either index is out of range. Use [`try_move_to_index`] to get an error
/// instead.
///
/// # Examples
///
/// ```rust
/// use container_utils::move_to_index;
///
/// let mut v = vec![3, 1, 2, 0];
/// move_to_index(&mut v, 3, 0);
/// assert_eq!(v, vec![0, 3, 1, 2]);
/// move_to_index(&mut v, 1, 3);
/// assert_eq!(v, vec![0, 1, 2, 3]);
/// ```
pub fn move_to_index<S>(seq: &mut S, old_index: usize, new_index: usize)
where
    S: Sequence + ?Sized,
{
    if let Err(err) = try_move_to_index(seq, old_index, new_index) {
        panic!("move_to_index: {err}");
    }
}

/// Fallible form of [`move_to_index`].
///
/// Returns [`ContainerError::IndexOutOfRange`] and leaves the sequence untouched if either
/// index is out of range.
pub fn try_move_to_index<S>(seq: &mut S, old_index: usize, new_index: usize) -> ContainerResult<()>
where
    S: Sequence + ?Sized,
{
    let items = seq.as_mut_slice();
    let len = items.len();
    for index in [old_index, new_index] {
        if index >= len {
            return Err(ContainerError::IndexOutOfRange { index, len });
        }
    }

    if old_index > new_index {
        items[new_index..=old_index].rotate_right(1);
    } else if old_index < new_index {
        items[old_index..=new_index].rotate_left(1);
    }
    Ok(())
}

/// Removes and returns the first element, or `None` if the sequence is empty.
///
/// ```rust
/// use container_utils::pop_front;
///
/// let mut v = vec![0, 1, 2];
/// assert_eq!(pop_front(&mut v), Some(0));
/// assert_eq!(v, vec![1, 2]);
/// ```
pub fn pop_front<S>(seq: &mut S) -> Option<S::Item>
where
    S: Sequence + ?Sized,
{
    seq.pop_front()
}
