use thiserror::Error;

/// Convenience result type for fallible container operations.
pub type ContainerResult<T> = Result<T, ContainerError>;

/// Error type returned by the fallible (`try_*`) entry points.
///
/// Most preconditions of this crate are enforced by the type system instead (borrowing a
/// container of move-only elements, merging sources of different element types), so they
/// have no variant here.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// A positional edit referenced an index at or past the end of the sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// An integer range was constructed with a step of zero.
    #[error("range step must be non-zero")]
    ZeroStep,
}
