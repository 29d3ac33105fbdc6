//! Errors reported by the containers.

use thiserror::Error;

/// Failure of a container operation.
///
/// A failed operation never modifies the container it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation needs at least one element but the container has none.
    #[error("container is empty")]
    EmptyContainer,
    /// The requested index lies outside of the valid range for the operation.
    #[error("index {index} out of range for length {len}")]
    InvalidIndex {
        /// Index that was requested.
        index: usize,
        /// Number of elements in the container at the time of the call.
        len: usize,
    },
}

/// A specialized [`Result`](core::result::Result) for container operations.
pub type Result<T> = core::result::Result<T, Error>;
