//! Error types for stack operations

use std::collections::TryReserveError;

/// Result type for stack operations
pub type Result<T> = std::result::Result<T, StackError>;

/// Stack operation errors
///
/// Every variant leaves the stack exactly as it was: no operation applies
/// partially.
#[derive(Debug, thiserror::Error)]
pub enum StackError {
    /// The backing buffer could not be allocated or reallocated
    #[error("memory allocation failed")]
    AllocationFailed(#[from] TryReserveError),

    /// Push attempted while every committed slot is occupied
    #[error("stack overflow: all {capacity} slots occupied")]
    Overflow {
        /// Committed capacity at the time of the push
        capacity: usize,
    },

    /// Grow target does not strictly exceed the current capacity
    #[error("new size {requested} must be greater than current capacity {capacity}")]
    InvalidGrowth {
        /// Capacity the caller asked for
        requested: usize,
        /// Capacity the stack already has
        capacity: usize,
    },

    /// Pop attempted on an empty stack
    #[error("stack underflow: stack is empty")]
    Underflow,
}

impl StackError {
    /// Whether this error is an overflow the caller can recover from by
    /// growing the stack.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}
