//! Error types for platform domain validation.

use thiserror::Error;

/// Errors returned while constructing platform domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlatformDomainError {
    /// The new item title is empty after trimming.
    #[error("item title must not be empty")]
    EmptyTitle,

    /// The creation location chain has no nodes.
    #[error("creation location must contain at least one node")]
    EmptyLocation,
}
