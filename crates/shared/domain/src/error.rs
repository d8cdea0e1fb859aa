//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No record with the given id
    #[error("{0}")]
    NotFound(String),

    /// Entity exists or input is present, but a business rule is broken
    #[error("{0}")]
    PreconditionFailed(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        DomainError::NotFound(msg.into())
    }

    /// Create a precondition failed error
    pub fn precondition_failed(msg: impl Into<String>) -> Self {
        DomainError::PreconditionFailed(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
