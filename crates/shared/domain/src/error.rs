//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of how the service is exposed.

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input did not match the accepted email shape
    #[error("Invalid email format: {0}")]
    InvalidEmailFormat(String),
}

impl DomainError {
    /// Create an invalid email error
    pub fn invalid_email(raw: impl Into<String>) -> Self {
        DomainError::InvalidEmailFormat(raw.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
