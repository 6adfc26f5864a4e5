//! Unified application error handling.
//!
//! Provides a single error type for service entry points, with stable
//! error codes for logging.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
/// SOLID - Open/Closed: Extend via new variants without modifying behavior
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Validation
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            e @ DomainError::InvalidEmailFormat(_) => AppError::Validation(e.to_string()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
