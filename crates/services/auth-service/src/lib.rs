//! Auth Service Library
//!
//! Checks login credentials against an in-memory user store using a
//! pluggable password hasher.

pub mod config;
pub mod repository;
pub mod service;

use tracing::debug;

use common::AppResult;

use crate::service::{AuthService, Authenticator};

/// Run a single login check against the mock database.
///
/// # Errors
/// Returns `AppError::Validation` if `email` is not a valid address.
pub fn run(email: &str, password: &str) -> AppResult<bool> {
    debug!("Running login check");
    Authenticator::default().authenticate(email, password)
}

/// Line printed for a login outcome.
pub fn report(authenticated: bool) -> String {
    format!("Is authenticated: {}", authenticated)
}
