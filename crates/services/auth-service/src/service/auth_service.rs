//! Authentication service - Checks login credentials.
//!
//! SOLID (SRP): Handles the credential comparison only.
//! SOLID (DIP): User lookup and hashing are injected as traits.

use std::sync::Arc;

use tracing::{debug, info, warn};

use common::AppResult;
use domain::{LoginCredentials, PasswordHasher, SimulatedHasher};

use crate::repository::{MockDatabase, UserRepository};

/// Authentication service trait for dependency injection.
pub trait AuthService: Send + Sync {
    /// Check credentials against the user store.
    ///
    /// Unknown users and wrong passwords both yield `false`.
    fn login(&self, credentials: &LoginCredentials) -> bool;

    /// Validate raw input, then check it.
    ///
    /// # Errors
    /// Returns `AppError::Validation` if the email is malformed.
    fn authenticate(&self, raw_email: &str, raw_password: &str) -> AppResult<bool>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }
}

impl Default for Authenticator {
    /// Mock database with the simulated hasher
    fn default() -> Self {
        Self::new(Arc::new(MockDatabase), Arc::new(SimulatedHasher::default()))
    }
}

impl AuthService for Authenticator {
    fn login(&self, credentials: &LoginCredentials) -> bool {
        let username = credentials.username.as_str();
        debug!(%username, "Looking up user");

        let Some(user) = self.users.find_by_username(username) else {
            info!(%username, "Login failed: unknown user");
            return false;
        };

        let computed = self.hasher.hash(&credentials.password);
        // Only the hash string is compared; the algorithm label is ignored.
        let authenticated = user.hashed_password.matches(&computed);

        info!(%username, authenticated, "Login attempt completed");
        authenticated
    }

    fn authenticate(&self, raw_email: &str, raw_password: &str) -> AppResult<bool> {
        let credentials = LoginCredentials::parse(raw_email, raw_password).map_err(|e| {
            warn!("Rejected login input: {}", e);
            e
        })?;

        Ok(self.login(&credentials))
    }
}

/// Check credentials against the process-wide mock database.
pub fn login(credentials: &LoginCredentials) -> bool {
    Authenticator::default().login(credentials)
}
