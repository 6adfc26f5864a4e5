//! Domain layer - Core value objects for credential checking.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod email;
pub mod error;
pub mod password;
pub mod user;

pub use constants::*;
pub use email::{validate_email, Email};
pub use error::{DomainError, DomainResult};
pub use password::{hash_password, HashedPassword, PasswordHasher, SecureString, SimulatedHasher};
pub use user::{LoginCredentials, User};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockPasswordHasher;
