//! User domain entity and login credentials.

use serde::{Deserialize, Serialize};

use crate::email::Email;
use crate::error::DomainResult;
use crate::password::{HashedPassword, SecureString};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: Email,
    pub hashed_password: HashedPassword,
}

impl User {
    pub fn new(username: Email, hashed_password: HashedPassword) -> Self {
        Self {
            username,
            hashed_password,
        }
    }
}

/// Credentials supplied for a single login attempt
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub username: Email,
    pub password: SecureString,
}

impl LoginCredentials {
    pub fn new(username: Email, password: SecureString) -> Self {
        Self { username, password }
    }

    /// Build credentials from raw input, validating the email.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidEmailFormat` if the username is not a
    /// valid address.
    pub fn parse(raw_email: &str, raw_password: &str) -> DomainResult<Self> {
        Ok(Self {
            username: Email::parse(raw_email)?,
            password: SecureString::from(raw_password),
        })
    }
}
