//! Password value objects and the hashing capability.
//!
//! DDD: `SecureString` and `HashedPassword` are value objects.
//! SOLID (DIP): Callers depend on the `PasswordHasher` trait, so the
//! placeholder `SimulatedHasher` can be swapped for a real algorithm
//! without touching authentication logic.

use serde::{Deserialize, Serialize};

use crate::constants::{HASH_ALGORITHM, HASH_PREFIX, HASH_SALT};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Plaintext password pending hashing.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

// Never expose the plaintext in debug output
impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SecureString").field(&"[REDACTED]").finish()
    }
}

impl SecureString {
    /// Wrap a plaintext value. Any string is accepted, including empty.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the plaintext for hashing.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Result of hashing a password: algorithm label plus hash string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedPassword {
    pub algorithm: String,
    pub hash: String,
}

impl HashedPassword {
    pub fn new(algorithm: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            hash: hash.into(),
        }
    }

    /// Compare hash strings only. The algorithm label is not checked.
    pub fn matches(&self, other: &HashedPassword) -> bool {
        self.hash == other.hash
    }
}

/// Password hashing capability.
///
/// Implementations must be deterministic for a given input so that a freshly
/// computed hash can be compared against a stored one.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash the given plaintext.
    fn hash(&self, secret: &SecureString) -> HashedPassword;
}

/// Placeholder hasher: `hashed_<plaintext>_<salt>`.
///
/// No cryptographic mixing takes place. Not suitable for real credentials.
#[derive(Debug, Clone)]
pub struct SimulatedHasher {
    salt: String,
}

impl SimulatedHasher {
    /// Create a hasher with a custom salt.
    pub fn with_salt(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }
}

impl Default for SimulatedHasher {
    fn default() -> Self {
        Self::with_salt(HASH_SALT)
    }
}

impl PasswordHasher for SimulatedHasher {
    fn hash(&self, secret: &SecureString) -> HashedPassword {
        HashedPassword {
            algorithm: HASH_ALGORITHM.to_string(),
            hash: format!("{}{}_{}", HASH_PREFIX, secret.expose(), self.salt),
        }
    }
}

/// Hash a password with the default simulated hasher.
pub fn hash_password(secret: &SecureString) -> HashedPassword {
    SimulatedHasher::default().hash(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SEED_PASSWORD_HASH;

    #[test]
    fn test_hash_matches_seed_format() {
        let hashed = hash_password(&SecureString::from("securePassword123!"));
        assert_eq!(hashed.hash, SEED_PASSWORD_HASH);
        assert_eq!(hashed.algorithm, "SHA-256");
    }

    #[test]
    fn test_hash_is_deterministic() {
        let secret = SecureString::from("Password123!");
        assert_eq!(hash_password(&secret), hash_password(&secret));
    }

    #[test]
    fn test_different_passwords_different_hashes() {
        let first = hash_password(&SecureString::from("Password123!"));
        let second = hash_password(&SecureString::from("Password456!"));

        assert_ne!(first.hash, second.hash);
        assert_eq!(first.algorithm, second.algorithm);
    }

    #[test]
    fn test_empty_password_is_hashed() {
        let hashed = hash_password(&SecureString::from(""));
        assert_eq!(hashed.hash, "hashed__your_salt_here");
    }

    #[test]
    fn test_custom_salt() {
        let hasher = SimulatedHasher::with_salt("pepper");
        let hashed = hasher.hash(&SecureString::from("abc"));
        assert_eq!(hashed.hash, "hashed_abc_pepper");
    }

    #[test]
    fn test_matches_ignores_algorithm() {
        let stored = HashedPassword::new("SHA-256", "hashed_x_your_salt_here");
        let computed = HashedPassword::new("bcrypt", "hashed_x_your_salt_here");
        assert!(stored.matches(&computed));
        assert!(!stored.matches(&HashedPassword::new("SHA-256", "other")));
    }

    #[test]
    fn test_secure_string_debug_redacted() {
        let secret = SecureString::from("hunter22");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("hunter22"));
        assert!(debug.contains("REDACTED"));
    }
}
