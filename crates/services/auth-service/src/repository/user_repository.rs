//! User repository backed by a fixed in-memory list.
//!
//! The mock database is seeded once per process and never mutated.
//! `UserRepository` is the seam where a real store would plug in.

use once_cell::sync::Lazy;

use domain::{Email, HashedPassword, User, HASH_ALGORITHM, SEED_PASSWORD_HASH, SEED_USERNAME};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Process-wide mock database of users.
pub static MOCK_USERS: Lazy<Vec<User>> = Lazy::new(seed_users);

fn seed_users() -> Vec<User> {
    let username = Email::parse(SEED_USERNAME).expect("SEED_USERNAME is a valid email");
    vec![User::new(
        username,
        HashedPassword::new(HASH_ALGORITHM, SEED_PASSWORD_HASH),
    )]
}

/// Find a user in the mock database by exact username.
///
/// Returns the first match in collection order. No case folding.
pub fn get_user_by_username(username: &str) -> Option<&'static User> {
    MOCK_USERS
        .iter()
        .find(|user| user.username.as_str() == username)
}

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Find user by exact username
    fn find_by_username(&self, username: &str) -> Option<User>;
}

/// Repository view over the process-wide [`MOCK_USERS`] list
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDatabase;

impl UserRepository for MockDatabase {
    fn find_by_username(&self, username: &str) -> Option<User> {
        get_user_by_username(username).cloned()
    }
}

/// Repository over an owned list of users
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    /// Create a store over the given users
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Create a store holding a copy of the mock database
    pub fn seeded() -> Self {
        Self::new(MOCK_USERS.to_vec())
    }
}

impl UserRepository for InMemoryUserStore {
    fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .iter()
            .find(|user| user.username.as_str() == username)
            .cloned()
    }
}
