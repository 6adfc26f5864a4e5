//! Repository layer for user lookup.

mod user_repository;

pub use user_repository::{
    get_user_by_username, InMemoryUserStore, MockDatabase, UserRepository, MOCK_USERS,
};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
