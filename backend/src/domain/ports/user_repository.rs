//! Driven port for user persistence.
//!
//! "No row" is reported as `Ok(None)`, kept apart from connectivity and query
//! failures.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{User, UserId, UserProfile};

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
        /// The user is still referenced by posts or comments.
        ForeignKeyViolation { message: String } =>
            "user is still referenced: {message}",
    }
}

/// Port for storing and loading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return it with its assigned identifier.
    async fn create(&self, profile: &UserProfile) -> Result<User, UserRepositoryError>;

    /// List every user in store order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a user by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Replace a user's attributes, returning `None` when no row has `id`.
    async fn update(
        &self,
        id: UserId,
        profile: &UserProfile,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Delete a user. Deleting an absent user is not an error.
    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError>;
}
