//! Driving port for user reads.

use async_trait::async_trait;

use crate::domain::{SocialError, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Every registered user.
    async fn list_users(&self) -> Result<Vec<User>, SocialError>;

    /// One user by identifier.
    async fn get_user(&self, id: UserId) -> Result<User, SocialError>;

    /// One user by exact email.
    async fn get_user_by_email(&self, email: &str) -> Result<User, SocialError>;
}
