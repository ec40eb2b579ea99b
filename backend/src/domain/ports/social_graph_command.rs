//! Driving port for follow graph writes.

use async_trait::async_trait;

use crate::domain::{SocialError, UserId};

/// Domain use-case port for following and unfollowing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialGraphCommand: Send + Sync {
    /// Make `follower` follow `following`.
    async fn follow_user(&self, follower: UserId, following: UserId) -> Result<(), SocialError>;

    /// Remove the edge if present. Never fails because the edge is missing.
    async fn delete_connection(
        &self,
        follower: UserId,
        following: UserId,
    ) -> Result<(), SocialError>;
}
