//! Driving port for follow graph reads.
//!
//! Both listings are plain reads: an unknown user simply has no edges.

use async_trait::async_trait;

use crate::domain::{SocialError, User, UserId};

/// Domain use-case port for listing follow relationships.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialGraphQuery: Send + Sync {
    /// Users that `id` follows.
    async fn following(&self, id: UserId) -> Result<Vec<User>, SocialError>;

    /// Users that follow `id`.
    async fn followers(&self, id: UserId) -> Result<Vec<User>, SocialError>;
}
