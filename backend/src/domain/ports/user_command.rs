//! Driving port for user writes.
//!
//! Inbound adapters call this port to register, update and remove users.
//! Implementations own the validation chain and address enrichment.

use async_trait::async_trait;

use crate::domain::{SocialError, User, UserDraft, UserId};

/// Domain use-case port for user mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Validate, enrich and persist a new user.
    async fn create_user(&self, draft: UserDraft) -> Result<User, SocialError>;

    /// Enrich and persist new attributes for an existing user.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, SocialError>;

    /// Delete a user and every follow edge touching it.
    async fn delete_user(&self, id: UserId) -> Result<(), SocialError>;
}
