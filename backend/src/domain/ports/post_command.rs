//! Driving port for post writes.

use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostEdit, PostId, SocialError, UserId};

/// Domain use-case port for post mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostCommand: Send + Sync {
    /// Check the owner exists, stamp and persist a post.
    async fn create_post(&self, draft: PostDraft) -> Result<Post, SocialError>;

    /// Replace title and content and re-stamp.
    async fn edit_post(&self, id: PostId, edit: PostEdit) -> Result<Post, SocialError>;

    /// Delete one post.
    async fn delete_post(&self, id: PostId) -> Result<(), SocialError>;

    /// Delete every post owned by a user.
    async fn delete_posts_by_user(&self, user_id: UserId) -> Result<(), SocialError>;
}
