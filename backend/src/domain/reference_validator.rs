//! Cross-aggregate existence checks run before post and comment writes.
//!
//! Checks are read-only and run against the owning aggregate's repository.
//! They narrow but do not close the window in which a referenced row could
//! vanish before the write; the store's foreign keys close it.

use std::sync::Arc;

use super::ports::{PostRepository, UserRepository};
use super::{Post, PostId, SocialError, User, UserId};

/// Resolves user and post references.
pub struct ReferenceValidator<U, P> {
    users: Arc<U>,
    posts: Arc<P>,
}

impl<U, P> Clone for ReferenceValidator<U, P> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            posts: Arc::clone(&self.posts),
        }
    }
}

impl<U, P> ReferenceValidator<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    /// Create a validator over the user and post repositories.
    pub fn new(users: Arc<U>, posts: Arc<P>) -> Self {
        Self { users, posts }
    }

    /// Load the user or fail with [`SocialError::UnknownUser`].
    pub async fn require_user(&self, id: UserId) -> Result<User, SocialError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(SocialError::UnknownUser { id })
    }

    /// Load the post or fail with [`SocialError::UnknownPost`].
    pub async fn require_post(&self, id: PostId) -> Result<Post, SocialError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(SocialError::UnknownPost { id })
    }

    /// Check a comment's references: the post first, then the author.
    pub async fn require_comment_references(
        &self,
        post_id: PostId,
        user_id: UserId,
    ) -> Result<(), SocialError> {
        self.require_post(post_id).await?;
        self.require_user(user_id).await?;
        Ok(())
    }
}
