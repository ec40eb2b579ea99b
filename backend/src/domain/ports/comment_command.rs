//! Driving port for comment writes.

use async_trait::async_trait;

use crate::domain::{Comment, CommentDraft, CommentEdit, CommentId, SocialError};

/// Domain use-case port for comment mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentCommand: Send + Sync {
    /// Check the post and author exist, stamp and persist a comment.
    async fn create_comment(&self, draft: CommentDraft) -> Result<Comment, SocialError>;

    /// Replace the content and re-stamp.
    async fn edit_comment(&self, id: CommentId, edit: CommentEdit)
    -> Result<Comment, SocialError>;

    /// Delete one comment.
    async fn delete_comment(&self, id: CommentId) -> Result<(), SocialError>;
}
