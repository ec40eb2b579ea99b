//! Driving port for comment reads.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Comment, CommentId, PostId, SocialError, UserId};

/// Domain use-case port for reading comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// Every comment.
    async fn list_comments(&self) -> Result<Vec<Comment>, SocialError>;

    /// One comment by identifier.
    async fn get_comment(&self, id: CommentId) -> Result<Comment, SocialError>;

    /// Comments answering a post.
    async fn comments_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, SocialError>;

    /// Comments written by a user.
    async fn comments_by_user(&self, user_id: UserId) -> Result<Vec<Comment>, SocialError>;

    /// Comments stamped on a UTC calendar day.
    async fn comments_by_date(&self, date: NaiveDate) -> Result<Vec<Comment>, SocialError>;
}
