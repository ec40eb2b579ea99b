//! Driven port for comment persistence.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::define_port_error;
use crate::domain::{Comment, CommentEdit, CommentId, NewComment, PostId, UserId};

define_port_error! {
    /// Persistence errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "comment repository query failed: {message}",
        /// The referenced post or user is missing.
        ForeignKeyViolation { message: String } =>
            "comment reference violated: {message}",
    }
}

/// Port for storing and loading comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment and return it with its assigned identifier.
    async fn create(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError>;

    /// List every comment in store order.
    async fn list(&self) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Fetch a comment by identifier.
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Comments answering `post_id`.
    async fn list_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Comments written by `user_id`.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Comments stamped on the given UTC calendar day.
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Replace the content and re-stamp, returning `None` when absent.
    async fn update(
        &self,
        id: CommentId,
        edit: &CommentEdit,
        stamped_at: DateTime<Utc>,
    ) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Delete a comment. Deleting an absent comment is not an error.
    async fn delete(&self, id: CommentId) -> Result<(), CommentRepositoryError>;
}
