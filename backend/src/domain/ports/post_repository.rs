//! Driven port for post persistence.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::define_port_error;
use crate::domain::{NewPost, Post, PostEdit, PostId, UserId};

define_port_error! {
    /// Persistence errors raised by post repository adapters.
    pub enum PostRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "post repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "post repository query failed: {message}",
        /// A referenced row is missing, or the post is still referenced.
        ForeignKeyViolation { message: String } =>
            "post reference violated: {message}",
    }
}

/// Port for storing and loading posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post and return it with its assigned identifier.
    async fn create(&self, post: &NewPost) -> Result<Post, PostRepositoryError>;

    /// List every post in store order.
    async fn list(&self) -> Result<Vec<Post>, PostRepositoryError>;

    /// Fetch a post by identifier.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostRepositoryError>;

    /// Posts owned by `user_id`.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Post>, PostRepositoryError>;

    /// Posts whose title equals `title` exactly.
    async fn list_by_title(&self, title: &str) -> Result<Vec<Post>, PostRepositoryError>;

    /// Posts stamped on the given UTC calendar day.
    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Post>, PostRepositoryError>;

    /// Replace title and content and re-stamp, returning `None` when absent.
    async fn update(
        &self,
        id: PostId,
        edit: &PostEdit,
        stamped_at: DateTime<Utc>,
    ) -> Result<Option<Post>, PostRepositoryError>;

    /// Delete a post. Deleting an absent post is not an error.
    async fn delete(&self, id: PostId) -> Result<(), PostRepositoryError>;

    /// Delete every post owned by `user_id`.
    async fn delete_by_user(&self, user_id: UserId) -> Result<(), PostRepositoryError>;
}
