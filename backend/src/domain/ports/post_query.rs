//! Driving port for post reads.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Post, PostId, SocialError, UserId};

/// Domain use-case port for reading posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostQuery: Send + Sync {
    /// Every post.
    async fn list_posts(&self) -> Result<Vec<Post>, SocialError>;

    /// One post by identifier.
    async fn get_post(&self, id: PostId) -> Result<Post, SocialError>;

    /// Posts owned by a user.
    async fn posts_by_user(&self, user_id: UserId) -> Result<Vec<Post>, SocialError>;

    /// Posts with an exactly matching title.
    async fn posts_by_title(&self, title: &str) -> Result<Vec<Post>, SocialError>;

    /// Posts stamped on a UTC calendar day.
    async fn posts_by_date(&self, date: NaiveDate) -> Result<Vec<Post>, SocialError>;
}
