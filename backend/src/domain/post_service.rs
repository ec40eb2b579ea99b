//! Post service.
//!
//! Creation checks the owner exists, then stamps the post with the injected
//! clock. Edits re-stamp without re-checking references, since ownership
//! never changes after creation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use tracing::info;

use super::ports::{PostCommand, PostQuery, PostRepository, PostRepositoryError, UserRepository};
use super::reference_validator::ReferenceValidator;
use super::{NewPost, Post, PostDraft, PostEdit, PostId, SocialError, UserId};

/// Post service implementing [`PostCommand`] and [`PostQuery`].
pub struct PostService<P, U> {
    posts: Arc<P>,
    references: ReferenceValidator<U, P>,
    clock: Arc<dyn Clock>,
}

impl<P, U> PostService<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    /// Create the service over the post and user repositories.
    pub fn new(posts: Arc<P>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            references: ReferenceValidator::new(users, Arc::clone(&posts)),
            posts,
            clock,
        }
    }
}

#[async_trait]
impl<P, U> PostCommand for PostService<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    async fn create_post(&self, draft: PostDraft) -> Result<Post, SocialError> {
        let owner = draft.user_id;
        self.references.require_user(owner).await?;
        let new_post = NewPost::from_draft(draft, self.clock.utc());
        let post = match self.posts.create(&new_post).await {
            Ok(post) => post,
            // The owner vanished between the check and the insert.
            Err(PostRepositoryError::ForeignKeyViolation { .. }) => {
                return Err(SocialError::UnknownUser { id: owner });
            }
            Err(other) => return Err(other.into()),
        };
        info!(post_id = %post.id, user_id = %owner, "post created");
        Ok(post)
    }

    async fn edit_post(&self, id: PostId, edit: PostEdit) -> Result<Post, SocialError> {
        self.posts
            .update(id, &edit, self.clock.utc())
            .await?
            .ok_or(SocialError::UnknownPost { id })
    }

    async fn delete_post(&self, id: PostId) -> Result<(), SocialError> {
        self.posts.delete(id).await?;
        info!(post_id = %id, "post deleted");
        Ok(())
    }

    async fn delete_posts_by_user(&self, user_id: UserId) -> Result<(), SocialError> {
        self.posts.delete_by_user(user_id).await?;
        info!(%user_id, "posts deleted for user");
        Ok(())
    }
}

#[async_trait]
impl<P, U> PostQuery for PostService<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    async fn list_posts(&self) -> Result<Vec<Post>, SocialError> {
        Ok(self.posts.list().await?)
    }

    async fn get_post(&self, id: PostId) -> Result<Post, SocialError> {
        self.references.require_post(id).await
    }

    async fn posts_by_user(&self, user_id: UserId) -> Result<Vec<Post>, SocialError> {
        Ok(self.posts.list_by_user(user_id).await?)
    }

    async fn posts_by_title(&self, title: &str) -> Result<Vec<Post>, SocialError> {
        Ok(self.posts.list_by_title(title).await?)
    }

    async fn posts_by_date(&self, date: NaiveDate) -> Result<Vec<Post>, SocialError> {
        Ok(self.posts.list_by_date(date).await?)
    }
}

#[cfg(test)]
#[path = "post_service_tests.rs"]
mod tests;
