//! Comment service.
//!
//! Creation resolves the post, then the author, and only then stamps and
//! persists the comment. Edits re-stamp the comment and leave its references
//! alone.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use tracing::info;

use super::ports::{
    CommentCommand, CommentQuery, CommentRepository, CommentRepositoryError, PostRepository,
    UserRepository,
};
use super::reference_validator::ReferenceValidator;
use super::{
    Comment, CommentDraft, CommentEdit, CommentId, NewComment, PostId, SocialError, StorageError,
    UserId,
};

/// Comment service implementing [`CommentCommand`] and [`CommentQuery`].
pub struct CommentService<C, P, U> {
    comments: Arc<C>,
    references: ReferenceValidator<U, P>,
    clock: Arc<dyn Clock>,
}

impl<C, P, U> CommentService<C, P, U>
where
    C: CommentRepository,
    P: PostRepository,
    U: UserRepository,
{
    /// Create the service over the comment repository and the repositories
    /// its references point into.
    pub fn new(comments: Arc<C>, posts: Arc<P>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            comments,
            references: ReferenceValidator::new(users, posts),
            clock,
        }
    }
}

#[async_trait]
impl<C, P, U> CommentCommand for CommentService<C, P, U>
where
    C: CommentRepository,
    P: PostRepository,
    U: UserRepository,
{
    async fn create_comment(&self, draft: CommentDraft) -> Result<Comment, SocialError> {
        let (post_id, user_id) = (draft.post_id, draft.user_id);
        self.references
            .require_comment_references(post_id, user_id)
            .await?;
        let new_comment = NewComment::from_draft(draft, self.clock.utc());
        let comment = match self.comments.create(&new_comment).await {
            Ok(comment) => comment,
            // A reference vanished between the check and the insert.
            Err(CommentRepositoryError::ForeignKeyViolation { message }) => {
                self.references
                    .require_comment_references(post_id, user_id)
                    .await?;
                return Err(StorageError::Query { message }.into());
            }
            Err(other) => return Err(other.into()),
        };
        info!(comment_id = %comment.id, %post_id, %user_id, "comment created");
        Ok(comment)
    }

    async fn edit_comment(
        &self,
        id: CommentId,
        edit: CommentEdit,
    ) -> Result<Comment, SocialError> {
        self.comments
            .update(id, &edit, self.clock.utc())
            .await?
            .ok_or(SocialError::UnknownComment { id })
    }

    async fn delete_comment(&self, id: CommentId) -> Result<(), SocialError> {
        self.comments.delete(id).await?;
        info!(comment_id = %id, "comment deleted");
        Ok(())
    }
}

#[async_trait]
impl<C, P, U> CommentQuery for CommentService<C, P, U>
where
    C: CommentRepository,
    P: PostRepository,
    U: UserRepository,
{
    async fn list_comments(&self) -> Result<Vec<Comment>, SocialError> {
        Ok(self.comments.list().await?)
    }

    async fn get_comment(&self, id: CommentId) -> Result<Comment, SocialError> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or(SocialError::UnknownComment { id })
    }

    async fn comments_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, SocialError> {
        Ok(self.comments.list_by_post(post_id).await?)
    }

    async fn comments_by_user(&self, user_id: UserId) -> Result<Vec<Comment>, SocialError> {
        Ok(self.comments.list_by_user(user_id).await?)
    }

    async fn comments_by_date(&self, date: NaiveDate) -> Result<Vec<Comment>, SocialError> {
        Ok(self.comments.list_by_date(date).await?)
    }
}

#[cfg(test)]
#[path = "comment_service_tests.rs"]
mod tests;
