//! PostgreSQL-backed `CommentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CommentRepository, CommentRepositoryError};
use crate::domain::{Comment, CommentEdit, CommentId, NewComment, PostId, UserId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::diesel_helpers::utc_day_bounds;
use super::models::{CommentEditRow, CommentRow, NewCommentRow};
use super::pool::{DbPool, PoolError};
use super::schema::comments;

/// Diesel-backed implementation of the comment repository port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CommentRepositoryError {
    CommentRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> CommentRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => CommentRepositoryError::connection(message),
        DieselFailure::ForeignKey { constraint } => {
            CommentRepositoryError::foreign_key_violation(constraint)
        }
        DieselFailure::Unique { .. } => CommentRepositoryError::query("duplicate comment row"),
        DieselFailure::Query(message) => CommentRepositoryError::query(message),
    }
}

fn into_comments(rows: Vec<CommentRow>) -> Vec<Comment> {
    rows.into_iter().map(CommentRow::into_domain).collect()
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn create(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(comments::table)
            .values(NewCommentRow::from(comment))
            .returning(CommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(CommentRow::into_domain)
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        comments::table
            .order(comments::id.asc())
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map(into_comments)
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        comments::table
            .find(id.get())
            .select(CommentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(CommentRow::into_domain))
            .map_err(map_diesel_error)
    }

    async fn list_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        comments::table
            .filter(comments::post_id.eq(post_id.get()))
            .order(comments::id.asc())
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map(into_comments)
            .map_err(map_diesel_error)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        comments::table
            .filter(comments::user_id.eq(user_id.get()))
            .order(comments::id.asc())
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map(into_comments)
            .map_err(map_diesel_error)
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Comment>, CommentRepositoryError> {
        let (start, end) = utc_day_bounds(date)
            .ok_or_else(|| CommentRepositoryError::query(format!("date {date} out of range")))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        comments::table
            .filter(comments::created_at.ge(start).and(comments::created_at.lt(end)))
            .order(comments::id.asc())
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map(into_comments)
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        id: CommentId,
        edit: &CommentEdit,
        stamped_at: DateTime<Utc>,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(comments::table.find(id.get()))
            .set(CommentEditRow::new(edit, stamped_at))
            .returning(CommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row| row.map(CommentRow::into_domain))
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: CommentId) -> Result<(), CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(comments::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
