//! PostgreSQL-backed `PostRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PostRepository, PostRepositoryError};
use crate::domain::{NewPost, Post, PostEdit, PostId, UserId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::diesel_helpers::utc_day_bounds;
use super::models::{NewPostRow, PostEditRow, PostRow};
use super::pool::{DbPool, PoolError};
use super::schema::posts;

/// Diesel-backed implementation of the post repository port.
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PostRepositoryError {
    PostRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> PostRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => PostRepositoryError::connection(message),
        DieselFailure::ForeignKey { constraint } => {
            PostRepositoryError::foreign_key_violation(constraint)
        }
        DieselFailure::Unique { .. } => PostRepositoryError::query("duplicate post row"),
        DieselFailure::Query(message) => PostRepositoryError::query(message),
    }
}

fn into_posts(rows: Vec<PostRow>) -> Vec<Post> {
    rows.into_iter().map(PostRow::into_domain).collect()
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn create(&self, post: &NewPost) -> Result<Post, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(posts::table)
            .values(NewPostRow::from(post))
            .returning(PostRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(PostRow::into_domain)
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        posts::table
            .order(posts::id.asc())
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map(into_posts)
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        posts::table
            .find(id.get())
            .select(PostRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(PostRow::into_domain))
            .map_err(map_diesel_error)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        posts::table
            .filter(posts::user_id.eq(user_id.get()))
            .order(posts::id.asc())
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map(into_posts)
            .map_err(map_diesel_error)
    }

    async fn list_by_title(&self, title: &str) -> Result<Vec<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        posts::table
            .filter(posts::title.eq(title))
            .order(posts::id.asc())
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map(into_posts)
            .map_err(map_diesel_error)
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Post>, PostRepositoryError> {
        let (start, end) = utc_day_bounds(date)
            .ok_or_else(|| PostRepositoryError::query(format!("date {date} out of range")))?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        posts::table
            .filter(posts::created_at.ge(start).and(posts::created_at.lt(end)))
            .order(posts::id.asc())
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map(into_posts)
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        id: PostId,
        edit: &PostEdit,
        stamped_at: DateTime<Utc>,
    ) -> Result<Option<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(posts::table.find(id.get()))
            .set(PostEditRow::new(edit, stamped_at))
            .returning(PostRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row| row.map(PostRow::into_domain))
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: PostId) -> Result<(), PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(posts::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete_by_user(&self, user_id: UserId) -> Result<(), PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(posts::table.filter(posts::user_id.eq(user_id.get())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_error_maps_to_connection_error() {
        let error = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(error, PostRepositoryError::connection("timed out"));
    }

    #[test]
    fn not_found_maps_to_query_error() {
        let error = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(error, PostRepositoryError::Query { .. }));
    }
}
