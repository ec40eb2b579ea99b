//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId, UserProfile};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{UserRow, UserValues};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    UserRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => UserRepositoryError::connection(message),
        DieselFailure::ForeignKey { constraint } => {
            UserRepositoryError::foreign_key_violation(constraint)
        }
        DieselFailure::Unique { .. } => UserRepositoryError::query("duplicate user row"),
        DieselFailure::Query(message) => UserRepositoryError::query(message),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, profile: &UserProfile) -> Result<User, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(users::table)
            .values(UserValues::from(profile))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(UserRow::into_domain)
            .map_err(map_diesel_error)
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(UserRow::into_domain).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(UserRow::into_domain))
            .map_err(map_diesel_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .filter(users::email.eq(email))
            .order(users::id.asc())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(UserRow::into_domain))
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        id: UserId,
        profile: &UserProfile,
    ) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(users::table.find(id.get()))
            .set(UserValues::from(profile))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row| row.map(UserRow::into_domain))
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
