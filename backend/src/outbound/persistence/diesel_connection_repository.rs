//! PostgreSQL-backed `ConnectionRepository` implementation using Diesel ORM.
//!
//! Follow listings join `connections` against `users` and keep edge
//! insertion order through the serial `connections.id`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ConnectionRepository, ConnectionRepositoryError};
use crate::domain::{Connection, User, UserId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{NewConnectionRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{connections, users};

/// Diesel-backed implementation of the connection repository port.
#[derive(Clone)]
pub struct DieselConnectionRepository {
    pool: DbPool,
}

impl DieselConnectionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ConnectionRepositoryError {
    ConnectionRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> ConnectionRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => ConnectionRepositoryError::connection(message),
        DieselFailure::Unique { .. } => ConnectionRepositoryError::duplicate(),
        DieselFailure::ForeignKey { constraint } => {
            ConnectionRepositoryError::query(format!("unexpected constraint {constraint}"))
        }
        DieselFailure::Query(message) => ConnectionRepositoryError::query(message),
    }
}

#[async_trait]
impl ConnectionRepository for DieselConnectionRepository {
    async fn insert(&self, connection: Connection) -> Result<(), ConnectionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(connections::table)
            .values(NewConnectionRow::from(connection))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, connection: Connection) -> Result<(), ConnectionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(
            connections::table
                .filter(connections::follower_id.eq(connection.follower.get()))
                .filter(connections::following_id.eq(connection.following.get())),
        )
        .execute(&mut conn)
        .await
        .map(|_| ())
        .map_err(map_diesel_error)
    }

    async fn delete_all_from(&self, follower: UserId) -> Result<(), ConnectionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(connections::table.filter(connections::follower_id.eq(follower.get())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete_all_to(&self, following: UserId) -> Result<(), ConnectionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(connections::table.filter(connections::following_id.eq(following.get())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_following(
        &self,
        follower: UserId,
    ) -> Result<Vec<User>, ConnectionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = connections::table
            .inner_join(users::table.on(users::id.eq(connections::following_id)))
            .filter(connections::follower_id.eq(follower.get()))
            .order(connections::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(UserRow::into_domain).collect())
    }

    async fn list_followers(
        &self,
        following: UserId,
    ) -> Result<Vec<User>, ConnectionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = connections::table
            .inner_join(users::table.on(users::id.eq(connections::follower_id)))
            .filter(connections::following_id.eq(following.get()))
            .order(connections::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(UserRow::into_domain).collect())
    }
}
