//! Driven port for follow edges.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Connection, User, UserId};

define_port_error! {
    /// Persistence errors raised by connection repository adapters.
    pub enum ConnectionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "connection repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "connection repository query failed: {message}",
        /// The ordered pair already exists.
        Duplicate =>
            "follow edge already exists",
    }
}

/// Port for storing follow edges and reading the users on either end.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// Insert an edge; reports [`ConnectionRepositoryError::Duplicate`] for an
    /// existing pair.
    async fn insert(&self, connection: Connection) -> Result<(), ConnectionRepositoryError>;

    /// Delete one edge. Deleting an absent edge is not an error.
    async fn delete(&self, connection: Connection) -> Result<(), ConnectionRepositoryError>;

    /// Delete every edge where `follower` is the follower.
    async fn delete_all_from(&self, follower: UserId) -> Result<(), ConnectionRepositoryError>;

    /// Delete every edge where `following` is followed.
    async fn delete_all_to(&self, following: UserId) -> Result<(), ConnectionRepositoryError>;

    /// Users followed by `follower`, in edge insertion order.
    async fn list_following(&self, follower: UserId)
    -> Result<Vec<User>, ConnectionRepositoryError>;

    /// Users following `following`, in edge insertion order.
    async fn list_followers(
        &self,
        following: UserId,
    ) -> Result<Vec<User>, ConnectionRepositoryError>;
}
