//! Follow graph service.
//!
//! Follows are guarded in a fixed order: self-loop, follower exists,
//! followed user exists, edge not already present. The store's unique index
//! backs the last check, so a concurrent duplicate still surfaces as
//! [`SocialError::DuplicateFollow`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::ports::{
    ConnectionRepository, ConnectionRepositoryError, SocialGraphCommand, SocialGraphQuery,
    UserRepository,
};
use super::{Connection, SocialError, User, UserId};

/// Follow graph service implementing [`SocialGraphCommand`] and
/// [`SocialGraphQuery`].
pub struct SocialGraphService<U, C> {
    users: Arc<U>,
    connections: Arc<C>,
}

impl<U, C> SocialGraphService<U, C>
where
    U: UserRepository,
    C: ConnectionRepository,
{
    /// Create the service over the user and connection repositories.
    pub fn new(users: Arc<U>, connections: Arc<C>) -> Self {
        Self { users, connections }
    }

    async fn require_user(&self, id: UserId) -> Result<User, SocialError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(SocialError::UnknownUser { id })
    }
}

#[async_trait]
impl<U, C> SocialGraphCommand for SocialGraphService<U, C>
where
    U: UserRepository,
    C: ConnectionRepository,
{
    async fn follow_user(&self, follower: UserId, following: UserId) -> Result<(), SocialError> {
        let edge = Connection::new(follower, following);
        if edge.is_self_loop() {
            return Err(SocialError::SelfFollowNotAllowed { id: follower });
        }
        self.require_user(follower).await?;
        self.require_user(following).await?;

        let duplicate = SocialError::DuplicateFollow {
            follower,
            following,
        };
        let already_following = self.connections.list_following(follower).await?;
        if already_following.iter().any(|user| user.id == following) {
            return Err(duplicate);
        }

        match self.connections.insert(edge).await {
            Ok(()) => {
                info!(%follower, %following, "follow created");
                Ok(())
            }
            Err(ConnectionRepositoryError::Duplicate) => Err(duplicate),
            Err(other) => Err(other.into()),
        }
    }

    async fn delete_connection(
        &self,
        follower: UserId,
        following: UserId,
    ) -> Result<(), SocialError> {
        self.connections
            .delete(Connection::new(follower, following))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl<U, C> SocialGraphQuery for SocialGraphService<U, C>
where
    U: UserRepository,
    C: ConnectionRepository,
{
    async fn following(&self, id: UserId) -> Result<Vec<User>, SocialError> {
        Ok(self.connections.list_following(id).await?)
    }

    async fn followers(&self, id: UserId) -> Result<Vec<User>, SocialError> {
        Ok(self.connections.list_followers(id).await?)
    }
}

#[cfg(test)]
#[path = "social_graph_service_tests.rs"]
mod tests;
