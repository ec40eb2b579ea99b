//! User lifecycle service.
//!
//! Implements the user driving ports. Writes run the validation chain (create
//! only), then address enrichment, then a single persistence call. Deleting a
//! user also removes every follow edge touching it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::address_enrichment::AddressEnricher;
use super::ports::{
    AddressLookup, ConnectionRepository, UserCommand, UserQuery, UserRepository,
};
use super::{SocialError, User, UserDraft, UserId, UserProfile, validate_user_draft};

/// User service implementing [`UserCommand`] and [`UserQuery`].
pub struct UserService<U, C, L> {
    users: Arc<U>,
    connections: Arc<C>,
    enricher: AddressEnricher<L>,
}

impl<U, C, L> UserService<U, C, L>
where
    U: UserRepository,
    C: ConnectionRepository,
    L: AddressLookup,
{
    /// Create the service over its repositories and the address lookup.
    pub fn new(users: Arc<U>, connections: Arc<C>, lookup: Arc<L>) -> Self {
        Self {
            users,
            connections,
            enricher: AddressEnricher::new(lookup),
        }
    }

    async fn enrich_profile(&self, draft: UserDraft) -> Result<UserProfile, SocialError> {
        let address = self
            .enricher
            .enrich(
                &draft.address.zip_code,
                &draft.address.number,
                &draft.address.complement,
            )
            .await?;
        Ok(UserProfile::from_draft(draft, address))
    }
}

#[async_trait]
impl<U, C, L> UserCommand for UserService<U, C, L>
where
    U: UserRepository,
    C: ConnectionRepository,
    L: AddressLookup,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, SocialError> {
        validate_user_draft(&draft)?;
        let profile = self.enrich_profile(draft).await?;
        let user = self.users.create(&profile).await?;
        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Updates skip the validation chain; only enrichment guards the write.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, SocialError> {
        let profile = self.enrich_profile(draft).await?;
        let user = self
            .users
            .update(id, &profile)
            .await?
            .ok_or(SocialError::UnknownUser { id })?;
        info!(user_id = %id, "user updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), SocialError> {
        self.users.delete(id).await?;
        self.connections.delete_all_from(id).await?;
        self.connections.delete_all_to(id).await?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[async_trait]
impl<U, C, L> UserQuery for UserService<U, C, L>
where
    U: UserRepository,
    C: ConnectionRepository,
    L: AddressLookup,
{
    async fn list_users(&self) -> Result<Vec<User>, SocialError> {
        Ok(self.users.list().await?)
    }

    async fn get_user(&self, id: UserId) -> Result<User, SocialError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(SocialError::UnknownUser { id })
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, SocialError> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| SocialError::UnknownEmail {
                email: email.to_owned(),
            })
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
