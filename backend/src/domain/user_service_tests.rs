//! Tests for the user lifecycle service.

use std::sync::Arc;

use mockall::Sequence;
use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    AddressFragment, AddressLookupError, ConnectionRepositoryError, MockAddressLookup,
    MockConnectionRepository, MockUserRepository, UserRepositoryError,
};
use crate::domain::{Address, AddressDraft, StorageError, UserValidationError};

type TestService = UserService<MockUserRepository, MockConnectionRepository, MockAddressLookup>;

fn service(
    users: MockUserRepository,
    connections: MockConnectionRepository,
    lookup: MockAddressLookup,
) -> TestService {
    UserService::new(Arc::new(users), Arc::new(connections), Arc::new(lookup))
}

#[fixture]
fn draft() -> UserDraft {
    UserDraft {
        name: "Maria Silva".to_owned(),
        age: 30,
        document_number: "123.456.789-00".to_owned(),
        email: "maria@example.com".to_owned(),
        phone: "+55 12 91234 5678".to_owned(),
        address: AddressDraft {
            zip_code: "12246-260".to_owned(),
            country: "Brasil".to_owned(),
            number: "456".to_owned(),
            complement: "C".to_owned(),
        },
    }
}

fn fragment() -> AddressFragment {
    AddressFragment {
        state: "SP".to_owned(),
        city: "São José dos Campos".to_owned(),
        neighborhood: "Parque Residencial Aquarius".to_owned(),
        street: "Avenida Salmão".to_owned(),
    }
}

fn expected_address() -> Address {
    Address {
        zip_code: "12246-260".to_owned(),
        country: "Brasil".to_owned(),
        state: "SP".to_owned(),
        city: "São José dos Campos".to_owned(),
        neighborhood: "Parque Residencial Aquarius".to_owned(),
        street: "Avenida Salmão".to_owned(),
        number: "456".to_owned(),
        complement: "C".to_owned(),
    }
}

fn resolving_lookup() -> MockAddressLookup {
    let mut lookup = MockAddressLookup::new();
    lookup
        .expect_lookup()
        .with(eq("12246-260"))
        .times(1)
        .return_once(|_| Ok(fragment()));
    lookup
}

#[rstest]
#[tokio::test]
async fn create_user_persists_enriched_profile(draft: UserDraft) {
    let mut users = MockUserRepository::new();
    users
        .expect_create()
        .withf(|profile| profile.address == expected_address() && profile.name == "Maria Silva")
        .times(1)
        .returning(|profile| Ok(User::new(UserId::new(1), profile.clone())));

    let user = service(users, MockConnectionRepository::new(), resolving_lookup())
        .create_user(draft)
        .await
        .expect("user created");

    assert_eq!(user.id, UserId::new(1));
    assert_eq!(user.profile.address, expected_address());
}

#[rstest]
#[tokio::test]
async fn create_user_rejects_invalid_draft_before_side_effects(mut draft: UserDraft) {
    draft.address.zip_code = "1234-890".to_owned();
    let mut users = MockUserRepository::new();
    users.expect_create().times(0);
    let mut lookup = MockAddressLookup::new();
    lookup.expect_lookup().times(0);

    let error = service(users, MockConnectionRepository::new(), lookup)
        .create_user(draft)
        .await
        .expect_err("invalid zip code");

    assert_eq!(
        error,
        SocialError::InvalidField(UserValidationError::InvalidZipCode)
    );
}

#[rstest]
#[tokio::test]
async fn create_user_stops_when_lookup_fails(draft: UserDraft) {
    let mut users = MockUserRepository::new();
    users.expect_create().times(0);
    let mut lookup = MockAddressLookup::new();
    lookup
        .expect_lookup()
        .times(1)
        .return_once(|_| Err(AddressLookupError::status("status 500")));

    let error = service(users, MockConnectionRepository::new(), lookup)
        .create_user(draft)
        .await
        .expect_err("lookup failed");

    assert!(matches!(error, SocialError::LookupFailed(_)));
}

#[rstest]
#[tokio::test]
async fn update_user_skips_validation_but_enriches(mut draft: UserDraft) {
    draft.age = 12;
    let mut users = MockUserRepository::new();
    users
        .expect_update()
        .withf(|id, profile| *id == UserId::new(4) && profile.age == 12)
        .times(1)
        .returning(|id, profile| Ok(Some(User::new(id, profile.clone()))));

    let user = service(users, MockConnectionRepository::new(), resolving_lookup())
        .update_user(UserId::new(4), draft)
        .await
        .expect("update accepted without validation");

    assert_eq!(user.profile.address, expected_address());
}

#[rstest]
#[tokio::test]
async fn update_user_reports_missing_row(draft: UserDraft) {
    let mut users = MockUserRepository::new();
    users.expect_update().times(1).returning(|_, _| Ok(None));

    let error = service(users, MockConnectionRepository::new(), resolving_lookup())
        .update_user(UserId::new(8), draft)
        .await
        .expect_err("unknown user");

    assert_eq!(error, SocialError::UnknownUser { id: UserId::new(8) });
}

#[tokio::test]
async fn delete_user_removes_row_then_outgoing_then_incoming_edges() {
    let mut seq = Sequence::new();
    let mut users = MockUserRepository::new();
    let mut connections = MockConnectionRepository::new();
    users
        .expect_delete()
        .with(eq(UserId::new(3)))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    connections
        .expect_delete_all_from()
        .with(eq(UserId::new(3)))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    connections
        .expect_delete_all_to()
        .with(eq(UserId::new(3)))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    service(users, connections, MockAddressLookup::new())
        .delete_user(UserId::new(3))
        .await
        .expect("user deleted");
}

#[tokio::test]
async fn delete_user_returns_first_failure_without_rollback() {
    let mut users = MockUserRepository::new();
    users.expect_delete().times(1).returning(|_| Ok(()));
    let mut connections = MockConnectionRepository::new();
    connections
        .expect_delete_all_from()
        .times(1)
        .returning(|_| Err(ConnectionRepositoryError::connection("pool closed")));
    connections.expect_delete_all_to().times(0);

    let error = service(users, connections, MockAddressLookup::new())
        .delete_user(UserId::new(3))
        .await
        .expect_err("edge cleanup failed");

    assert_eq!(
        error,
        SocialError::Storage(StorageError::Connection {
            message: "pool closed".to_owned()
        })
    );
}

#[tokio::test]
async fn delete_user_still_owning_posts_is_refused_before_edge_cleanup() {
    let mut users = MockUserRepository::new();
    users
        .expect_delete()
        .times(1)
        .returning(|_| Err(UserRepositoryError::foreign_key_violation("posts_user_id_fkey")));
    let mut connections = MockConnectionRepository::new();
    connections.expect_delete_all_from().times(0);
    connections.expect_delete_all_to().times(0);

    let error = service(users, connections, MockAddressLookup::new())
        .delete_user(UserId::new(3))
        .await
        .expect_err("user still referenced");

    assert!(matches!(error, SocialError::StillReferenced { .. }));
}

#[tokio::test]
async fn get_user_by_email_reports_unknown_email() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .with(eq("nobody@example.com"))
        .times(1)
        .returning(|_| Ok(None));

    let error = service(users, MockConnectionRepository::new(), MockAddressLookup::new())
        .get_user_by_email("nobody@example.com")
        .await
        .expect_err("unknown email");

    assert_eq!(
        error,
        SocialError::UnknownEmail {
            email: "nobody@example.com".to_owned()
        }
    );
}
