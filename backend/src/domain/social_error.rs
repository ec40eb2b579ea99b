//! Failure taxonomy shared by the user, graph, post and comment services.
//!
//! Services return [`SocialError`]. Inbound adapters convert it into the
//! transport-agnostic [`Error`] payload, which fixes the status class and
//! attaches a stable `details.code`.

use serde_json::json;
use thiserror::Error as ThisError;

use super::ports::{
    AddressLookupError, CommentRepositoryError, ConnectionRepositoryError, PostRepositoryError,
    UserRepositoryError,
};
use super::{CommentId, Error, PostId, UserId, UserValidationError};

/// Storage failure kinds, propagated unchanged and never retried.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum StorageError {
    /// The store could not be reached.
    #[error("storage unavailable: {message}")]
    Connection {
        /// Adapter-provided detail.
        message: String,
    },
    /// A query or mutation failed.
    #[error("storage query failed: {message}")]
    Query {
        /// Adapter-provided detail.
        message: String,
    },
}

/// Errors raised by the social domain services.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SocialError {
    /// A candidate user failed the validation chain.
    #[error(transparent)]
    InvalidField(#[from] UserValidationError),
    /// A referenced or addressed user does not exist.
    #[error("user {id} does not exist")]
    UnknownUser {
        /// Missing identifier.
        id: UserId,
    },
    /// A referenced or addressed post does not exist.
    #[error("post {id} does not exist")]
    UnknownPost {
        /// Missing identifier.
        id: PostId,
    },
    /// An addressed comment does not exist.
    #[error("comment {id} does not exist")]
    UnknownComment {
        /// Missing identifier.
        id: CommentId,
    },
    /// No user is registered with the email.
    #[error("no user is registered with email {email}")]
    UnknownEmail {
        /// Requested email.
        email: String,
    },
    /// Address enrichment failed.
    #[error("address lookup failed: {0}")]
    LookupFailed(#[from] AddressLookupError),
    /// A user tried to follow itself.
    #[error("user {id} cannot follow itself")]
    SelfFollowNotAllowed {
        /// The user on both ends.
        id: UserId,
    },
    /// The follow edge already exists.
    #[error("user {follower} already follows user {following}")]
    DuplicateFollow {
        /// Follower end.
        follower: UserId,
        /// Followed end.
        following: UserId,
    },
    /// A delete was refused because other rows still reference the target.
    #[error("{message}")]
    StillReferenced {
        /// What still holds the reference.
        message: String,
    },
    /// The store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SocialError {
    /// Stable machine-readable code used in error details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidField(inner) => inner.code(),
            Self::UnknownUser { .. } => "unknown_user",
            Self::UnknownPost { .. } => "unknown_post",
            Self::UnknownComment { .. } => "unknown_comment",
            Self::UnknownEmail { .. } => "unknown_email",
            Self::LookupFailed(_) => "lookup_failed",
            Self::SelfFollowNotAllowed { .. } => "self_follow_not_allowed",
            Self::DuplicateFollow { .. } => "duplicate_follow",
            Self::StillReferenced { .. } => "still_referenced",
            Self::Storage(StorageError::Connection { .. }) => "storage_unavailable",
            Self::Storage(StorageError::Query { .. }) => "storage_failed",
        }
    }
}

impl From<UserRepositoryError> for SocialError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::Connection { message } => {
                StorageError::Connection { message }.into()
            }
            UserRepositoryError::Query { message } => StorageError::Query { message }.into(),
            UserRepositoryError::ForeignKeyViolation { .. } => Self::StillReferenced {
                message: "user still owns posts or comments".to_owned(),
            },
        }
    }
}

impl From<ConnectionRepositoryError> for SocialError {
    fn from(error: ConnectionRepositoryError) -> Self {
        match error {
            ConnectionRepositoryError::Connection { message } => {
                StorageError::Connection { message }.into()
            }
            ConnectionRepositoryError::Query { message } => StorageError::Query { message }.into(),
            ConnectionRepositoryError::Duplicate => StorageError::Query {
                message: "unexpected duplicate follow edge".to_owned(),
            }
            .into(),
        }
    }
}

impl From<PostRepositoryError> for SocialError {
    fn from(error: PostRepositoryError) -> Self {
        match error {
            PostRepositoryError::Connection { message } => {
                StorageError::Connection { message }.into()
            }
            PostRepositoryError::Query { message } => StorageError::Query { message }.into(),
            PostRepositoryError::ForeignKeyViolation { .. } => Self::StillReferenced {
                message: "post still has comments".to_owned(),
            },
        }
    }
}

impl From<CommentRepositoryError> for SocialError {
    fn from(error: CommentRepositoryError) -> Self {
        match error {
            CommentRepositoryError::Connection { message } => {
                StorageError::Connection { message }.into()
            }
            CommentRepositoryError::Query { message } => StorageError::Query { message }.into(),
            CommentRepositoryError::ForeignKeyViolation { message } => {
                StorageError::Query { message }.into()
            }
        }
    }
}

impl From<SocialError> for Error {
    fn from(error: SocialError) -> Self {
        let code = error.code();
        let message = error.to_string();
        match &error {
            SocialError::InvalidField(inner) => Error::invalid_request(message)
                .with_details(json!({ "field": inner.field(), "code": code })),
            SocialError::SelfFollowNotAllowed { .. } => {
                Error::invalid_request(message).with_details(json!({ "code": code }))
            }
            SocialError::UnknownUser { .. }
            | SocialError::UnknownPost { .. }
            | SocialError::UnknownComment { .. }
            | SocialError::UnknownEmail { .. } => {
                Error::not_found(message).with_details(json!({ "code": code }))
            }
            SocialError::DuplicateFollow { .. } | SocialError::StillReferenced { .. } => {
                Error::conflict(message).with_details(json!({ "code": code }))
            }
            SocialError::LookupFailed(_) => {
                Error::bad_gateway(message).with_details(json!({ "code": code }))
            }
            SocialError::Storage(StorageError::Connection { .. }) => {
                Error::service_unavailable("storage is temporarily unavailable")
                    .with_details(json!({ "code": code }))
            }
            SocialError::Storage(StorageError::Query { .. }) => Error::internal(message),
        }
    }
}
