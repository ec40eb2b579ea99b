//! Domain primitives, aggregates and services.
//!
//! Purpose: define the strongly typed entities shared by the HTTP and
//! persistence layers, plus the services that implement the driving ports.
//! Services depend only on the traits in [`ports`]; adapters live under
//! `crate::outbound`.
//!
//! Public surface:
//! - Error / ErrorCode: API error response payload and stable identifier.
//! - SocialError: service-level failure taxonomy mapped onto `Error`.
//! - User, Post, Comment, Connection: the aggregates.
//! - UserService, SocialGraphService, PostService, CommentService: port
//!   implementations.

pub mod address_enrichment;
pub mod comment;
pub mod comment_service;
pub mod connection;
pub mod error;
pub mod ids;
pub mod ports;
pub mod post;
pub mod post_service;
pub mod reference_validator;
pub mod social_error;
pub mod social_graph_service;
pub mod trace_id;
pub mod user;
pub mod user_service;
pub mod user_validation;

pub use self::address_enrichment::AddressEnricher;
pub use self::comment::{Comment, CommentDraft, CommentEdit, NewComment};
pub use self::comment_service::CommentService;
pub use self::connection::Connection;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::{CommentId, PostId, UserId};
pub use self::post::{NewPost, Post, PostDraft, PostEdit};
pub use self::post_service::PostService;
pub use self::reference_validator::ReferenceValidator;
pub use self::social_error::{SocialError, StorageError};
pub use self::social_graph_service::SocialGraphService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Address, AddressDraft, SUPPORTED_COUNTRY, User, UserDraft, UserProfile};
pub use self::user_service::UserService;
pub use self::user_validation::{
    MAX_AGE, MIN_AGE, UserValidationError, validate_age, validate_country,
    validate_document_number, validate_email, validate_name, validate_number, validate_phone,
    validate_user_draft, validate_zip_code,
};
