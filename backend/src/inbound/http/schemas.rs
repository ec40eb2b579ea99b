//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the JSON shape of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with the current state.
    #[schema(rename = "conflict")]
    Conflict,
    /// An upstream dependency failed.
    #[schema(rename = "bad_gateway")]
    BadGateway,
    /// A required backend is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "user 9 does not exist")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details such as `code` and `field`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::AddressDraft`].
#[derive(ToSchema)]
#[schema(as = crate::domain::AddressDraft, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AddressDraftSchema {
    #[schema(example = "12246-260")]
    zip_code: String,
    #[schema(example = "Brasil")]
    country: String,
    #[schema(example = "456")]
    number: String,
    #[schema(example = "C")]
    complement: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Address`].
///
/// State, city, neighbourhood and street come from the postal directory.
#[derive(ToSchema)]
#[schema(as = crate::domain::Address, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AddressSchema {
    #[schema(example = "12246-260")]
    zip_code: String,
    #[schema(example = "Brasil")]
    country: String,
    #[schema(example = "SP")]
    state: String,
    #[schema(example = "São José dos Campos")]
    city: String,
    #[schema(example = "Parque Residencial Aquarius")]
    neighborhood: String,
    #[schema(example = "Avenida Salmão")]
    street: String,
    #[schema(example = "456")]
    number: String,
    #[schema(example = "C")]
    complement: String,
}

/// OpenAPI schema for [`crate::domain::UserDraft`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserDraft, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserDraftSchema {
    #[schema(example = "Maria Silva")]
    name: String,
    #[schema(example = 30, minimum = 18, maximum = 100)]
    age: i32,
    #[schema(example = "123.456.789-00")]
    document_number: String,
    #[schema(example = "maria@example.com")]
    email: String,
    #[schema(example = "+55 12 91234 5678")]
    phone: String,
    address: AddressDraftSchema,
}

/// OpenAPI schema for [`crate::domain::User`].
///
/// Registered user with store-assigned identifier and enriched address.
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Maria Silva")]
    name: String,
    #[schema(example = 30)]
    age: i32,
    #[schema(example = "123.456.789-00")]
    document_number: String,
    #[schema(example = "maria@example.com")]
    email: String,
    #[schema(example = "+55 12 91234 5678")]
    phone: String,
    address: AddressSchema,
}

/// OpenAPI schema for [`crate::domain::PostDraft`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PostDraft, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PostDraftSchema {
    #[schema(example = 1)]
    user_id: i64,
    #[schema(example = "First light")]
    title: String,
    #[schema(example = "Sunrise over the Paraíba valley.")]
    content: String,
}

/// OpenAPI schema for [`crate::domain::PostEdit`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PostEdit, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PostEditSchema {
    title: String,
    content: String,
}

/// OpenAPI schema for [`crate::domain::Post`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Post, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PostSchema {
    #[schema(example = 7)]
    id: i64,
    #[schema(example = 1)]
    user_id: i64,
    /// Creation time, re-stamped on every edit.
    #[schema(value_type = String, format = DateTime, example = "2024-03-15T10:30:00Z")]
    created_at: String,
    title: String,
    content: String,
}

/// OpenAPI schema for [`crate::domain::CommentDraft`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CommentDraft, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CommentDraftSchema {
    #[schema(example = 7)]
    post_id: i64,
    #[schema(example = 1)]
    user_id: i64,
    content: String,
}

/// OpenAPI schema for [`crate::domain::CommentEdit`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CommentEdit, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CommentEditSchema {
    content: String,
}

/// OpenAPI schema for [`crate::domain::Comment`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Comment, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CommentSchema {
    #[schema(example = 3)]
    id: i64,
    #[schema(example = 7)]
    post_id: i64,
    #[schema(example = 1)]
    user_id: i64,
    #[schema(value_type = String, format = DateTime, example = "2024-03-15T10:30:00Z")]
    created_at: String,
    content: String,
}
