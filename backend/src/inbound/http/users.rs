//! Users API handlers.
//!
//! ```text
//! GET    /api/v1/users
//! POST   /api/v1/users {"name":"Maria Silva","age":30,...}
//! GET    /api/v1/users/{id}
//! GET    /api/v1/users/email/{email}
//! PUT    /api/v1/users/{id}
//! DELETE /api/v1/users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserDraftSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id};

pub(crate) const USER_ID: FieldName = FieldName::new("id");

/// List registered users in store order.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Register a user.
///
/// The draft runs through the validation chain, then the postal code is
/// resolved to fill in state, city, neighbourhood and street.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserDraftSchema,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Invalid user", body = ErrorSchema),
        (status = 502, description = "Address lookup failed", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserDraft>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id: UserId = parse_id(path.into_inner(), USER_ID)?;
    let user = state.users_query.get_user(id).await?;
    Ok(web::Json(user))
}

/// Fetch a user by exact email.
#[utoipa::path(
    get,
    path = "/api/v1/users/email/{email}",
    params(("email" = String, Path, description = "Registered email")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "Unknown email", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserByEmail"
)]
#[get("/users/email/{email}")]
pub async fn get_user_by_email(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let user = state.users_query.get_user_by_email(&path.into_inner()).await?;
    Ok(web::Json(user))
}

/// Replace a user's attributes.
///
/// Unlike creation, updates are not run through the validation chain; only
/// address enrichment guards the write.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserDraftSchema,
    responses(
        (status = 200, description = "User updated", body = UserSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 502, description = "Address lookup failed", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserDraft>,
) -> ApiResult<web::Json<User>> {
    let id: UserId = parse_id(path.into_inner(), USER_ID)?;
    let user = state.users.update_user(id, payload.into_inner()).await?;
    Ok(web::Json(user))
}

/// Delete a user and every follow edge touching it.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 409, description = "User still owns posts or comments", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id: UserId = parse_id(path.into_inner(), USER_ID)?;
    state.users.delete_user(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
