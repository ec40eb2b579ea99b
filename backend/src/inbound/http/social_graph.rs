//! Follow graph handlers.
//!
//! ```text
//! PUT    /api/v1/users/{id}/following/{followingId}
//! DELETE /api/v1/users/{id}/following/{followingId}
//! GET    /api/v1/users/{id}/following
//! GET    /api/v1/users/{id}/followers
//! ```

use actix_web::{HttpResponse, delete, get, put, web};

use crate::domain::{User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::USER_ID;
use crate::inbound::http::validation::{FieldName, parse_id};

const FOLLOWING_ID: FieldName = FieldName::new("followingId");

fn parse_edge(path: (String, String)) -> ApiResult<(UserId, UserId)> {
    let (follower, following) = path;
    Ok((
        parse_id(follower, USER_ID)?,
        parse_id(following, FOLLOWING_ID)?,
    ))
}

/// Make `id` follow `followingId`.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/following/{followingId}",
    params(
        ("id" = i64, Path, description = "Follower"),
        ("followingId" = i64, Path, description = "User to follow")
    ),
    responses(
        (status = 204, description = "Follow created"),
        (status = 400, description = "Self follow or malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 409, description = "Already following", body = ErrorSchema)
    ),
    tags = ["social-graph"],
    operation_id = "followUser"
)]
#[put("/users/{id}/following/{following_id}")]
pub async fn follow_user(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (follower, following) = parse_edge(path.into_inner())?;
    state.graph.follow_user(follower, following).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Remove the edge from `id` to `followingId`; succeeds when absent.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}/following/{followingId}",
    params(
        ("id" = i64, Path, description = "Follower"),
        ("followingId" = i64, Path, description = "Followed user")
    ),
    responses(
        (status = 204, description = "Edge removed or absent"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema)
    ),
    tags = ["social-graph"],
    operation_id = "unfollowUser"
)]
#[delete("/users/{id}/following/{following_id}")]
pub async fn unfollow_user(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (follower, following) = parse_edge(path.into_inner())?;
    state.graph.delete_connection(follower, following).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Users that `id` follows, in follow order.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/following",
    params(("id" = i64, Path, description = "Follower")),
    responses(
        (status = 200, description = "Followed users", body = [UserSchema]),
        (status = 400, description = "Malformed identifier", body = ErrorSchema)
    ),
    tags = ["social-graph"],
    operation_id = "listFollowing"
)]
#[get("/users/{id}/following")]
pub async fn list_following(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<User>>> {
    let id: UserId = parse_id(path.into_inner(), USER_ID)?;
    Ok(web::Json(state.graph_query.following(id).await?))
}

/// Users that follow `id`, in follow order.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/followers",
    params(("id" = i64, Path, description = "Followed user")),
    responses(
        (status = 200, description = "Followers", body = [UserSchema]),
        (status = 400, description = "Malformed identifier", body = ErrorSchema)
    ),
    tags = ["social-graph"],
    operation_id = "listFollowers"
)]
#[get("/users/{id}/followers")]
pub async fn list_followers(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<User>>> {
    let id: UserId = parse_id(path.into_inner(), USER_ID)?;
    Ok(web::Json(state.graph_query.followers(id).await?))
}
