//! Posts API handlers.
//!
//! ```text
//! GET    /api/v1/posts
//! POST   /api/v1/posts {"userId":1,"title":"...","content":"..."}
//! GET    /api/v1/posts/{id}
//! GET    /api/v1/posts/title/{title}
//! GET    /api/v1/posts/date/{date}
//! PUT    /api/v1/posts/{id}
//! DELETE /api/v1/posts/{id}
//! GET    /api/v1/users/{id}/posts
//! DELETE /api/v1/users/{id}/posts
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Post, PostDraft, PostEdit, PostId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PostDraftSchema, PostEditSchema, PostSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::USER_ID;
use crate::inbound::http::validation::{FieldName, parse_date, parse_id};

pub(crate) const POST_ID: FieldName = FieldName::new("id");
pub(crate) const DATE: FieldName = FieldName::new("date");

/// List every post.
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    responses(
        (status = 200, description = "Posts", body = [PostSchema]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
#[get("/posts")]
pub async fn list_posts(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Post>>> {
    Ok(web::Json(state.posts_query.list_posts().await?))
}

/// Publish a post; the owner must exist and the server stamps `createdAt`.
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = PostDraftSchema,
    responses(
        (status = 201, description = "Post created", body = PostSchema),
        (status = 404, description = "Unknown owner", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    payload: web::Json<PostDraft>,
) -> ApiResult<HttpResponse> {
    let post = state.posts.create_post(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(post))
}

/// Fetch a post by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post", body = PostSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown post", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "getPost"
)]
#[get("/posts/{id}")]
pub async fn get_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Post>> {
    let id: PostId = parse_id(path.into_inner(), POST_ID)?;
    Ok(web::Json(state.posts_query.get_post(id).await?))
}

/// Posts whose title matches exactly.
#[utoipa::path(
    get,
    path = "/api/v1/posts/title/{title}",
    params(("title" = String, Path, description = "Exact title")),
    responses((status = 200, description = "Posts", body = [PostSchema])),
    tags = ["posts"],
    operation_id = "listPostsByTitle"
)]
#[get("/posts/title/{title}")]
pub async fn posts_by_title(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Post>>> {
    let title = path.into_inner();
    Ok(web::Json(state.posts_query.posts_by_title(&title).await?))
}

/// Posts stamped on the given UTC calendar day.
#[utoipa::path(
    get,
    path = "/api/v1/posts/date/{date}",
    params(("date" = String, Path, description = "UTC day as YYYY-MM-DD")),
    responses(
        (status = 200, description = "Posts", body = [PostSchema]),
        (status = 400, description = "Malformed date", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "listPostsByDate"
)]
#[get("/posts/date/{date}")]
pub async fn posts_by_date(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Post>>> {
    let date = parse_date(path.into_inner(), DATE)?;
    Ok(web::Json(state.posts_query.posts_by_date(date).await?))
}

/// Replace a post's title and content; `createdAt` is re-stamped.
#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = PostEditSchema,
    responses(
        (status = 200, description = "Post updated", body = PostSchema),
        (status = 404, description = "Unknown post", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "editPost"
)]
#[put("/posts/{id}")]
pub async fn edit_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<PostEdit>,
) -> ApiResult<web::Json<Post>> {
    let id: PostId = parse_id(path.into_inner(), POST_ID)?;
    Ok(web::Json(state.posts.edit_post(id, payload.into_inner()).await?))
}

/// Delete a post.
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 204, description = "Post deleted or absent"),
        (status = 409, description = "Post still has comments", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "deletePost"
)]
#[delete("/posts/{id}")]
pub async fn delete_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id: PostId = parse_id(path.into_inner(), POST_ID)?;
    state.posts.delete_post(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Posts owned by a user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/posts",
    params(("id" = i64, Path, description = "Owner")),
    responses((status = 200, description = "Posts", body = [PostSchema])),
    tags = ["posts"],
    operation_id = "listPostsByUser"
)]
#[get("/users/{id}/posts")]
pub async fn posts_by_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Post>>> {
    let id: UserId = parse_id(path.into_inner(), USER_ID)?;
    Ok(web::Json(state.posts_query.posts_by_user(id).await?))
}

/// Delete every post owned by a user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}/posts",
    params(("id" = i64, Path, description = "Owner")),
    responses(
        (status = 204, description = "Posts deleted"),
        (status = 409, description = "A post still has comments", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "deletePostsByUser"
)]
#[delete("/users/{id}/posts")]
pub async fn delete_posts_by_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id: UserId = parse_id(path.into_inner(), USER_ID)?;
    state.posts.delete_posts_by_user(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
