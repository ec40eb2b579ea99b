//! Comments API handlers.
//!
//! ```text
//! GET    /api/v1/comments
//! GET    /api/v1/comments/{id}
//! GET    /api/v1/comments/date/{date}
//! PUT    /api/v1/comments/{id}
//! DELETE /api/v1/comments/{id}
//! GET    /api/v1/posts/{id}/comments
//! POST   /api/v1/posts/{id}/comments {"userId":1,"content":"..."}
//! GET    /api/v1/users/{id}/comments
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Comment, CommentDraft, CommentEdit, CommentId, PostId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::posts::{DATE, POST_ID};
use crate::inbound::http::schemas::{CommentEditSchema, CommentSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::USER_ID;
use crate::inbound::http::validation::{FieldName, parse_date, parse_id};

const COMMENT_ID: FieldName = FieldName::new("id");

/// Request payload for `POST /api/v1/posts/{id}/comments`.
///
/// The post comes from the path.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    #[schema(example = 1)]
    pub user_id: i64,
    pub content: String,
}

impl CommentRequest {
    fn into_draft(self, post_id: PostId) -> CommentDraft {
        CommentDraft {
            post_id,
            user_id: UserId::new(self.user_id),
            content: self.content,
        }
    }
}

/// List every comment.
#[utoipa::path(
    get,
    path = "/api/v1/comments",
    responses((status = 200, description = "Comments", body = [CommentSchema])),
    tags = ["comments"],
    operation_id = "listComments"
)]
#[get("/comments")]
pub async fn list_comments(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Comment>>> {
    Ok(web::Json(state.comments_query.list_comments().await?))
}

/// Fetch a comment by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Comment", body = CommentSchema),
        (status = 404, description = "Unknown comment", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "getComment"
)]
#[get("/comments/{id}")]
pub async fn get_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Comment>> {
    let id: CommentId = parse_id(path.into_inner(), COMMENT_ID)?;
    Ok(web::Json(state.comments_query.get_comment(id).await?))
}

/// Comments stamped on the given UTC calendar day.
#[utoipa::path(
    get,
    path = "/api/v1/comments/date/{date}",
    params(("date" = String, Path, description = "UTC day as YYYY-MM-DD")),
    responses(
        (status = 200, description = "Comments", body = [CommentSchema]),
        (status = 400, description = "Malformed date", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "listCommentsByDate"
)]
#[get("/comments/date/{date}")]
pub async fn comments_by_date(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Comment>>> {
    let date = parse_date(path.into_inner(), DATE)?;
    Ok(web::Json(state.comments_query.comments_by_date(date).await?))
}

/// Replace a comment's content; `createdAt` is re-stamped.
#[utoipa::path(
    put,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment identifier")),
    request_body = CommentEditSchema,
    responses(
        (status = 200, description = "Comment updated", body = CommentSchema),
        (status = 404, description = "Unknown comment", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "editComment"
)]
#[put("/comments/{id}")]
pub async fn edit_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CommentEdit>,
) -> ApiResult<web::Json<Comment>> {
    let id: CommentId = parse_id(path.into_inner(), COMMENT_ID)?;
    Ok(web::Json(
        state.comments.edit_comment(id, payload.into_inner()).await?,
    ))
}

/// Delete a comment.
#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment identifier")),
    responses((status = 204, description = "Comment deleted or absent")),
    tags = ["comments"],
    operation_id = "deleteComment"
)]
#[delete("/comments/{id}")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id: CommentId = parse_id(path.into_inner(), COMMENT_ID)?;
    state.comments.delete_comment(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Comments answering a post.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}/comments",
    params(("id" = i64, Path, description = "Post identifier")),
    responses((status = 200, description = "Comments", body = [CommentSchema])),
    tags = ["comments"],
    operation_id = "listCommentsByPost"
)]
#[get("/posts/{id}/comments")]
pub async fn comments_by_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Comment>>> {
    let id: PostId = parse_id(path.into_inner(), POST_ID)?;
    Ok(web::Json(state.comments_query.comments_by_post(id).await?))
}

/// Answer a post; both the post and the author must exist.
#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/comments",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentSchema),
        (status = 404, description = "Unknown post or author", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "createComment"
)]
#[post("/posts/{id}/comments")]
pub async fn create_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CommentRequest>,
) -> ApiResult<HttpResponse> {
    let post_id: PostId = parse_id(path.into_inner(), POST_ID)?;
    let draft = payload.into_inner().into_draft(post_id);
    let comment = state.comments.create_comment(draft).await?;
    Ok(HttpResponse::Created().json(comment))
}

/// Comments written by a user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/comments",
    params(("id" = i64, Path, description = "Author")),
    responses((status = 200, description = "Comments", body = [CommentSchema])),
    tags = ["comments"],
    operation_id = "listCommentsByUser"
)]
#[get("/users/{id}/comments")]
pub async fn comments_by_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Comment>>> {
    let id: UserId = parse_id(path.into_inner(), USER_ID)?;
    Ok(web::Json(state.comments_query.comments_by_user(id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SocialError;
    use crate::inbound::http::test_utils::MockPorts;
    use crate::test_support::fixture_timestamp;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use mockall::predicate::eq;
    use serde_json::{Value, json};

    fn comment(id: i64, post_id: i64) -> Comment {
        Comment {
            id: CommentId::new(id),
            post_id: PostId::new(post_id),
            user_id: UserId::new(1),
            created_at: fixture_timestamp(),
            content: "Lovely".to_owned(),
        }
    }

    #[actix_web::test]
    async fn create_comment_takes_the_post_from_the_path() {
        let mut ports = MockPorts::default();
        ports
            .comments
            .expect_create_comment()
            .with(eq(CommentDraft {
                post_id: PostId::new(7),
                user_id: UserId::new(1),
                content: "Lovely".to_owned(),
            }))
            .times(1)
            .returning(|draft| Ok(comment(3, draft.post_id.get())));
        let app = actix_test::init_service(ports.into_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/posts/7/comments")
            .set_json(json!({"userId": 1, "content": "Lovely"}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["postId"], 7);
    }

    #[actix_web::test]
    async fn create_comment_on_missing_post_is_not_found() {
        let mut ports = MockPorts::default();
        ports
            .comments
            .expect_create_comment()
            .times(1)
            .returning(|draft| Err(SocialError::UnknownPost { id: draft.post_id }));
        let app = actix_test::init_service(ports.into_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/posts/99/comments")
            .set_json(json!({"userId": 1, "content": "Hello?"}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["code"], "unknown_post");
    }

    #[actix_web::test]
    async fn get_comment_reports_unknown_comment() {
        let mut ports = MockPorts::default();
        ports
            .comments_query
            .expect_get_comment()
            .with(eq(CommentId::new(5)))
            .times(1)
            .returning(|id| Err(SocialError::UnknownComment { id }));
        let app = actix_test::init_service(ports.into_app()).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/comments/5")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn listings_by_post_and_user_reach_the_query_port() {
        let mut ports = MockPorts::default();
        ports
            .comments_query
            .expect_comments_by_post()
            .with(eq(PostId::new(7)))
            .times(1)
            .returning(|_| Ok(vec![comment(1, 7), comment(2, 7)]));
        ports
            .comments_query
            .expect_comments_by_user()
            .with(eq(UserId::new(1)))
            .times(1)
            .returning(|_| Ok(Vec::new()));
        let app = actix_test::init_service(ports.into_app()).await;

        let by_post = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/posts/7/comments")
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(by_post).await;
        assert_eq!(body.as_array().map(Vec::len), Some(2));

        let by_user = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users/1/comments")
                .to_request(),
        )
        .await;
        assert_eq!(by_user.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn edit_and_delete_use_the_path_id() {
        let mut ports = MockPorts::default();
        ports
            .comments
            .expect_edit_comment()
            .withf(|id, edit| *id == CommentId::new(4) && edit.content == "Edited")
            .times(1)
            .returning(|id, edit| {
                Ok(Comment {
                    content: edit.content,
                    ..comment(id.get(), 7)
                })
            });
        ports
            .comments
            .expect_delete_comment()
            .with(eq(CommentId::new(4)))
            .times(1)
            .returning(|_| Ok(()));
        let app = actix_test::init_service(ports.into_app()).await;

        let edited = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/api/v1/comments/4")
                .set_json(json!({"content": "Edited"}))
                .to_request(),
        )
        .await;
        assert_eq!(edited.status(), StatusCode::OK);

        let deleted = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/v1/comments/4")
                .to_request(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn comments_by_date_rejects_malformed_dates() {
        let app = actix_test::init_service(MockPorts::default().into_app()).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/comments/date/yesterday")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
