//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every `/api/v1` handler plus the health probes
//! - **Schemas**: domain type wrappers from
//!   [`crate::inbound::http::schemas`] that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::comments::CommentRequest;
use crate::inbound::http::schemas::{
    AddressDraftSchema, AddressSchema, CommentEditSchema, CommentSchema, ErrorCodeSchema,
    ErrorSchema, PostDraftSchema, PostEditSchema, PostSchema, UserDraftSchema, UserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SocialBuddy backend API",
        description = "Users, posts, comments and the follower graph."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::get_user_by_email,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::social_graph::follow_user,
        crate::inbound::http::social_graph::unfollow_user,
        crate::inbound::http::social_graph::list_following,
        crate::inbound::http::social_graph::list_followers,
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::get_post,
        crate::inbound::http::posts::posts_by_title,
        crate::inbound::http::posts::posts_by_date,
        crate::inbound::http::posts::edit_post,
        crate::inbound::http::posts::delete_post,
        crate::inbound::http::posts::posts_by_user,
        crate::inbound::http::posts::delete_posts_by_user,
        crate::inbound::http::comments::list_comments,
        crate::inbound::http::comments::get_comment,
        crate::inbound::http::comments::comments_by_date,
        crate::inbound::http::comments::edit_comment,
        crate::inbound::http::comments::delete_comment,
        crate::inbound::http::comments::comments_by_post,
        crate::inbound::http::comments::create_comment,
        crate::inbound::http::comments::comments_by_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        AddressDraftSchema,
        AddressSchema,
        UserDraftSchema,
        UserSchema,
        PostDraftSchema,
        PostEditSchema,
        PostSchema,
        CommentRequest,
        CommentEditSchema,
        CommentSchema
    )),
    tags(
        (name = "users", description = "User registration and lookup"),
        (name = "social-graph", description = "Follow edges between users"),
        (name = "posts", description = "Posts owned by users"),
        (name = "comments", description = "Comments on posts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema and path registration.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const USER_SCHEMA_NAME: &str = "crate.domain.User";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn openapi_user_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let user_schema = schemas.get(USER_SCHEMA_NAME).expect("User schema");

        assert_object_schema_has_field(user_schema, "id");
        assert_object_schema_has_field(user_schema, "documentNumber");
        assert_object_schema_has_field(user_schema, "address");
    }

    #[rstest]
    #[case("/api/v1/users")]
    #[case("/api/v1/users/{id}")]
    #[case("/api/v1/users/email/{email}")]
    #[case("/api/v1/users/{id}/following/{followingId}")]
    #[case("/api/v1/users/{id}/followers")]
    #[case("/api/v1/users/{id}/posts")]
    #[case("/api/v1/posts/date/{date}")]
    #[case("/api/v1/posts/{id}/comments")]
    #[case("/api/v1/comments/{id}")]
    #[case("/health/ready")]
    fn openapi_registers_paths(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }
}
