//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod comments;
pub mod error;
pub mod health;
pub mod posts;
pub mod schemas;
pub mod social_graph;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register every `/api/v1` route and the JSON body error handler.
///
/// Fixed-segment routes (`/users/email/{email}`, `/posts/title/{title}`,
/// `/posts/date/{date}`, `/comments/date/{date}`) are registered ahead of
/// the `{id}` routes they could shadow.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use socialbuddy::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(users::list_users)
        .service(users::create_user)
        .service(users::get_user_by_email)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(social_graph::follow_user)
        .service(social_graph::unfollow_user)
        .service(social_graph::list_following)
        .service(social_graph::list_followers)
        .service(posts::posts_by_user)
        .service(posts::delete_posts_by_user)
        .service(comments::comments_by_user)
        .service(posts::list_posts)
        .service(posts::create_post)
        .service(posts::posts_by_title)
        .service(posts::posts_by_date)
        .service(posts::get_post)
        .service(posts::edit_post)
        .service(posts::delete_post)
        .service(comments::comments_by_post)
        .service(comments::create_comment)
        .service(comments::list_comments)
        .service(comments::comments_by_date)
        .service(comments::get_comment)
        .service(comments::edit_comment)
        .service(comments::delete_comment);
}
