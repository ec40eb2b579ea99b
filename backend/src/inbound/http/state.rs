//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CommentCommand, CommentQuery, PostCommand, PostQuery, SocialGraphCommand, SocialGraphQuery,
    UserCommand, UserQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UserQuery>,
    pub graph: Arc<dyn SocialGraphCommand>,
    pub graph_query: Arc<dyn SocialGraphQuery>,
    pub posts: Arc<dyn PostCommand>,
    pub posts_query: Arc<dyn PostQuery>,
    pub comments: Arc<dyn CommentCommand>,
    pub comments_query: Arc<dyn CommentQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UserQuery>,
    pub graph: Arc<dyn SocialGraphCommand>,
    pub graph_query: Arc<dyn SocialGraphQuery>,
    pub posts: Arc<dyn PostCommand>,
    pub posts_query: Arc<dyn PostQuery>,
    pub comments: Arc<dyn CommentCommand>,
    pub comments_query: Arc<dyn CommentQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from the port implementations.
    ///
    /// A single service value usually backs both the command and the query
    /// port of its aggregate; see `server::state_builders`.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users,
            users_query,
            graph,
            graph_query,
            posts,
            posts_query,
            comments,
            comments_query,
        } = ports;
        Self {
            users,
            users_query,
            graph,
            graph_query,
            posts,
            posts_query,
            comments,
            comments_query,
        }
    }
}
