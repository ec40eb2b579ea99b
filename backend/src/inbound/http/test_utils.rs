//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{
    MockCommentCommand, MockCommentQuery, MockPostCommand, MockPostQuery,
    MockSocialGraphCommand, MockSocialGraphQuery, MockUserCommand, MockUserQuery,
};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Mocked driving ports; set expectations, then call [`MockPorts::into_app`].
///
/// Ports left untouched reject every call, so each test only describes the
/// port its route should reach.
#[derive(Default)]
pub struct MockPorts {
    pub users: MockUserCommand,
    pub users_query: MockUserQuery,
    pub graph: MockSocialGraphCommand,
    pub graph_query: MockSocialGraphQuery,
    pub posts: MockPostCommand,
    pub posts_query: MockPostQuery,
    pub comments: MockCommentCommand,
    pub comments_query: MockCommentQuery,
}

impl MockPorts {
    fn into_state(self) -> HttpState {
        HttpState::from(HttpStatePorts {
            users: Arc::new(self.users),
            users_query: Arc::new(self.users_query),
            graph: Arc::new(self.graph),
            graph_query: Arc::new(self.graph_query),
            posts: Arc::new(self.posts),
            posts_query: Arc::new(self.posts_query),
            comments: Arc::new(self.comments),
            comments_query: Arc::new(self.comments_query),
        })
    }

    /// Build an app serving the API routes over these mocks.
    pub fn into_app(
        self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.into_state()))
            .service(web::scope("/api/v1").configure(configure_api))
    }
}
