//! Shared wiring for the behavioural suites.
//!
//! Services run over one in-memory store, a stub postal directory that only
//! knows `12246-260`, and a clock that only moves when a test says so. The
//! Diesel suite swaps the store for an embedded PostgreSQL cluster instead.

#![allow(dead_code, reason = "each suite uses a different subset of the harness")]

pub mod cluster_skip;
pub mod embedded_postgres;

pub use cluster_skip::handle_cluster_setup_failure;

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::Clock;
use socialbuddy::Trace;
use socialbuddy::domain::{CommentService, PostService, SocialGraphService, UserService};
use socialbuddy::inbound::http::configure_api;
use socialbuddy::inbound::http::state::{HttpState, HttpStatePorts};
use socialbuddy::outbound::memory::InMemoryStore;
use socialbuddy::test_support::{
    MutableClock, StubAddressLookup, aquarius_fragment, fixture_timestamp,
};

pub type Users = UserService<InMemoryStore, InMemoryStore, StubAddressLookup>;
pub type Graph = SocialGraphService<InMemoryStore, InMemoryStore>;
pub type Posts = PostService<InMemoryStore, InMemoryStore>;
pub type Comments = CommentService<InMemoryStore, InMemoryStore, InMemoryStore>;

pub struct Harness {
    pub lookup: Arc<StubAddressLookup>,
    pub clock: Arc<MutableClock>,
    pub users: Arc<Users>,
    pub graph: Arc<Graph>,
    pub posts: Arc<Posts>,
    pub comments: Arc<Comments>,
}

impl Harness {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let lookup = Arc::new(StubAddressLookup::new().with_entry("12246-260", aquarius_fragment()));
        let clock = Arc::new(MutableClock::new(fixture_timestamp()));
        let dyn_clock: Arc<dyn Clock> = clock.clone();

        let users = Arc::new(UserService::new(store.clone(), store.clone(), lookup.clone()));
        let graph = Arc::new(SocialGraphService::new(store.clone(), store.clone()));
        let posts = Arc::new(PostService::new(
            store.clone(),
            store.clone(),
            dyn_clock.clone(),
        ));
        let comments = Arc::new(CommentService::new(
            store.clone(),
            store.clone(),
            store,
            dyn_clock,
        ));

        Self {
            lookup,
            clock,
            users,
            graph,
            posts,
            comments,
        }
    }

    pub fn http_state(&self) -> HttpState {
        HttpState::new(HttpStatePorts {
            users: self.users.clone(),
            users_query: self.users.clone(),
            graph: self.graph.clone(),
            graph_query: self.graph.clone(),
            posts: self.posts.clone(),
            posts_query: self.posts.clone(),
            comments: self.comments.clone(),
            comments_query: self.comments.clone(),
        })
    }

    /// App serving `/api/v1` over this harness, wrapped in the trace middleware.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody + use<>>,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(self.http_state()))
            .wrap(Trace)
            .service(web::scope("/api/v1").configure(configure_api))
    }
}
