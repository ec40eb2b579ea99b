//! Builders for HTTP state ports and repository-backed services.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use socialbuddy::domain::ports::{
    AddressLookup, CommentRepository, ConnectionRepository, PostRepository, UserRepository,
};
use socialbuddy::domain::{CommentService, PostService, SocialGraphService, UserService};
use socialbuddy::inbound::http::state::{HttpState, HttpStatePorts};
use socialbuddy::outbound::memory::InMemoryStore;
use socialbuddy::outbound::persistence::{
    DbPool, DieselCommentRepository, DieselConnectionRepository, DieselPostRepository,
    DieselUserRepository,
};
use socialbuddy::outbound::viacep::ViaCepAddressLookup;
use tracing::info;

/// Repository adapters backing the four aggregates.
struct Repositories<U, C, P, M> {
    users: Arc<U>,
    connections: Arc<C>,
    posts: Arc<P>,
    comments: Arc<M>,
}

impl
    Repositories<
        DieselUserRepository,
        DieselConnectionRepository,
        DieselPostRepository,
        DieselCommentRepository,
    >
{
    fn diesel(pool: &DbPool) -> Self {
        Self {
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            connections: Arc::new(DieselConnectionRepository::new(pool.clone())),
            posts: Arc::new(DieselPostRepository::new(pool.clone())),
            comments: Arc::new(DieselCommentRepository::new(pool.clone())),
        }
    }
}

impl Repositories<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore> {
    fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            users: store.clone(),
            connections: store.clone(),
            posts: store.clone(),
            comments: store,
        }
    }
}

/// Wire the services over a set of repositories.
///
/// Each service backs both the command and the query port of its aggregate.
fn build_ports<U, C, P, M, L>(
    repos: Repositories<U, C, P, M>,
    lookup: Arc<L>,
    clock: Arc<dyn Clock>,
) -> HttpStatePorts
where
    U: UserRepository + 'static,
    C: ConnectionRepository + 'static,
    P: PostRepository + 'static,
    M: CommentRepository + 'static,
    L: AddressLookup + 'static,
{
    let Repositories {
        users,
        connections,
        posts,
        comments,
    } = repos;

    let user_service = Arc::new(UserService::new(
        users.clone(),
        connections.clone(),
        lookup,
    ));
    let graph_service = Arc::new(SocialGraphService::new(users.clone(), connections));
    let post_service = Arc::new(PostService::new(
        posts.clone(),
        users.clone(),
        clock.clone(),
    ));
    let comment_service = Arc::new(CommentService::new(comments, posts, users, clock));

    HttpStatePorts {
        users: user_service.clone(),
        users_query: user_service,
        graph: graph_service.clone(),
        graph_query: graph_service,
        posts: post_service.clone(),
        posts_query: post_service,
        comments: comment_service.clone(),
        comments_query: comment_service,
    }
}

/// Build HTTP state, choosing Diesel repositories when a pool is configured.
pub(super) fn build_http_state(
    db_pool: Option<&DbPool>,
    address_lookup: ViaCepAddressLookup,
) -> web::Data<HttpState> {
    let lookup = Arc::new(address_lookup);
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let ports = match db_pool {
        Some(pool) => build_ports(Repositories::diesel(pool), lookup, clock),
        None => {
            info!("no database configured; serving from the in-memory store");
            build_ports(Repositories::in_memory(), lookup, clock)
        }
    };
    web::Data::new(HttpState::new(ports))
}
