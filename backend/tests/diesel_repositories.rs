//! Integration tests for the Diesel repositories.
//!
//! Each test runs against its own migrated database on a shared embedded
//! PostgreSQL cluster. The suite covers the behaviour the in-memory store only
//! mirrors: edge ordering, the unique follow pair, foreign keys refusing
//! deletes, and UTC day filters.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use mockable::Clock;
use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use socialbuddy::domain::ports::{
    CommentRepository, CommentRepositoryError, ConnectionRepository, ConnectionRepositoryError,
    PostCommand, PostRepository, PostRepositoryError, SocialGraphCommand, SocialGraphQuery,
    UserCommand, UserRepository, UserRepositoryError,
};
use socialbuddy::domain::{
    Connection, NewComment, NewPost, Post, PostService, SocialError, SocialGraphService, User,
    UserId, UserProfile, UserService,
};
use socialbuddy::outbound::persistence::{
    DbPool, DieselCommentRepository, DieselConnectionRepository, DieselPostRepository,
    DieselUserRepository, PoolConfig,
};
use socialbuddy::test_support::{
    MutableClock, StubAddressLookup, aquarius_address, aquarius_fragment, fixture_timestamp,
    user_draft,
};
use tokio::runtime::Runtime;

mod support;

use support::embedded_postgres::{provision_migrated_database, shared_cluster_handle};
use support::handle_cluster_setup_failure;

type Users = UserService<DieselUserRepository, DieselConnectionRepository, StubAddressLookup>;
type Graph = SocialGraphService<DieselUserRepository, DieselConnectionRepository>;
type Posts = PostService<DieselPostRepository, DieselUserRepository>;

struct TestContext {
    runtime: Runtime,
    users: Arc<DieselUserRepository>,
    connections: Arc<DieselConnectionRepository>,
    posts: Arc<DieselPostRepository>,
    comments: Arc<DieselCommentRepository>,
    _database: TemporaryDatabase,
}

impl TestContext {
    fn user_service(&self) -> Users {
        let lookup = StubAddressLookup::new().with_entry("12246-260", aquarius_fragment());
        UserService::new(self.users.clone(), self.connections.clone(), Arc::new(lookup))
    }

    fn graph_service(&self) -> Graph {
        SocialGraphService::new(self.users.clone(), self.connections.clone())
    }

    fn post_service(&self) -> Posts {
        let clock: Arc<dyn Clock> = Arc::new(MutableClock::new(fixture_timestamp()));
        PostService::new(self.posts.clone(), self.users.clone(), clock)
    }

    fn seed_user(&self, name: &str, email: &str) -> User {
        let profile = UserProfile::from_draft(user_draft(name, email), aquarius_address());
        self.runtime
            .block_on(self.users.create(&profile))
            .expect("user insert succeeds")
    }

    fn seed_post(&self, user_id: UserId, created_at: DateTime<Utc>, title: &str) -> Post {
        let post = NewPost {
            user_id,
            created_at,
            title: title.to_owned(),
            content: format!("{title} body"),
        };
        self.runtime
            .block_on(self.posts.create(&post))
            .expect("post insert succeeds")
    }

    fn follow(&self, follower: &User, following: &User) {
        self.runtime
            .block_on(self.connections.insert(Connection::new(follower.id, following.id)))
            .expect("edge insert succeeds");
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = shared_cluster_handle().map_err(|err| format!("{err:?}"))?;
    let database = provision_migrated_database(&runtime, cluster)?;

    let config = PoolConfig::new(database.url())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        connections: Arc::new(DieselConnectionRepository::new(pool.clone())),
        posts: Arc::new(DieselPostRepository::new(pool.clone())),
        comments: Arc::new(DieselCommentRepository::new(pool)),
        _database: database,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn names(users: &[User]) -> Vec<&str> {
    users.iter().map(|user| user.profile.name.as_str()).collect()
}

#[rstest]
fn follow_listings_keep_edge_insertion_order(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: follow_listings_keep_edge_insertion_order skipped");
        return;
    };
    let ana = ctx.seed_user("Ana Souza", "ana@gmail.com");
    let bia = ctx.seed_user("Bia Lima", "bia@gmail.com");
    let caio = ctx.seed_user("Caio Reis", "caio@gmail.com");

    ctx.follow(&ana, &caio);
    ctx.follow(&ana, &bia);
    ctx.follow(&bia, &caio);

    let following = ctx
        .runtime
        .block_on(ctx.connections.list_following(ana.id))
        .expect("following listing succeeds");
    assert_eq!(names(&following), ["Caio Reis", "Bia Lima"]);

    let followers = ctx
        .runtime
        .block_on(ctx.connections.list_followers(caio.id))
        .expect("followers listing succeeds");
    assert_eq!(names(&followers), ["Ana Souza", "Bia Lima"]);
    assert_eq!(followers[0].profile.address, aquarius_address());
}

#[rstest]
fn duplicate_edge_is_refused_by_the_pair_constraint(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: duplicate_edge_is_refused_by_the_pair_constraint skipped");
        return;
    };
    let ana = ctx.seed_user("Ana Souza", "ana@gmail.com");
    let bia = ctx.seed_user("Bia Lima", "bia@gmail.com");
    ctx.follow(&ana, &bia);

    let error = ctx
        .runtime
        .block_on(ctx.connections.insert(Connection::new(ana.id, bia.id)))
        .expect_err("second insert of the pair fails");
    assert_eq!(error, ConnectionRepositoryError::Duplicate);

    ctx.runtime
        .block_on(ctx.connections.insert(Connection::new(bia.id, ana.id)))
        .expect("reverse edge is a different pair");
}

#[rstest]
fn duplicate_follow_surfaces_through_the_graph_service(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: duplicate_follow_surfaces_through_the_graph_service skipped");
        return;
    };
    let ana = ctx.seed_user("Ana Souza", "ana@gmail.com");
    let bia = ctx.seed_user("Bia Lima", "bia@gmail.com");
    let graph = ctx.graph_service();

    ctx.runtime
        .block_on(graph.follow_user(ana.id, bia.id))
        .expect("first follow succeeds");
    let error = ctx
        .runtime
        .block_on(graph.follow_user(ana.id, bia.id))
        .expect_err("repeat follow fails");
    assert_eq!(
        error,
        SocialError::DuplicateFollow {
            follower: ana.id,
            following: bia.id,
        }
    );

    let following = ctx
        .runtime
        .block_on(graph.following(ana.id))
        .expect("following succeeds");
    assert_eq!(names(&following), ["Bia Lima"]);
}

#[rstest]
fn deleting_a_user_removes_every_edge_touching_it(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: deleting_a_user_removes_every_edge_touching_it skipped");
        return;
    };
    let ana = ctx.seed_user("Ana Souza", "ana@gmail.com");
    let bia = ctx.seed_user("Bia Lima", "bia@gmail.com");
    let caio = ctx.seed_user("Caio Reis", "caio@gmail.com");
    ctx.follow(&ana, &bia);
    ctx.follow(&bia, &caio);
    ctx.follow(&caio, &ana);

    ctx.runtime
        .block_on(ctx.user_service().delete_user(bia.id))
        .expect("delete succeeds");

    let gone = ctx
        .runtime
        .block_on(ctx.users.find_by_id(bia.id))
        .expect("lookup succeeds");
    assert!(gone.is_none());

    let (ana_following, caio_followers, ana_followers) = ctx.runtime.block_on(async {
        (
            ctx.connections.list_following(ana.id).await,
            ctx.connections.list_followers(caio.id).await,
            ctx.connections.list_followers(ana.id).await,
        )
    });
    assert!(ana_following.expect("listing succeeds").is_empty());
    assert!(caio_followers.expect("listing succeeds").is_empty());
    assert_eq!(names(&ana_followers.expect("listing succeeds")), ["Caio Reis"]);
}

#[rstest]
fn deleting_a_user_with_posts_is_refused_and_keeps_edges(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: deleting_a_user_with_posts_is_refused_and_keeps_edges skipped");
        return;
    };
    let ana = ctx.seed_user("Ana Souza", "ana@gmail.com");
    let bia = ctx.seed_user("Bia Lima", "bia@gmail.com");
    ctx.follow(&bia, &ana);
    ctx.seed_post(ana.id, fixture_timestamp(), "Hello");

    let repo_error = ctx
        .runtime
        .block_on(ctx.users.delete(ana.id))
        .expect_err("owning user cannot be deleted");
    assert!(matches!(
        repo_error,
        UserRepositoryError::ForeignKeyViolation { .. }
    ));

    let error = ctx
        .runtime
        .block_on(ctx.user_service().delete_user(ana.id))
        .expect_err("service delete is refused");
    assert!(matches!(error, SocialError::StillReferenced { .. }));

    let followers = ctx
        .runtime
        .block_on(ctx.connections.list_followers(ana.id))
        .expect("listing succeeds");
    assert_eq!(names(&followers), ["Bia Lima"]);
}

#[rstest]
fn deleting_a_post_with_comments_is_refused(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: deleting_a_post_with_comments_is_refused skipped");
        return;
    };
    let ana = ctx.seed_user("Ana Souza", "ana@gmail.com");
    let post = ctx.seed_post(ana.id, fixture_timestamp(), "Hello");
    let comment = NewComment {
        post_id: post.id,
        user_id: ana.id,
        created_at: fixture_timestamp(),
        content: "First".to_owned(),
    };
    ctx.runtime
        .block_on(ctx.comments.create(&comment))
        .expect("comment insert succeeds");

    let repo_error = ctx
        .runtime
        .block_on(ctx.posts.delete(post.id))
        .expect_err("commented post cannot be deleted");
    assert!(matches!(
        repo_error,
        PostRepositoryError::ForeignKeyViolation { .. }
    ));

    let error = ctx
        .runtime
        .block_on(ctx.post_service().delete_post(post.id))
        .expect_err("service delete is refused");
    assert!(matches!(error, SocialError::StillReferenced { .. }));

    let still_there = ctx
        .runtime
        .block_on(ctx.posts.find_by_id(post.id))
        .expect("lookup succeeds");
    assert_eq!(still_there, Some(post));
}

#[rstest]
fn comment_on_missing_post_violates_the_foreign_key(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: comment_on_missing_post_violates_the_foreign_key skipped");
        return;
    };
    let ana = ctx.seed_user("Ana Souza", "ana@gmail.com");
    let post = ctx.seed_post(ana.id, fixture_timestamp(), "Hello");
    let orphan = NewComment {
        post_id: (post.id.get() + 1000).into(),
        user_id: ana.id,
        created_at: fixture_timestamp(),
        content: "Nobody home".to_owned(),
    };

    let error = ctx
        .runtime
        .block_on(ctx.comments.create(&orphan))
        .expect_err("orphan comment is refused");
    assert!(matches!(
        error,
        CommentRepositoryError::ForeignKeyViolation { .. }
    ));
}

#[rstest]
fn date_filter_uses_the_utc_calendar_day(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: date_filter_uses_the_utc_calendar_day skipped");
        return;
    };
    let ana = ctx.seed_user("Ana Souza", "ana@gmail.com");
    let day_start = fixture_timestamp()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight exists")
        .and_utc();

    let first = ctx.seed_post(ana.id, day_start, "Midnight");
    let next_day = day_start + Duration::days(1);
    let last = ctx.seed_post(ana.id, next_day - Duration::seconds(1), "Late");
    ctx.seed_post(ana.id, next_day, "Tomorrow");
    ctx.seed_post(ana.id, day_start - Duration::seconds(1), "Yesterday");

    let day = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
    let posts = ctx
        .runtime
        .block_on(ctx.posts.list_by_date(day))
        .expect("date filter succeeds");
    let ids: Vec<_> = posts.iter().map(|post| post.id).collect();
    assert_eq!(ids, [first.id, last.id]);
}
