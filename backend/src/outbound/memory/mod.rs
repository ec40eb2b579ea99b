//! In-memory adapter implementing every repository port.
//!
//! Used when no database URL is configured and by the integration suites.
//! It mirrors the PostgreSQL schema's constraints: posts and comments check
//! their foreign keys on insert and block deletes of the rows they reference,
//! while follow edges carry only the uniqueness constraint.
//!
//! All state sits behind one [`std::sync::Mutex`]. The guard is never held
//! across an `.await`, so every operation is a single critical section.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, ConnectionRepository, ConnectionRepositoryError,
    PostRepository, PostRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Comment, CommentEdit, CommentId, Connection, NewComment, NewPost, Post, PostEdit, PostId,
    User, UserId, UserProfile,
};

const POISONED: &str = "in-memory store lock poisoned";

#[derive(Debug, Default)]
struct StoreState {
    last_user_id: i64,
    last_post_id: i64,
    last_comment_id: i64,
    users: BTreeMap<UserId, UserProfile>,
    posts: BTreeMap<PostId, Post>,
    comments: BTreeMap<CommentId, Comment>,
    connections: Vec<Connection>,
}

impl StoreState {
    fn user(&self, id: UserId) -> Option<User> {
        self.users
            .get(&id)
            .map(|profile| User::new(id, profile.clone()))
    }

    fn users_for(&self, ids: impl Iterator<Item = UserId>) -> Vec<User> {
        ids.filter_map(|id| self.user(id)).collect()
    }

    fn user_referenced_by(&self, id: UserId) -> Option<&'static str> {
        if self.posts.values().any(|post| post.user_id == id) {
            Some("posts_user_id_fkey")
        } else if self.comments.values().any(|comment| comment.user_id == id) {
            Some("comments_user_id_fkey")
        } else {
            None
        }
    }

    fn post_has_comments(&self, id: PostId) -> bool {
        self.comments.values().any(|comment| comment.post_id == id)
    }
}

/// Process-local store implementing the user, connection, post and comment
/// repositories.
///
/// Identifiers are assigned from per-table counters starting at 1 and are
/// never reused. Listings come back in identifier order; follow listings
/// come back in edge insertion order.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use socialbuddy::outbound::memory::InMemoryStore;
///
/// let store = Arc::new(InMemoryStore::new());
/// let _users = Arc::clone(&store);
/// let _posts = store;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T, E>(
        &self,
        poisoned: impl FnOnce(&'static str) -> E,
        op: impl FnOnce(&mut StoreState) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut state = self.state.lock().map_err(|_| poisoned(POISONED))?;
        op(&mut state)
    }
}

fn on_utc_day(at: DateTime<Utc>, date: NaiveDate) -> bool {
    at.date_naive() == date
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, profile: &UserProfile) -> Result<User, UserRepositoryError> {
        self.with_state(UserRepositoryError::query, |state| {
            state.last_user_id += 1;
            let id = UserId::new(state.last_user_id);
            state.users.insert(id, profile.clone());
            Ok(User::new(id, profile.clone()))
        })
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        self.with_state(UserRepositoryError::query, |state| {
            Ok(state
                .users
                .iter()
                .map(|(id, profile)| User::new(*id, profile.clone()))
                .collect())
        })
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        self.with_state(UserRepositoryError::query, |state| Ok(state.user(id)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        self.with_state(UserRepositoryError::query, |state| {
            Ok(state
                .users
                .iter()
                .find(|(_, profile)| profile.email == email)
                .map(|(id, profile)| User::new(*id, profile.clone())))
        })
    }

    async fn update(
        &self,
        id: UserId,
        profile: &UserProfile,
    ) -> Result<Option<User>, UserRepositoryError> {
        self.with_state(UserRepositoryError::query, |state| {
            Ok(state.users.get_mut(&id).map(|stored| {
                *stored = profile.clone();
                User::new(id, profile.clone())
            }))
        })
    }

    async fn delete(&self, id: UserId) -> Result<(), UserRepositoryError> {
        self.with_state(UserRepositoryError::query, |state| {
            if let Some(constraint) = state.user_referenced_by(id) {
                return Err(UserRepositoryError::foreign_key_violation(constraint));
            }
            state.users.remove(&id);
            Ok(())
        })
    }
}

#[async_trait]
impl ConnectionRepository for InMemoryStore {
    async fn insert(&self, connection: Connection) -> Result<(), ConnectionRepositoryError> {
        self.with_state(ConnectionRepositoryError::query, |state| {
            if state.connections.contains(&connection) {
                return Err(ConnectionRepositoryError::duplicate());
            }
            state.connections.push(connection);
            Ok(())
        })
    }

    async fn delete(&self, connection: Connection) -> Result<(), ConnectionRepositoryError> {
        self.with_state(ConnectionRepositoryError::query, |state| {
            state.connections.retain(|edge| *edge != connection);
            Ok(())
        })
    }

    async fn delete_all_from(&self, follower: UserId) -> Result<(), ConnectionRepositoryError> {
        self.with_state(ConnectionRepositoryError::query, |state| {
            state.connections.retain(|edge| edge.follower != follower);
            Ok(())
        })
    }

    async fn delete_all_to(&self, following: UserId) -> Result<(), ConnectionRepositoryError> {
        self.with_state(ConnectionRepositoryError::query, |state| {
            state.connections.retain(|edge| edge.following != following);
            Ok(())
        })
    }

    async fn list_following(
        &self,
        follower: UserId,
    ) -> Result<Vec<User>, ConnectionRepositoryError> {
        self.with_state(ConnectionRepositoryError::query, |state| {
            let ids = state
                .connections
                .iter()
                .filter(|edge| edge.follower == follower)
                .map(|edge| edge.following);
            Ok(state.users_for(ids))
        })
    }

    async fn list_followers(
        &self,
        following: UserId,
    ) -> Result<Vec<User>, ConnectionRepositoryError> {
        self.with_state(ConnectionRepositoryError::query, |state| {
            let ids = state
                .connections
                .iter()
                .filter(|edge| edge.following == following)
                .map(|edge| edge.follower);
            Ok(state.users_for(ids))
        })
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn create(&self, post: &NewPost) -> Result<Post, PostRepositoryError> {
        self.with_state(PostRepositoryError::query, |state| {
            if !state.users.contains_key(&post.user_id) {
                return Err(PostRepositoryError::foreign_key_violation(
                    "posts_user_id_fkey",
                ));
            }
            state.last_post_id += 1;
            let stored = Post {
                id: PostId::new(state.last_post_id),
                user_id: post.user_id,
                created_at: post.created_at,
                title: post.title.clone(),
                content: post.content.clone(),
            };
            state.posts.insert(stored.id, stored.clone());
            Ok(stored)
        })
    }

    async fn list(&self) -> Result<Vec<Post>, PostRepositoryError> {
        self.with_state(PostRepositoryError::query, |state| {
            Ok(state.posts.values().cloned().collect())
        })
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostRepositoryError> {
        self.with_state(PostRepositoryError::query, |state| {
            Ok(state.posts.get(&id).cloned())
        })
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Post>, PostRepositoryError> {
        self.with_state(PostRepositoryError::query, |state| {
            Ok(state
                .posts
                .values()
                .filter(|post| post.user_id == user_id)
                .cloned()
                .collect())
        })
    }

    async fn list_by_title(&self, title: &str) -> Result<Vec<Post>, PostRepositoryError> {
        self.with_state(PostRepositoryError::query, |state| {
            Ok(state
                .posts
                .values()
                .filter(|post| post.title == title)
                .cloned()
                .collect())
        })
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Post>, PostRepositoryError> {
        self.with_state(PostRepositoryError::query, |state| {
            Ok(state
                .posts
                .values()
                .filter(|post| on_utc_day(post.created_at, date))
                .cloned()
                .collect())
        })
    }

    async fn update(
        &self,
        id: PostId,
        edit: &PostEdit,
        stamped_at: DateTime<Utc>,
    ) -> Result<Option<Post>, PostRepositoryError> {
        self.with_state(PostRepositoryError::query, |state| {
            Ok(state.posts.get_mut(&id).map(|post| {
                post.title = edit.title.clone();
                post.content = edit.content.clone();
                post.created_at = stamped_at;
                post.clone()
            }))
        })
    }

    async fn delete(&self, id: PostId) -> Result<(), PostRepositoryError> {
        self.with_state(PostRepositoryError::query, |state| {
            if state.post_has_comments(id) {
                return Err(PostRepositoryError::foreign_key_violation(
                    "comments_post_id_fkey",
                ));
            }
            state.posts.remove(&id);
            Ok(())
        })
    }

    async fn delete_by_user(&self, user_id: UserId) -> Result<(), PostRepositoryError> {
        self.with_state(PostRepositoryError::query, |state| {
            let owned: Vec<PostId> = state
                .posts
                .values()
                .filter(|post| post.user_id == user_id)
                .map(|post| post.id)
                .collect();
            if owned.iter().any(|id| state.post_has_comments(*id)) {
                return Err(PostRepositoryError::foreign_key_violation(
                    "comments_post_id_fkey",
                ));
            }
            for id in owned {
                state.posts.remove(&id);
            }
            Ok(())
        })
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn create(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError> {
        self.with_state(CommentRepositoryError::query, |state| {
            if !state.posts.contains_key(&comment.post_id) {
                return Err(CommentRepositoryError::foreign_key_violation(
                    "comments_post_id_fkey",
                ));
            }
            if !state.users.contains_key(&comment.user_id) {
                return Err(CommentRepositoryError::foreign_key_violation(
                    "comments_user_id_fkey",
                ));
            }
            state.last_comment_id += 1;
            let stored = Comment {
                id: CommentId::new(state.last_comment_id),
                post_id: comment.post_id,
                user_id: comment.user_id,
                created_at: comment.created_at,
                content: comment.content.clone(),
            };
            state.comments.insert(stored.id, stored.clone());
            Ok(stored)
        })
    }

    async fn list(&self) -> Result<Vec<Comment>, CommentRepositoryError> {
        self.with_state(CommentRepositoryError::query, |state| {
            Ok(state.comments.values().cloned().collect())
        })
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentRepositoryError> {
        self.with_state(CommentRepositoryError::query, |state| {
            Ok(state.comments.get(&id).cloned())
        })
    }

    async fn list_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, CommentRepositoryError> {
        self.with_state(CommentRepositoryError::query, |state| {
            Ok(state
                .comments
                .values()
                .filter(|comment| comment.post_id == post_id)
                .cloned()
                .collect())
        })
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Comment>, CommentRepositoryError> {
        self.with_state(CommentRepositoryError::query, |state| {
            Ok(state
                .comments
                .values()
                .filter(|comment| comment.user_id == user_id)
                .cloned()
                .collect())
        })
    }

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Comment>, CommentRepositoryError> {
        self.with_state(CommentRepositoryError::query, |state| {
            Ok(state
                .comments
                .values()
                .filter(|comment| on_utc_day(comment.created_at, date))
                .cloned()
                .collect())
        })
    }

    async fn update(
        &self,
        id: CommentId,
        edit: &CommentEdit,
        stamped_at: DateTime<Utc>,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        self.with_state(CommentRepositoryError::query, |state| {
            Ok(state.comments.get_mut(&id).map(|comment| {
                comment.content = edit.content.clone();
                comment.created_at = stamped_at;
                comment.clone()
            }))
        })
    }

    async fn delete(&self, id: CommentId) -> Result<(), CommentRepositoryError> {
        self.with_state(CommentRepositoryError::query, |state| {
            state.comments.remove(&id);
            Ok(())
        })
    }
}
