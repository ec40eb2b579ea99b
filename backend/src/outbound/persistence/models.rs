//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Each read row converts into its domain
//! type through `into_domain`.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{comments, connections, posts, users};
use crate::domain::{
    Address, Comment, CommentEdit, CommentId, Connection, NewComment, NewPost, Post, PostEdit,
    PostId, User, UserId, UserProfile,
};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub document_number: String,
    pub email: String,
    pub phone: String,
    pub zip_code: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub street: String,
    pub number: String,
    pub complement: String,
}

impl UserRow {
    pub(crate) fn into_domain(self) -> User {
        User::new(
            UserId::new(self.id),
            UserProfile {
                name: self.name,
                age: self.age,
                document_number: self.document_number,
                email: self.email,
                phone: self.phone,
                address: Address {
                    zip_code: self.zip_code,
                    country: self.country,
                    state: self.state,
                    city: self.city,
                    neighborhood: self.neighborhood,
                    street: self.street,
                    number: self.number,
                    complement: self.complement,
                },
            },
        )
    }
}

/// Insertable and changeset view of a user profile.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserValues<'a> {
    pub name: &'a str,
    pub age: i32,
    pub document_number: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub zip_code: &'a str,
    pub country: &'a str,
    pub state: &'a str,
    pub city: &'a str,
    pub neighborhood: &'a str,
    pub street: &'a str,
    pub number: &'a str,
    pub complement: &'a str,
}

impl<'a> From<&'a UserProfile> for UserValues<'a> {
    fn from(profile: &'a UserProfile) -> Self {
        let address = &profile.address;
        Self {
            name: &profile.name,
            age: profile.age,
            document_number: &profile.document_number,
            email: &profile.email,
            phone: &profile.phone,
            zip_code: &address.zip_code,
            country: &address.country,
            state: &address.state,
            city: &address.city,
            neighborhood: &address.neighborhood,
            street: &address.street,
            number: &address.number,
            complement: &address.complement,
        }
    }
}

// ---------------------------------------------------------------------------
// Post models
// ---------------------------------------------------------------------------

/// Row struct for reading from the posts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PostRow {
    pub id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub content: String,
}

impl PostRow {
    pub(crate) fn into_domain(self) -> Post {
        Post {
            id: PostId::new(self.id),
            user_id: UserId::new(self.user_id),
            created_at: self.created_at,
            title: self.title,
            content: self.content,
        }
    }
}

/// Insertable struct for creating post records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub(crate) struct NewPostRow<'a> {
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub title: &'a str,
    pub content: &'a str,
}

impl<'a> From<&'a NewPost> for NewPostRow<'a> {
    fn from(post: &'a NewPost) -> Self {
        Self {
            user_id: post.user_id.get(),
            created_at: post.created_at,
            title: &post.title,
            content: &post.content,
        }
    }
}

/// Changeset applied by post edits.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = posts)]
pub(crate) struct PostEditRow<'a> {
    pub created_at: DateTime<Utc>,
    pub title: &'a str,
    pub content: &'a str,
}

impl<'a> PostEditRow<'a> {
    pub(crate) fn new(edit: &'a PostEdit, stamped_at: DateTime<Utc>) -> Self {
        Self {
            created_at: stamped_at,
            title: &edit.title,
            content: &edit.content,
        }
    }
}

// ---------------------------------------------------------------------------
// Comment models
// ---------------------------------------------------------------------------

/// Row struct for reading from the comments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub content: String,
}

impl CommentRow {
    pub(crate) fn into_domain(self) -> Comment {
        Comment {
            id: CommentId::new(self.id),
            post_id: PostId::new(self.post_id),
            user_id: UserId::new(self.user_id),
            created_at: self.created_at,
            content: self.content,
        }
    }
}

/// Insertable struct for creating comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub content: &'a str,
}

impl<'a> From<&'a NewComment> for NewCommentRow<'a> {
    fn from(comment: &'a NewComment) -> Self {
        Self {
            post_id: comment.post_id.get(),
            user_id: comment.user_id.get(),
            created_at: comment.created_at,
            content: &comment.content,
        }
    }
}

/// Changeset applied by comment edits.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = comments)]
pub(crate) struct CommentEditRow<'a> {
    pub created_at: DateTime<Utc>,
    pub content: &'a str,
}

impl<'a> CommentEditRow<'a> {
    pub(crate) fn new(edit: &'a CommentEdit, stamped_at: DateTime<Utc>) -> Self {
        Self {
            created_at: stamped_at,
            content: &edit.content,
        }
    }
}

// ---------------------------------------------------------------------------
// Connection models
// ---------------------------------------------------------------------------

/// Insertable struct for follow edges.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = connections)]
pub(crate) struct NewConnectionRow {
    pub follower_id: i64,
    pub following_id: i64,
}

impl From<Connection> for NewConnectionRow {
    fn from(connection: Connection) -> Self {
        Self {
            follower_id: connection.follower.get(),
            following_id: connection.following.get(),
        }
    }
}
