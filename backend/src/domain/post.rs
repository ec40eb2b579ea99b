//! Post data model.
//!
//! Posts belong to a user. The owner is fixed at creation; edits only touch
//! the title and content. The creation timestamp is stamped by the service
//! on create and on every edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PostId, UserId};

/// Candidate post submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    /// Owner; must reference an existing user.
    pub user_id: UserId,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

/// Editable post fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostEdit {
    /// Replacement title.
    pub title: String,
    /// Replacement body.
    pub content: String,
}

/// Post ready to be inserted, with its server-assigned timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    /// Owner.
    pub user_id: UserId,
    /// Server-assigned timestamp.
    pub created_at: DateTime<Utc>,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

impl NewPost {
    /// Stamp a validated draft.
    pub fn from_draft(draft: PostDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id: draft.user_id,
            created_at,
            title: draft.title,
            content: draft.content,
        }
    }
}

/// Persisted post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Store-assigned identifier.
    pub id: PostId,
    /// Owner.
    pub user_id: UserId,
    /// Timestamp of creation or of the latest edit.
    pub created_at: DateTime<Utc>,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}
