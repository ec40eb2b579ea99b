//! Comment data model.
//!
//! A comment references both the post it answers and the user who wrote it.
//! Both references are fixed at creation; edits only replace the content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CommentId, PostId, UserId};

/// Candidate comment submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    /// Post being answered; must exist.
    pub post_id: PostId,
    /// Author; must exist.
    pub user_id: UserId,
    /// Comment body.
    pub content: String,
}

/// Editable comment fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentEdit {
    /// Replacement body.
    pub content: String,
}

/// Comment ready to be inserted, with its server-assigned timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// Post being answered.
    pub post_id: PostId,
    /// Author.
    pub user_id: UserId,
    /// Server-assigned timestamp.
    pub created_at: DateTime<Utc>,
    /// Comment body.
    pub content: String,
}

impl NewComment {
    /// Stamp a validated draft.
    pub fn from_draft(draft: CommentDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            post_id: draft.post_id,
            user_id: draft.user_id,
            created_at,
            content: draft.content,
        }
    }
}

/// Persisted comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Store-assigned identifier.
    pub id: CommentId,
    /// Post being answered.
    pub post_id: PostId,
    /// Author.
    pub user_id: UserId,
    /// Timestamp of creation or of the latest edit.
    pub created_at: DateTime<Utc>,
    /// Comment body.
    pub content: String,
}
