//! Directed follow edge between two users.

use serde::{Deserialize, Serialize};

use super::UserId;

/// `follower` follows `following`.
///
/// At most one edge exists per ordered pair and the two ends always differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// User doing the following.
    pub follower: UserId,
    /// User being followed.
    pub following: UserId,
}

impl Connection {
    /// Build an edge from `follower` to `following`.
    pub const fn new(follower: UserId, following: UserId) -> Self {
        Self {
            follower,
            following,
        }
    }

    /// Whether both ends are the same user.
    pub fn is_self_loop(&self) -> bool {
        self.follower == self.following
    }
}
