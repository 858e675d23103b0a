//! Post record and draft types shared across the client and controller.

use serde::{Deserialize, Serialize};

/// A content record as stored by the remote service.
///
/// `id` is assigned by the remote store, never by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub content: String,
}

/// Transient, unsaved form input for a create or edit operation.
///
/// Never persisted; discarded after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            content: content.into(),
        }
    }

    /// Builds the full record the remote expects for an update of `id`.
    pub fn into_post(self, id: u64) -> Post {
        Post {
            id,
            title: self.title,
            author: self.author,
            content: self.content,
        }
    }
}

impl From<Post> for PostDraft {
    fn from(post: Post) -> Self {
        Self {
            title: post.title,
            author: post.author,
            content: post.content,
        }
    }
}
