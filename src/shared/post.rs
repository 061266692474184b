//! Bulletin Posts
//!
//! Short messages published by a resident. The author recorded at creation
//! is the only user allowed to delete the post.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored post, as returned by `GET /posts/view`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post ID
    pub id: i64,
    pub content: String,
    /// Creation time (UTC)
    pub timestamp: DateTime<Utc>,
    /// User ID of the author
    pub created_by_id: i64,
}

/// A post ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub content: String,
    pub created_by_id: i64,
}

/// Form body of `POST /posts`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreatePostForm {
    pub content: Option<String>,
}
