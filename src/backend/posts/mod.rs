//! Posts Module
//!
//! Bulletin posts. Any authenticated resident can publish one; only its
//! author can delete it. Creating and deleting answer with a redirect to `/`
//! carrying a flash message, as a browser form would expect.
//!
//! - **`db`** - SQL for the `posts` table
//! - **`handlers`** - `POST /posts`, `POST /posts/{id}/delete`, `GET /posts/view`

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_post, delete_post, view_posts};
