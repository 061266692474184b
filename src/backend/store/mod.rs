//! Storage Module
//!
//! Handlers reach the database only through the `Store` trait, carried in
//! `AppState` as `Arc<dyn Store>`. `SqliteStore` is the production
//! implementation; tests can substitute their own.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs          - Store trait and StoreError
//! ├── sqlite.rs       - SQLite implementation
//! └── schema.sql      - Table definitions, applied at startup
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::backend::auth::users::{NewUser, User};
use crate::shared::{Event, NewEvent, NewPost, Post};

/// SQLite implementation
pub mod sqlite;

pub use sqlite::SqliteStore;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email is already registered
    #[error("email already exists")]
    DuplicateEmail,

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence for users, events and posts
///
/// Reads never mutate. Each write is a single transaction: it either
/// commits completely or is rolled back before the error is returned.
#[async_trait]
pub trait Store: Send + Sync {
    /// Find a user by email
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Find a user by ID
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Insert a user, failing with `DuplicateEmail` when the email is taken
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Insert an event and return its ID
    async fn create_event(&self, event: NewEvent) -> Result<i64, StoreError>;

    /// All events in creation order
    async fn list_events(&self) -> Result<Vec<Event>, StoreError>;

    /// Insert a post stamped with the current time
    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError>;

    /// Find a post by ID
    async fn find_post(&self, id: i64) -> Result<Option<Post>, StoreError>;

    /// All posts, newest first
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    /// Delete a post; `false` when no such post existed
    async fn delete_post(&self, id: i64) -> Result<bool, StoreError>;
}
