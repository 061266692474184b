/**
 * SQLite Store
 *
 * `Store` implementation over an `sqlx::SqlitePool`. The SQL lives next to
 * the types it reads and writes (`auth::users`, `events::db`, `posts::db`);
 * this module owns the pool, the schema and the transaction boundaries.
 *
 * # Connections
 *
 * Foreign keys are enabled on every connection, so an event or post cannot
 * reference a user that does not exist. An in-memory database lives only as
 * long as its connection, so `in_memory` pins the pool to one connection
 * that never expires.
 */

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};

use crate::backend::auth::users::{self, NewUser, User};
use crate::backend::events::db as events_db;
use crate::backend::posts::db as posts_db;
use crate::backend::store::{Store, StoreError};
use crate::shared::{Event, NewEvent, NewPost, Post};

/// Table definitions
const SCHEMA: &str = include_str!("schema.sql");

/// Drops every table, children first
const DROP_SCHEMA: &str = r#"
DROP TABLE IF EXISTS posts;
DROP TABLE IF EXISTS events;
DROP TABLE IF EXISTS users;
"#;

/// SQLite-backed store
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `database_url` and create any missing tables
    ///
    /// # Arguments
    ///
    /// * `database_url` - e.g. `sqlite://db.sqlite3?mode=rwc`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the URL is invalid, the file cannot
    /// be opened, or the schema cannot be applied.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");

        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;

        tracing::info!("Database ready");
        Ok(store)
    }

    /// Fresh private in-memory database with the schema applied
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create missing tables and indexes
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Drop all tables and recreate them empty
    pub async fn reset_schema(&self) -> Result<(), StoreError> {
        tracing::warn!("Dropping all tables");
        sqlx::raw_sql(DROP_SCHEMA).execute(&self.pool).await?;
        self.init_schema().await
    }
}

/// Commit `tx` when `result` is a success, roll it back otherwise
async fn finish<T>(
    tx: Transaction<'static, Sqlite>,
    result: Result<T, sqlx::Error>,
) -> Result<T, sqlx::Error> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Rollback failed: {:?}", rollback_err);
            }
            Err(err)
        }
    }
}

/// Unique violations on insert mean the email is taken
fn user_insert_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(users::get_user_by_email(&self.pool, email).await?)
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(users::get_user_by_id(&self.pool, id).await?)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tx = self.pool.begin().await?;
        let result = users::create_user(&mut *tx, &user).await;
        finish(tx, result).await.map_err(user_insert_error)
    }

    async fn create_event(&self, event: NewEvent) -> Result<i64, StoreError> {
        let mut tx = self.pool.begin().await?;
        let result = events_db::insert_event(&mut *tx, &event).await;
        Ok(finish(tx, result).await?)
    }

    async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        Ok(events_db::list_events(&self.pool).await?)
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError> {
        let mut tx = self.pool.begin().await?;
        let result = posts_db::insert_post(&mut *tx, &post, Utc::now()).await;
        Ok(finish(tx, result).await?)
    }

    async fn find_post(&self, id: i64) -> Result<Option<Post>, StoreError> {
        Ok(posts_db::find_post(&self.pool, id).await?)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(posts_db::list_posts(&self.pool).await?)
    }

    async fn delete_post(&self, id: i64) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;
        let result = posts_db::delete_post(&mut *tx, id).await;
        Ok(finish(tx, result).await? > 0)
    }
}
