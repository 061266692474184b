/**
 * User Model and Database Operations
 *
 * The `users` table is the credential store: one row per resident, keyed by
 * an integer ID and by a unique email.
 */

use sqlx::SqliteExecutor;

/// User struct representing a row of the `users` table
///
/// Deliberately not `Serialize`: the password hash never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    #[sqlx(rename = "user_id")]
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// bcrypt hash of the password
    #[sqlx(rename = "password")]
    pub password_hash: String,
    /// Optional neighborhood tag
    pub neighborhood: Option<String>,
}

/// A user ready to be inserted, with its password already hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub neighborhood: Option<String>,
}

/// Insert a user and return the stored row
///
/// Fails with a unique violation when the email is taken.
pub async fn create_user<'e, E>(executor: E, new_user: &NewUser) -> Result<User, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password, neighborhood)
        VALUES (?, ?, ?, ?)
        RETURNING user_id, name, email, password, neighborhood
        "#,
    )
    .bind(&new_user.name)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(&new_user.neighborhood)
    .fetch_one(executor)
    .await
}

/// Get user by email
pub async fn get_user_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, name, email, password, neighborhood
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(executor)
    .await
}

/// Get user by ID
pub async fn get_user_by_id<'e, E>(executor: E, id: i64) -> Result<Option<User>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, name, email, password, neighborhood
        FROM users
        WHERE user_id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}
