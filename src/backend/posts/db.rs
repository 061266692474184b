//! Database operations for posts

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteExecutor};

use crate::shared::{NewPost, Post};

fn post_from_row(row: &SqliteRow) -> Result<Post, sqlx::Error> {
    Ok(Post {
        id: row.try_get("post_id")?,
        content: row.try_get("content")?,
        timestamp: row.try_get("timestamp")?,
        created_by_id: row.try_get("created_by_id")?,
    })
}

/// Insert a post created at `timestamp`
pub async fn insert_post<'e, E>(
    executor: E,
    post: &NewPost,
    timestamp: DateTime<Utc>,
) -> Result<Post, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query(
        r#"
        INSERT INTO posts (content, timestamp, created_by_id)
        VALUES (?, ?, ?)
        RETURNING post_id, content, timestamp, created_by_id
        "#,
    )
    .bind(&post.content)
    .bind(timestamp)
    .bind(post.created_by_id)
    .fetch_one(executor)
    .await?;

    post_from_row(&row)
}

/// Get a post by ID
pub async fn find_post<'e, E>(executor: E, post_id: i64) -> Result<Option<Post>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query(
        r#"
        SELECT post_id, content, timestamp, created_by_id
        FROM posts
        WHERE post_id = ?
        "#,
    )
    .bind(post_id)
    .fetch_optional(executor)
    .await?;

    row.as_ref().map(post_from_row).transpose()
}

/// List all posts, newest first
pub async fn list_posts<'e, E>(executor: E) -> Result<Vec<Post>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query(
        r#"
        SELECT post_id, content, timestamp, created_by_id
        FROM posts
        ORDER BY timestamp DESC, post_id DESC
        "#,
    )
    .fetch_all(executor)
    .await?;

    rows.iter().map(post_from_row).collect()
}

/// Delete a post, returning the number of rows removed
pub async fn delete_post<'e, E>(executor: E, post_id: i64) -> Result<u64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM posts WHERE post_id = ?")
        .bind(post_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}
