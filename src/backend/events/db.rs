//! Database operations for events

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteExecutor};

use crate::shared::{Event, NewEvent};

fn event_from_row(row: &SqliteRow) -> Result<Event, sqlx::Error> {
    Ok(Event {
        id: row.try_get("event_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        date: row.try_get("date")?,
        location: row.try_get("location")?,
        organizer_id: row.try_get("organizer_id")?,
    })
}

/// Insert an event and return its ID
pub async fn insert_event<'e, E>(executor: E, event: &NewEvent) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query(
        r#"
        INSERT INTO events (title, description, date, location, organizer_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING event_id
        "#,
    )
    .bind(&event.title)
    .bind(&event.description)
    .bind(event.date)
    .bind(&event.location)
    .bind(event.organizer_id)
    .fetch_one(executor)
    .await?;

    row.try_get("event_id")
}

/// List all events in creation order
pub async fn list_events<'e, E>(executor: E) -> Result<Vec<Event>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query(
        r#"
        SELECT event_id, title, description, date, location, organizer_id
        FROM events
        ORDER BY event_id
        "#,
    )
    .fetch_all(executor)
    .await?;

    rows.iter().map(event_from_row).collect()
}
