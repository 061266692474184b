//! Sample Data
//!
//! Loads the embedded fixture (`fixtures.json`) through the `Store` trait:
//! users first (passwords bcrypt-hashed), then events and posts, whose
//! owners are named by email and resolved to the IDs the users received.
//!
//! The `seed` binary resets the schema before calling `seed`; callers that
//! skip the reset get `DuplicateEmail` for users that already exist.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::backend::auth::password::{PasswordError, PasswordHasher};
use crate::backend::auth::users::NewUser;
use crate::backend::store::{Store, StoreError};
use crate::shared::event::parse_event_date;
use crate::shared::{NewEvent, NewPost, SharedError};

const FIXTURES: &str = include_str!("fixtures.json");

/// Seeding errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid fixture: {0}")]
    Fixture(#[from] serde_json::Error),
    #[error("invalid fixture field: {0}")]
    Field(#[from] SharedError),
    #[error("fixture references unknown user {0}")]
    UnknownUser(String),
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Deserialize)]
pub struct UserFixture {
    pub name: String,
    pub email: String,
    pub password: String,
    pub neighborhood: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EventFixture {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub location: String,
    pub organizer_email: String,
}

#[derive(Debug, Deserialize)]
pub struct PostFixture {
    pub content: String,
    pub author_email: String,
}

/// Fixture file contents
#[derive(Debug, Deserialize)]
pub struct Fixtures {
    pub users: Vec<UserFixture>,
    pub events: Vec<EventFixture>,
    pub posts: Vec<PostFixture>,
}

impl Fixtures {
    /// The fixture compiled into the crate
    pub fn embedded() -> Result<Self, SeedError> {
        Ok(serde_json::from_str(FIXTURES)?)
    }
}

/// Number of rows created by `seed`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub events: usize,
    pub posts: usize,
}

/// Insert `fixtures` into `store`
pub async fn seed(
    store: &dyn Store,
    hasher: PasswordHasher,
    fixtures: &Fixtures,
) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();
    let mut ids: HashMap<&str, i64> = HashMap::new();

    for user in &fixtures.users {
        let created = store
            .create_user(NewUser {
                name: user.name.clone(),
                email: user.email.clone(),
                password_hash: hasher.hash(&user.password)?,
                neighborhood: user.neighborhood.clone(),
            })
            .await?;
        ids.insert(user.email.as_str(), created.id);
        report.users += 1;
    }

    let owner = |email: &str| {
        ids.get(email)
            .copied()
            .ok_or_else(|| SeedError::UnknownUser(email.to_string()))
    };

    for event in &fixtures.events {
        store
            .create_event(NewEvent {
                title: event.title.clone(),
                description: event.description.clone(),
                date: parse_event_date(&event.date)?,
                location: event.location.clone(),
                organizer_id: owner(event.organizer_email.as_str())?,
            })
            .await?;
        report.events += 1;
    }

    for post in &fixtures.posts {
        store
            .create_post(NewPost {
                content: post.content.clone(),
                created_by_id: owner(post.author_email.as_str())?,
            })
            .await?;
        report.posts += 1;
    }

    tracing::info!(
        "Seeded {} users, {} events, {} posts",
        report.users,
        report.events,
        report.posts
    );
    Ok(report)
}
