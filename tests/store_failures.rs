//! Storage failure integration tests
//!
//! A `Store` whose every call fails: handlers must answer 500 with a generic
//! message and never leak the database error.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;

use common::*;
use neighborly::backend::auth::{NewUser, User};
use neighborly::backend::store::{Store, StoreError};
use neighborly::shared::{Event, NewEvent, NewPost, Post};

struct FailingStore;

fn failure() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl Store for FailingStore {
    async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(failure())
    }

    async fn find_user_by_id(&self, _id: i64) -> Result<Option<User>, StoreError> {
        Err(failure())
    }

    async fn create_user(&self, _user: NewUser) -> Result<User, StoreError> {
        Err(failure())
    }

    async fn create_event(&self, _event: NewEvent) -> Result<i64, StoreError> {
        Err(failure())
    }

    async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        Err(failure())
    }

    async fn create_post(&self, _post: NewPost) -> Result<Post, StoreError> {
        Err(failure())
    }

    async fn find_post(&self, _id: i64) -> Result<Option<Post>, StoreError> {
        Err(failure())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        Err(failure())
    }

    async fn delete_post(&self, _id: i64) -> Result<bool, StoreError> {
        Err(failure())
    }
}

fn failing_server() -> axum_test::TestServer {
    test_server(state_with_store(Arc::new(FailingStore)))
}

fn assert_internal_error(response: &axum_test::TestResponse) {
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Internal server error", "status": 500 })
    );
}

#[tokio::test]
async fn test_login_storage_failure() {
    let server = failing_server();
    let response = login(&server, "a@x.com", TEST_PASSWORD).await;
    assert_internal_error(&response);
}

#[tokio::test]
async fn test_event_create_storage_failure() {
    let server = failing_server();
    let token = test_tokens().issue(1).unwrap();

    let response = server
        .post("/events/create")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "BBQ",
            "description": "Food",
            "date": "2025-03-25",
            "location": "Park",
        }))
        .await;
    assert_internal_error(&response);
}

#[tokio::test]
async fn test_listing_storage_failure() {
    let server = failing_server();
    assert_internal_error(&server.get("/events/view").await);
    assert_internal_error(&server.get("/posts/view").await);
}

#[tokio::test]
async fn test_delete_storage_failure() {
    let server = failing_server();
    let token = test_tokens().issue(1).unwrap();

    let response = server.post("/posts/1/delete").authorization_bearer(&token).await;
    assert_internal_error(&response);
}
