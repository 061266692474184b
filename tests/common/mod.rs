//! Common test utilities and helpers
//!
//! - In-memory application state and a `TestServer` around the real router
//! - Registration and login helpers
//! - Flash redirect assertions

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use serde_json::json;

use neighborly::backend::auth::{PasswordHasher, TokenIssuer};
use neighborly::backend::routes::create_router;
use neighborly::backend::server::AppState;
use neighborly::backend::store::{SqliteStore, Store};

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_PASSWORD: &str = "password123";

/// Minimum bcrypt cost keeps hashing fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_tokens() -> TokenIssuer {
    TokenIssuer::new(TEST_SECRET, chrono::Duration::minutes(15))
}

/// Application state over `store`
pub fn state_with_store(store: Arc<dyn Store>) -> AppState {
    AppState::new(
        store,
        Arc::new(test_tokens()),
        PasswordHasher::new(TEST_BCRYPT_COST),
    )
}

/// Application state over a fresh in-memory database
pub async fn test_state() -> AppState {
    let store = SqliteStore::in_memory()
        .await
        .expect("Failed to open in-memory database");
    state_with_store(Arc::new(store))
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

pub async fn register(server: &TestServer, name: &str, email: &str) -> TestResponse {
    server
        .post("/register")
        .json(&json!({
            "name": name,
            "email": email,
            "password": TEST_PASSWORD,
        }))
        .await
}

pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .json(&json!({ "email": email, "password": password }))
        .await
}

/// Register a user and return a bearer token for them
pub async fn register_and_login(server: &TestServer, name: &str, email: &str) -> String {
    register(server, name, email).await.assert_status(StatusCode::CREATED);

    let response = login(server, email, TEST_PASSWORD).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    body["access_token"]
        .as_str()
        .expect("access_token missing from login response")
        .to_string()
}

/// Assert a 303 redirect to `/` carrying the given flash
pub fn assert_flash(response: &TestResponse, category: &str, message: &str) {
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
    assert_eq!(response.header("x-flash-category"), category);
    assert_eq!(response.header("x-flash-message"), message);
}
