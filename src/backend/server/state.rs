/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * Everything in `AppState` is immutable after startup:
 * - `Arc<dyn Store>` wraps a pool that synchronizes internally
 * - `Arc<TokenIssuer>` holds the signing keys
 * - `PasswordHasher` is a `Copy` cost setting
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers take only what they use, e.g.
 * `State(store): State<Arc<dyn Store>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::server::config::ServerConfig;
use crate::backend::store::Store;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Users, events and posts
    pub store: Arc<dyn Store>,
    /// Token issuance and verification
    pub tokens: Arc<TokenIssuer>,
    /// Password hashing settings
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, tokens: Arc<TokenIssuer>, hasher: PasswordHasher) -> Self {
        Self {
            store,
            tokens,
            hasher,
        }
    }

    /// Build the state for `config` around an already opened store
    pub fn from_config(store: Arc<dyn Store>, config: &ServerConfig) -> Self {
        Self::new(
            store,
            Arc::new(TokenIssuer::new(&config.jwt_secret, config.token_ttl)),
            PasswordHasher::new(config.bcrypt_cost),
        )
    }
}

impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher
    }
}
