/**
 * Server Initialization
 *
 * This module opens the database, assembles the application state and
 * returns the configured router.
 *
 * # Initialization Process
 *
 * 1. Connect to SQLite and create missing tables
 * 2. Build the token issuer and password hasher from the configuration
 * 3. Create the router with all routes and layers
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{SqliteStore, StoreError};

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `StoreError` when the database cannot be opened or the schema
/// cannot be applied. Unlike a missing optional service, the server has no
/// useful mode without its database.
pub async fn create_app(config: &ServerConfig) -> Result<Router, StoreError> {
    tracing::info!("Initializing Neighborly backend server");

    let store = SqliteStore::connect(&config.database_url).await?;
    let app_state = AppState::from_config(Arc::new(store), config);

    tracing::info!(
        "Tokens expire after {} seconds, bcrypt cost {}",
        config.token_ttl.num_seconds(),
        config.bcrypt_cost
    );

    Ok(create_router(app_state))
}
