/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Index page (`GET /`)
 * 2. API routes (auth, events, posts)
 * 3. Fallback handler (JSON 404)
 *
 * # Layers
 *
 * - `TraceLayer` - a tracing span per request
 * - `CorsLayer::permissive()` - every origin may call the API
 */

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::pages::{index, not_found};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Store, token issuer and password hasher
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(index));

    let router = configure_api_routes(router, &app_state);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
