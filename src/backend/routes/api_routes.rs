/**
 * API Routes
 *
 * # Public
 * - `POST /register` - User registration
 * - `POST /login` - User login, returns a bearer token
 * - `GET /events/view` - All events
 * - `GET /posts/view` - All posts, newest first
 *
 * # Protected (`Authorization: Bearer <token>`)
 * - `POST /logout` - Acknowledge logout
 * - `GET /protected` - Greeting for the caller
 * - `POST /events/create` - Create an event
 * - `POST /posts` - Create a post (form)
 * - `POST /posts/{id}/delete` - Delete own post
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, logout, protected, register};
use crate::backend::events::{create_event, view_events};
use crate::backend::middleware::auth_middleware;
use crate::backend::posts::{create_post, delete_post, view_posts};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Protected routes share one `route_layer`, so the token is checked only
/// once a route has matched; unknown paths still reach the fallback.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Supplies the token issuer to the auth middleware
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .route("/logout", post(logout))
        .route("/protected", get(protected))
        .route("/events/create", post(create_event))
        .route("/posts", post(create_post))
        .route("/posts/{id}/delete", post(delete_post))
        .route_layer(middleware::from_fn_with_state(
            app_state.tokens.clone(),
            auth_middleware,
        ));

    router
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/events/view", get(view_events))
        .route("/posts/view", get(view_posts))
        .merge(protected_routes)
}
