/**
 * Logout Handler
 *
 * Tokens are stateless, so logging out stores nothing: the handler only
 * confirms the caller holds a valid token. The client discards the token;
 * it stays valid until it expires.
 */
use axum::response::Json;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::middleware::auth::AuthUser;

/// Logout handler for POST /logout (protected)
pub async fn logout(AuthUser(user): AuthUser) -> Json<MessageResponse> {
    tracing::info!("User {} logged out", user.user_id);
    Json(MessageResponse::new("Logout successful!"))
}
