/**
 * Protected Greeting Handler
 *
 * GET /protected greets the caller by name. The token proves who the caller
 * was at login; the user row is looked up again here, so a user deleted
 * after login gets 404 rather than a greeting.
 */
use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::store::Store;

/// Protected greeting handler
///
/// # Errors
///
/// * `401 Unauthorized` - Rejected by the auth middleware before this runs
/// * `404 Not Found` - The token's user no longer exists
pub async fn protected(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
) -> Result<Json<MessageResponse>, BackendError> {
    let user = store
        .find_user_by_id(user.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token for missing user {}", user.user_id);
            BackendError::not_found("User not found")
        })?;

    Ok(Json(MessageResponse::new(format!(
        "Hello, {}! This is a protected route.",
        user.name
    ))))
}
