/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a JWT carrying the user ID
 * 4. Return the token
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 body
 * - Passwords are never logged or returned
 */
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::error::BackendError;
use crate::backend::store::Store;

/// Login handler
///
/// # Arguments
///
/// * `State(store)` - User storage
/// * `State(tokens)` - Token issuer holding the signing key
/// * `State(hasher)` - Password hasher
/// * `payload` - Login request containing email and password
///
/// # Errors
///
/// * `400 Bad Request` - Body is not JSON, or email/password missing
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Storage, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "ada@example.com",
///   "password": "correct horse"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Login successful!",
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(store): State<Arc<dyn Store>>,
    State(tokens): State<Arc<TokenIssuer>>,
    State(hasher): State<PasswordHasher>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let Json(request) = payload?;

    let (email, password) = request.into_credentials()?;

    let user = store.find_user_by_email(&email).await?.ok_or_else(|| {
        tracing::warn!("Login attempt for unknown email: {}", email);
        BackendError::InvalidCredentials
    })?;

    if !hasher.verify(&password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(BackendError::InvalidCredentials);
    }

    let access_token = tokens.issue(user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        access_token,
    }))
}
