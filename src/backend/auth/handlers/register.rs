/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Check name, email and password are present
 * 2. Refuse an email that is already registered
 * 3. Hash the password with bcrypt
 * 4. Store the user
 *
 * Registration does not log the user in; the client calls `/login` next.
 * Two concurrent registrations of one email both pass step 2, and the unique
 * index on `users.email` rejects the second insert with the same error.
 */
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::NewUser;
use crate::backend::error::BackendError;
use crate::backend::store::Store;

/// Registration handler
///
/// # Arguments
///
/// * `State(store)` - User storage
/// * `State(hasher)` - Password hasher
/// * `payload` - Name, email, password and optional neighborhood
///
/// # Returns
///
/// `201 Created` with `{"message": "Account created successfully!"}`
///
/// # Errors
///
/// * `400 Bad Request` - Email already registered, missing fields or bad JSON
/// * `500 Internal Server Error` - Storage or hashing failure
pub async fn register(
    State(store): State<Arc<dyn Store>>,
    State(hasher): State<PasswordHasher>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let Json(request) = payload?;

    let registration = request.into_registration()?;
    let email = registration.email;

    if store.find_user_by_email(&email).await?.is_some() {
        tracing::warn!("Registration refused, email already exists: {}", email);
        return Err(BackendError::DuplicateEmail);
    }

    let password_hash = hasher.hash(&registration.password)?;

    let user = store
        .create_user(NewUser {
            name: registration.name,
            email,
            password_hash,
            neighborhood: registration.neighborhood,
        })
        .await?;

    tracing::info!("User registered: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Account created successfully!")),
    ))
}
