/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the HTTP layer.
 *
 * # Error Categories
 *
 * ## Authentication
 *
 * - `InvalidCredentials` - email unknown or password mismatch (401)
 * - `Unauthorized` - token missing or failing verification (401)
 *
 * ## Authorization
 *
 * - `NotAuthorized` - the caller does not own the resource (403)
 *
 * ## Input and state
 *
 * - `DuplicateEmail` - registration conflict (400)
 * - `ValidationError` - missing or unparsable fields (400)
 * - `NotFound` - no such resource (404)
 *
 * ## Internal
 *
 * - `InternalError` - storage, hashing or signing failure (500). The detail is
 *   logged when the error is created and replaced by a generic message in the
 *   response.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::AuthError;
use crate::shared::SharedError;

/// Generic message returned to clients for internal failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use neighborly::backend::error::BackendError;
///
/// let err = BackendError::not_found("Post not found.");
/// let err = BackendError::not_authorized("You are not authorized to delete this post.");
/// let err = BackendError::internal("database is locked");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Login with an unknown email or a wrong password
    ///
    /// Both cases share one message so that the response does not reveal
    /// which emails are registered.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration with an email that is already registered
    #[error("Email already exists")]
    DuplicateEmail,

    /// Missing or invalid bearer token on a protected route
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AuthError),

    /// The caller is authenticated but does not own the resource
    #[error("{message}")]
    NotAuthorized {
        /// Human-readable error message
        message: String,
    },

    /// The requested resource does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Missing or unparsable request fields
    #[error(transparent)]
    ValidationError(#[from] SharedError),

    /// Unexpected failure in storage, hashing or token signing
    #[error("Internal error: {message}")]
    InternalError {
        /// Internal detail, logged but never returned to clients
        message: String,
    },
}

/// JSON key under which an error message is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKey {
    /// `{"message": ...}`, used by the login and registration failures
    Message,
    /// `{"error": ...}`, used by everything else
    Error,
}

impl BodyKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Error => "error",
        }
    }
}

impl BackendError {
    /// Create a new ownership failure
    pub fn not_authorized(message: impl Into<String>) -> Self {
        Self::NotAuthorized {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new validation error for `field`
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError(SharedError::validation(field, message))
    }

    /// Create a new internal error and log its detail
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!("Internal error: {}", message);
        Self::InternalError { message }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidCredentials`, `Unauthorized` - 401 Unauthorized
    /// - `NotAuthorized` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `DuplicateEmail`, `ValidationError` - 400 Bad Request
    /// - `InternalError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotAuthorized { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateEmail | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message returned to the client
    ///
    /// Internal errors always yield the generic `INTERNAL_ERROR_MESSAGE`.
    pub fn message(&self) -> String {
        match self {
            Self::InternalError { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
            Self::Unauthorized(err) => err.to_string(),
            other => other.to_string(),
        }
    }

    /// Get the JSON key the message is returned under
    pub fn body_key(&self) -> BodyKey {
        match self {
            Self::InvalidCredentials | Self::DuplicateEmail => BodyKey::Message,
            _ => BodyKey::Error,
        }
    }
}
