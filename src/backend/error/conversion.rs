/**
 * Error Conversion
 *
 * Conversions into `BackendError` from the lower layers, and from
 * `BackendError` into an HTTP response.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Login and registration failures use `"message"` instead of `"error"`.
 */

use axum::{
    extract::rejection::{FormRejection, JsonRejection, PathRejection},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::error::types::BackendError;
use crate::backend::store::StoreError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut body = serde_json::Map::new();
        body.insert(self.body_key().as_str().to_string(), self.message().into());
        body.insert("status".to_string(), status.as_u16().into());

        (status, Json(serde_json::Value::Object(body))).into_response()
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::DuplicateEmail,
            StoreError::Database(e) => Self::internal(format!("Database error: {}", e)),
        }
    }
}

impl From<PasswordError> for BackendError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::TooLong => Self::validation("password", err.to_string()),
            PasswordError::Bcrypt(_) => Self::internal(err.to_string()),
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        Self::internal(format!("Failed to create token: {}", err))
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::validation("body", "Invalid request data")
    }
}

impl From<FormRejection> for BackendError {
    fn from(rejection: FormRejection) -> Self {
        tracing::warn!("Rejected form body: {}", rejection.body_text());
        Self::validation("body", "Invalid request data")
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("Rejected path parameter: {}", rejection.body_text());
        Self::validation("path", "Invalid path parameter")
    }
}
