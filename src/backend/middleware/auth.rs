/**
 * Authentication Middleware
 *
 * This module protects routes that require a logged-in user. It reads the
 * bearer token from the Authorization header, verifies it, and records the
 * user ID in the request extensions for handlers to pick up through the
 * `AuthUser` extractor.
 *
 * Verification is stateless: the token alone decides. Handlers that need
 * the user row look it up themselves.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{AuthError, TokenIssuer};
use crate::backend::error::BackendError;

/// Authenticated user data extracted from the JWT
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Extract the token from `Authorization: Bearer <token>`
///
/// A missing header, a non-UTF-8 header or another scheme all count as no
/// token at all.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .ok_or(AuthError::MissingToken)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT from the Authorization header
/// 2. Verifies its signature and expiry
/// 3. Attaches the user ID to the request extensions
///
/// Returns 401 Unauthorized if the token is missing or invalid; the wrapped
/// handler does not run.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenIssuer>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user_id = bearer_token(request.headers())
        .and_then(|token| tokens.verify(token))
        .map_err(|e| {
            tracing::warn!("Rejected request to {}: {}", request.uri().path(), e);
            BackendError::Unauthorized(e)
        })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only meaningful behind `auth_middleware`; elsewhere it rejects with 401.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthorized(AuthError::MissingToken)
            })
    }
}
