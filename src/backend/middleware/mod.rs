//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token verification for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum::{middleware, routing::post, Router};
//! use neighborly::backend::auth::{logout, TokenIssuer};
//! use neighborly::backend::middleware::auth_middleware;
//!
//! let tokens = Arc::new(TokenIssuer::new("secret", chrono::Duration::minutes(15)));
//! let protected: Router = Router::new()
//!     .route("/logout", post(logout))
//!     .route_layer(middleware::from_fn_with_state(tokens, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
