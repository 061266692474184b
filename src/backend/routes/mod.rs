//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! ├── api_routes.rs   - Auth, event and post endpoints
//! └── pages.rs        - Index page and 404 fallback
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use neighborly::backend::auth::{PasswordHasher, TokenIssuer};
//! use neighborly::backend::routes::create_router;
//! use neighborly::backend::server::AppState;
//! use neighborly::backend::store::SqliteStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::in_memory().await?;
//! let state = AppState::new(
//!     Arc::new(store),
//!     Arc::new(TokenIssuer::new("secret", chrono::Duration::minutes(15))),
//!     PasswordHasher::default(),
//! );
//! let router = create_router(state);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

/// Index page and fallback
pub mod pages;

pub use router::create_router;
