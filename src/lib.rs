//! Neighborly - Main Library
//!
//! Neighborly is a small neighborhood bulletin backend: residents register,
//! log in with a bearer token, announce community events and publish short
//! posts that only their author may remove.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types exchanged with clients
//!   - Event and post records, request bodies
//!   - Field validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and auth middleware
//!   - Password hashing, JWT issuance and verification
//!   - Ownership checks on mutating routes
//!   - SQLite persistence behind the `Store` trait
//!
//! # Usage
//!
//! ```rust,no_run
//! use neighborly::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `shared::error::SharedError` for field validation
//! - `backend::error::BackendError` at the HTTP boundary, rendered as JSON

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
