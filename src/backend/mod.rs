//! Backend Module
//!
//! All server-side code for Neighborly: an Axum HTTP server in front of a
//! SQLite database, with stateless JWT authentication.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Router assembly, index page and fallback
//! - **`auth`** - Password hashing, tokens, users, ownership, auth handlers
//! - **`events`** - Community event storage and handlers
//! - **`posts`** - Bulletin post storage and handlers
//! - **`store`** - `Store` trait and its SQLite implementation
//! - **`middleware`** - Bearer token verification for protected routes
//! - **`flash`** - Redirect responses carrying a flash message
//! - **`seed`** - Sample data loader used by the `seed` binary
//! - **`error`** - `BackendError` and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Config, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and authorization
//! ├── events/         - Events
//! ├── posts/          - Posts
//! ├── store/          - Persistence
//! ├── middleware/     - Request middleware
//! ├── flash.rs        - Flash redirects
//! ├── seed/           - Sample data
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. Protected routes pass through `middleware::auth_middleware`, which
//!    verifies the bearer token and records the caller's user ID.
//! 2. Handlers receive that ID through the `AuthUser` extractor and the
//!    store through `State<Arc<dyn Store>>`.
//! 3. Mutating handlers check ownership before touching the store.
//! 4. Every failure becomes a `BackendError`, rendered as JSON.
//!
//! # Thread Safety
//!
//! Request handlers share only immutable state: the signing keys, the
//! password hasher settings and the SQLite pool (internally synchronized).

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and authorization
pub mod auth;

/// Community events
pub mod events;

/// Bulletin posts
pub mod posts;

/// Persistence
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Flash message redirects
pub mod flash;

/// Sample data
pub mod seed;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::create_app;
pub use error::BackendError;
pub use store::{SqliteStore, Store, StoreError};
