//! Backend Error Module
//!
//! Error types used at the HTTP boundary. Every handler returns
//! `Result<_, BackendError>`; the error is turned into a JSON response by its
//! `IntoResponse` implementation, so no raw internal fault ever reaches a
//! client.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Error Types
//!
//! - `InvalidCredentials` - Login with an unknown email or wrong password
//! - `DuplicateEmail` - Registration with an email already in use
//! - `Unauthorized` - Missing, malformed, tampered or expired token
//! - `NotAuthorized` - Ownership check failed
//! - `NotFound` - Resource does not exist
//! - `ValidationError` - Missing or unparsable request fields
//! - `InternalError` - Storage, hashing or signing failure

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
