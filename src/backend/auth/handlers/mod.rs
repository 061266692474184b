//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Request/response types
//! ├── register.rs   - POST /register
//! ├── login.rs      - POST /login
//! ├── logout.rs     - POST /logout
//! └── protected.rs  - GET /protected
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use neighborly::backend::auth::handlers::{login, register};
//! use neighborly::backend::server::state::AppState;
//! use axum::{routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/register", post(register))
//!     .route("/login", post(login));
//! ```

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Protected greeting handler
pub mod protected;

pub use types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

pub use login::login;
pub use logout::logout;
pub use protected::protected;
pub use register::register;
