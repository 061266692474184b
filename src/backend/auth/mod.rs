//! Authentication Module
//!
//! User registration, login, token handling and ownership checks.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuance and verification
//! - **`users`** - User model and database operations
//! - **`ownership`** - Owner-only mutation guard
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → password hashed → user
//!    created. No token is returned; the client logs in next.
//! 2. **Login**: email and password → hash verified → JWT returned.
//! 3. **Protected routes**: `Authorization: Bearer <token>` → token verified
//!    by the auth middleware → user ID handed to the handler.
//! 4. **Logout**: acknowledged only; the token stays valid until it expires.
//!
//! # Security
//!
//! - Unknown email and wrong password produce the same 401 response
//! - Passwords and tokens are never logged
//! - Token lifetime is configured by `JWT_ACCESS_TOKEN_EXPIRES`

/// Password hashing
pub mod password;

/// JWT token management
pub mod sessions;

/// User model and queries
pub mod users;

/// Ownership guard
pub mod ownership;

/// HTTP handlers
pub mod handlers;

pub use handlers::{login, logout, protected, register};
pub use password::PasswordHasher;
pub use sessions::{AuthError, TokenError, TokenIssuer};
pub use users::{NewUser, User};
