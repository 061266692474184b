/**
 * Authentication Handler Types
 *
 * Request and response bodies of the authentication endpoints. Request
 * fields are optional so that a missing field becomes a validation error
 * with a readable message instead of a decoding failure.
 */

use serde::{Deserialize, Serialize};

use crate::shared::validation::present;
use crate::shared::SharedError;

/// Register request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct RegisterRequest {
    /// Display name
    pub name: Option<String>,
    /// Email address, used to log in
    pub email: Option<String>,
    /// Password (hashed before storage)
    pub password: Option<String>,
    /// Optional neighborhood tag
    pub neighborhood: Option<String>,
}

/// A validated registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub neighborhood: Option<String>,
}

impl RegisterRequest {
    /// Check the required fields; the error names the first one missing
    pub fn into_registration(self) -> Result<Registration, SharedError> {
        let missing = |field: &'static str| {
            SharedError::validation(field, "Name, email and password are required")
        };

        Ok(Registration {
            name: present(self.name).ok_or_else(|| missing("name"))?,
            email: present(self.email).ok_or_else(|| missing("email"))?,
            password: present(self.password).ok_or_else(|| missing("password"))?,
            neighborhood: present(self.neighborhood),
        })
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Return `(email, password)`; the error names the first field missing
    pub fn into_credentials(self) -> Result<(String, String), SharedError> {
        let missing = |field: &'static str| {
            SharedError::validation(field, "Email and password are required")
        };

        let email = present(self.email).ok_or_else(|| missing("email"))?;
        let password = present(self.password).ok_or_else(|| missing("password"))?;
        Ok((email, password))
    }
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub message: String,
    /// Bearer token for protected routes
    pub access_token: String,
}

/// Plain `{"message": ...}` response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
