//! Shared Error Types
//!
//! Errors raised while reading client input, before any storage or
//! authentication work happens.
//!
//! # Error Categories
//!
//! - `ValidationError` - A required field is missing or unparsable
//!
//! # Usage
//!
//! ```rust
//! use neighborly::shared::error::SharedError;
//!
//! let error = SharedError::validation("date", "Invalid date format, expected YYYY-MM-DD");
//! ```
use thiserror::Error;

/// Input errors shared by every handler
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    ///
    /// The display form is the bare message so it can be returned to
    /// clients verbatim.
    #[error("{message}")]
    ValidationError {
        /// The field (or field group) that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
