//! Presence checks for request fields.
//!
//! Inputs are only checked for presence: a field counts as provided when it
//! is present and non-empty. Content is stored as submitted.

/// Keep `value` only when it is present and non-empty.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
