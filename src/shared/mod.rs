//! Shared Module
//!
//! Types that cross the HTTP boundary: the event and post records returned
//! to clients, the bodies they submit, and the validation errors raised while
//! reading those bodies.

/// Community event records and requests
pub mod event;

/// Bulletin post records and requests
pub mod post;

/// Shared error types
pub mod error;

/// Presence checks for request fields
pub mod validation;

/// Re-export commonly used types for convenience
pub use event::{CreateEventRequest, CreateEventResponse, Event, NewEvent};
pub use post::{CreatePostForm, NewPost, Post};
pub use error::SharedError;
