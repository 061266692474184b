//! Ownership Guard
//!
//! A resource may only be mutated by the user recorded as its owner. The
//! check runs before any mutating store call; when it fails nothing is
//! written.

use crate::backend::error::BackendError;
use crate::shared::{Event, Post};

/// A resource with an immutable owner
pub trait Owned {
    /// User ID recorded as the owner at creation
    fn owner_id(&self) -> i64;
}

impl Owned for Post {
    fn owner_id(&self) -> i64 {
        self.created_by_id
    }
}

impl Owned for Event {
    fn owner_id(&self) -> i64 {
        self.organizer_id
    }
}

/// Whether `actor_user_id` may mutate `resource`
pub fn can_mutate<R: Owned + ?Sized>(resource: &R, actor_user_id: i64) -> bool {
    resource.owner_id() == actor_user_id
}

/// Refuse with `NotAuthorized` unless `actor_user_id` owns `resource`
pub fn ensure_can_mutate<R: Owned + ?Sized>(
    resource: &R,
    actor_user_id: i64,
    refusal: &str,
) -> Result<(), BackendError> {
    if can_mutate(resource, actor_user_id) {
        Ok(())
    } else {
        tracing::warn!(
            "User {} refused mutation of a resource owned by {}",
            actor_user_id,
            resource.owner_id()
        );
        Err(BackendError::not_authorized(refusal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post_by(owner: i64) -> Post {
        Post {
            id: 1,
            content: "Anyone up for a walk?".to_string(),
            timestamp: Utc::now(),
            created_by_id: owner,
        }
    }

    #[test]
    fn test_owner_can_mutate() {
        assert!(can_mutate(&post_by(5), 5));
        assert!(ensure_can_mutate(&post_by(5), 5, "no").is_ok());
    }

    #[test]
    fn test_other_user_cannot_mutate() {
        assert!(!can_mutate(&post_by(5), 6));
        let err = ensure_can_mutate(&post_by(5), 6, "no").unwrap_err();
        assert!(matches!(err, BackendError::NotAuthorized { .. }));
    }

    #[test]
    fn test_event_owner_is_organizer() {
        let event = Event {
            id: 1,
            title: "BBQ".to_string(),
            description: "Food".to_string(),
            date: crate::shared::event::parse_event_date("2025-03-25").unwrap(),
            location: "Park".to_string(),
            organizer_id: 9,
        };
        assert!(can_mutate(&event, 9));
        assert!(!can_mutate(&event, 1));
    }
}
