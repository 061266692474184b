//! Community Events
//!
//! An event is announced by a registered resident (its organizer) and lists a
//! title, a description, a calendar day and a location. The organizer is
//! fixed at creation time.
//!
//! Dates arrive as `YYYY-MM-DD` and are stored as that day at midnight.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::present;

/// Format accepted for the `date` field of a create request
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A stored community event, as returned by `GET /events/view`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event ID
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Calendar day of the event at midnight
    pub date: NaiveDateTime,
    pub location: String,
    /// User ID of the organizer
    pub organizer_id: i64,
}

/// A validated event ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDateTime,
    pub location: String,
    pub organizer_id: i64,
}

/// Body of `POST /events/create`
///
/// Every field is optional at the decoding stage so that a missing field is
/// reported as a validation failure rather than a decoding failure.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    pub location: Option<String>,
}

/// Response of a successful `POST /events/create`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub message: String,
    pub event_id: i64,
}

impl CreateEventRequest {
    /// Validate the request and attach the organizer resolved from the token.
    pub fn into_new_event(self, organizer_id: i64) -> Result<NewEvent, SharedError> {
        let (Some(title), Some(description), Some(date), Some(location)) = (
            present(self.title),
            present(self.description),
            present(self.date),
            present(self.location),
        ) else {
            return Err(SharedError::validation("event", "All fields are required"));
        };

        Ok(NewEvent {
            title,
            description,
            date: parse_event_date(&date)?,
            location,
            organizer_id,
        })
    }
}

/// Parse a `YYYY-MM-DD` day into midnight of that day.
pub fn parse_event_date(value: &str) -> Result<NaiveDateTime, SharedError> {
    NaiveDate::parse_from_str(value, EVENT_DATE_FORMAT)
        .map(|day| day.and_time(chrono::NaiveTime::MIN))
        .map_err(|_| SharedError::validation("date", "Invalid date format, expected YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_request() -> CreateEventRequest {
        CreateEventRequest {
            title: Some("Community BBQ".to_string()),
            description: Some("Music and games".to_string()),
            date: Some("2025-03-25".to_string()),
            location: Some("Sunnydale Park".to_string()),
        }
    }

    #[test]
    fn test_date_is_stored_at_midnight() {
        let date = parse_event_date("2025-03-25").unwrap();
        assert_eq!(date.to_string(), "2025-03-25 00:00:00");
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        assert!(parse_event_date("25/03/2025").is_err());
        assert!(parse_event_date("2025-02-30").is_err());
    }

    #[test]
    fn test_into_new_event() {
        let event = full_request().into_new_event(7).unwrap();
        assert_eq!(event.organizer_id, 7);
        assert_eq!(event.title, "Community BBQ");
        assert_eq!(event.date, parse_event_date("2025-03-25").unwrap());
    }

    #[test]
    fn test_missing_or_empty_field_is_rejected() {
        let mut request = full_request();
        request.location = None;
        let err = request.into_new_event(1).unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");

        let mut request = full_request();
        request.title = Some(String::new());
        assert!(request.into_new_event(1).is_err());
    }

    #[test]
    fn test_event_serializes_with_public_field_names() {
        let event = Event {
            id: 3,
            title: "Walk".to_string(),
            description: "Group walk".to_string(),
            date: parse_event_date("2025-05-01").unwrap(),
            location: "Lakeside Park".to_string(),
            organizer_id: 4,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["date"], "2025-05-01T00:00:00");
        assert_eq!(json["organizer_id"], 4);
    }
}
