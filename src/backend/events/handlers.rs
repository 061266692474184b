/**
 * Event Handlers
 *
 * - `POST /events/create` (protected) - the caller becomes the organizer
 * - `GET /events/view` (public) - every event
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::store::Store;
use crate::shared::{CreateEventRequest, CreateEventResponse, Event};

/// Create an event organized by the caller
///
/// # Errors
///
/// * `400 Bad Request` - Body is not JSON, a field is missing, or the date
///   is not `YYYY-MM-DD`
/// * `500 Internal Server Error` - Storage failure (the write is rolled back)
///
/// # Example Request
///
/// ```http
/// POST /events/create HTTP/1.1
/// Authorization: Bearer eyJ...
/// Content-Type: application/json
///
/// {
///   "title": "Community BBQ",
///   "description": "Music and games",
///   "date": "2025-03-25",
///   "location": "Central Park"
/// }
/// ```
pub async fn create_event(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateEventResponse>), BackendError> {
    let Json(request) = payload?;
    let new_event = request.into_new_event(user.user_id)?;

    let event_id = store.create_event(new_event).await?;
    tracing::info!("User {} created event {}", user.user_id, event_id);

    Ok((
        StatusCode::CREATED,
        Json(CreateEventResponse {
            message: "Event created successfully".to_string(),
            event_id,
        }),
    ))
}

/// List all events
pub async fn view_events(
    State(store): State<Arc<dyn Store>>,
) -> Result<Json<Vec<Event>>, BackendError> {
    Ok(Json(store.list_events().await?))
}
