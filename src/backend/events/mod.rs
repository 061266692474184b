//! Events Module
//!
//! Community events: any authenticated resident can announce one, anyone can
//! list them. Events have no update or delete operation.
//!
//! - **`db`** - SQL for the `events` table
//! - **`handlers`** - `POST /events/create`, `GET /events/view`

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_event, view_events};
