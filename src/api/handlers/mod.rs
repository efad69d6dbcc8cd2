//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

use axum::http::StatusCode;

pub mod add;
pub mod delete;
pub mod list;
pub mod status;

pub use add::add_handler;
pub use delete::delete_handler;
pub use list::list_handler;
pub use status::status_handler;

/// Converts a status code reported by MXroute into a response status.
fn upstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::OK)
}
