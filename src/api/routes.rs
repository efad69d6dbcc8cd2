//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{add_handler, delete_handler, list_handler, status_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /`                - Status text
/// - `POST   /add/{*path}`     - Generate an alias and create its forwarder
/// - `GET    /list/{domain}`   - List forwarders of a domain
/// - `DELETE /delete/{email}`  - Delete a forwarder
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(status_handler))
        .route("/add/{*path}", post(add_handler))
        .route("/list/{domain}", get(list_handler))
        .route("/delete/{email}", delete(delete_handler))
}
