//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /`                - Status text
//! - `POST   /add/{*path}`     - Create alias
//! - `GET    /list/{domain}`   - List forwarders
//! - `DELETE /delete/{email}`  - Delete forwarder
//!
//! Every route requires a Bearer token.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, the extension calls from its own origin
//! - **Authentication** - Bearer token, skipped for `OPTIONS`
//!
//! Rate limiting and path normalization are added by [`crate::server`], since
//! both need the raw connection the test harness does not provide.

use crate::api;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::protected_routes()
        .layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}
