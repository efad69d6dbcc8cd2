//! Handler for deleting a forwarder.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::message::MessageResponse;
use crate::api::handlers::upstream_status;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the forwarder for `alias@domain`.
///
/// # Endpoint
///
/// `DELETE /delete/{email}`
///
/// # Response
///
/// ```json
/// { "message": "Deleted." }
/// ```
///
/// Sent with MXroute's status code.
///
/// # Errors
///
/// - 400 Bad Request: `email` does not contain exactly one `@`
/// - 500 Internal Server Error: MXroute call failed
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let status = state.alias_service.delete_forwarder(&email).await?;

    Ok((
        upstream_status(status),
        Json(MessageResponse::new("Deleted.")),
    ))
}
