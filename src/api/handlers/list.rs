//! Handler for listing forwarders.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::api::handlers::upstream_status;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the forwarders of a domain exactly as MXroute reports them.
///
/// # Endpoint
///
/// `GET /list/{domain}`
///
/// # Response
///
/// The `data` field of MXroute's response, with MXroute's status code.
///
/// # Errors
///
/// - 500 Internal Server Error: MXroute call failed or returned no `data`
pub async fn list_handler(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let list = state.alias_service.list_forwarders(&domain).await?;

    Ok((upstream_status(list.status), Json(list.forwarders)))
}
