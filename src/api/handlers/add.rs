//! Handler for alias creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::alias::{AddRequest, AddResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Generates an alias and creates the forwarder for it.
///
/// # Endpoint
///
/// `POST /add/{*path}`
///
/// The path suffix is ignored. Clients append the mailbox they are creating
/// the alias for, which the gateway has no use for.
///
/// # Request Body
///
/// ```json
/// {
///   "domain": "domain=example.com,destination=me@example.com,target=github.com,template=<slug>_<hex>"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "data": {
///     "email": "bold_tiger_3fa91c@example.com"
///   }
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: body is not JSON or has no `domain` field
/// - 412 Precondition Failed: options cannot produce an alias
/// - 500 Internal Server Error: MXroute rejected the forwarder
pub async fn add_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddRequest>, JsonRejection>,
) -> Result<Json<AddResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    payload.validate()?;

    let generated = state.alias_service.create_alias(&payload.domain).await?;

    Ok(Json(AddResponse::new(generated.email())))
}
