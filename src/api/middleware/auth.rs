//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// `OPTIONS` requests are answered with `200 OK` without authentication so
/// browser preflights from the extension succeed.
///
/// # Errors
///
/// Returns `401 Unauthorized` with:
/// - `Missing or invalid Authorization header` if there is no Bearer token
/// - `Invalid token` if the token does not match `SERVER_API_TOKEN`
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/", get(status_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("Missing or invalid Authorization header"))?;

    st.auth_service.authenticate(&token)?;

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
