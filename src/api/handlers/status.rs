//! Handler for the status endpoint.

/// Text returned by `GET /`; the extension checks it when the gateway is configured.
pub const STATUS_TEXT: &str = "Bitwarden Mxroute plugin is running healthy.";

/// Reports that the gateway is up.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// `200 OK` with a plain-text body. Does not contact MXroute.
pub async fn status_handler() -> &'static str {
    STATUS_TEXT
}
