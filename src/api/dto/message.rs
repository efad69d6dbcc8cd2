//! Plain message response.

use serde::Serialize;

/// `{"message": "..."}` body used by the delete endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
