//! DTOs for the alias endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /add/{*path}`.
///
/// The field is called `domain` for compatibility with the password manager's
/// forwarder integration, but it holds the whole comma-separated options
/// string, e.g. `domain=example.com,destination=me@example.com,target=site.com`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddRequest {
    #[validate(length(max = 2048, message = "Options string is too long"))]
    pub domain: String,
}

/// Successful response of `POST /add/{*path}`.
#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub data: AddedEmail,
}

#[derive(Debug, Serialize)]
pub struct AddedEmail {
    pub email: String,
}

impl AddResponse {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            data: AddedEmail {
                email: email.into(),
            },
        }
    }
}
