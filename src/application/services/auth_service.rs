//! Authentication service for API token validation.

use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Service for authenticating API requests via Bearer tokens.
///
/// The gateway accepts a single shared token. Only its SHA-256 digest is kept
/// in memory, and presented tokens are compared digest to digest.
pub struct AuthService {
    token_hash: [u8; 32],
}

impl AuthService {
    /// Creates a new authentication service for `token`.
    pub fn new(token: &str) -> Self {
        Self {
            token_hash: hash_token(token),
        }
    }

    /// Checks a raw token presented by a client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not match.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        if hash_token(token) != self.token_hash {
            tracing::debug!("Rejected request with invalid API token");
            return Err(AppError::unauthorized("Invalid token"));
        }

        Ok(())
    }
}

/// Hashes a raw token with SHA-256.
fn hash_token(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}
