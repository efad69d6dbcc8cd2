//! Forwarder entities and the upstream provider trait.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Body of an upstream "create forwarder" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewForwarder {
    /// Local part of the address, without `@domain`.
    pub alias: String,
    pub destinations: Vec<String>,
}

impl NewForwarder {
    /// A forwarder delivering to a single mailbox.
    pub fn new(alias: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            destinations: vec![destination.into()],
        }
    }
}

/// Forwarders of a domain as reported by the provider.
///
/// The gateway does not interpret the entries; they are handed to the client
/// as-is together with the provider's status code.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwarderList {
    pub status: u16,
    pub forwarders: Value,
}

/// Errors reported by a [`ForwarderProvider`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure or non-success status. Carries the client's message.
    #[error("{0}")]
    Request(String),

    /// A list response without a `data` field.
    #[error("Upstream response did not contain forwarder data")]
    MissingData,
}

/// Mail provider holding the forwarding rules.
///
/// # Implementations
///
/// - [`crate::infrastructure::mxroute::MxrouteClient`] - MXroute HTTP API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ForwarderProvider: Send + Sync {
    /// Creates a forwarder on `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Request`] if the provider rejects the call.
    async fn create_forwarder(
        &self,
        domain: &str,
        forwarder: &NewForwarder,
    ) -> Result<(), ProviderError>;

    /// Lists the forwarders of `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Request`] if the provider rejects the call and
    /// [`ProviderError::MissingData`] if the response has no forwarder data.
    async fn list_forwarders(&self, domain: &str) -> Result<ForwarderList, ProviderError>;

    /// Deletes `alias@domain`, returning the provider's status code.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Request`] if the provider rejects the call.
    async fn delete_forwarder(&self, domain: &str, alias: &str) -> Result<u16, ProviderError>;
}
