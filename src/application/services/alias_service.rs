//! Alias creation, listing and deletion.

use std::sync::Arc;

use crate::alias::{Clock, TokenSource, build_alias, parse_option_string};
use crate::domain::{ForwarderList, ForwarderProvider, NewForwarder};
use crate::error::AppError;

/// An alias that has been generated for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAlias {
    pub alias: String,
    pub domain: String,
    pub destination: String,
}

impl GeneratedAlias {
    /// The full forwarding address, `alias@domain`.
    pub fn email(&self) -> String {
        format!("{}@{}", self.alias, self.domain)
    }
}

/// Service for managing forwarders on the mail provider.
///
/// Generates aliases from extension option strings and forwards create, list
/// and delete calls to the [`ForwarderProvider`].
pub struct AliasService {
    provider: Arc<dyn ForwarderProvider>,
    clock: Arc<dyn Clock>,
    tokens: Arc<dyn TokenSource>,
}

impl AliasService {
    /// Creates a new alias service.
    pub fn new(
        provider: Arc<dyn ForwarderProvider>,
        clock: Arc<dyn Clock>,
        tokens: Arc<dyn TokenSource>,
    ) -> Self {
        Self {
            provider,
            clock,
            tokens,
        }
    }

    /// Parses `raw_options` and builds an alias without contacting the provider.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the options cannot produce an alias.
    pub fn generate(&self, raw_options: &str) -> Result<GeneratedAlias, AppError> {
        let options = parse_option_string(raw_options)?;
        let alias = build_alias(&options, self.clock.as_ref(), self.tokens.as_ref())?;

        Ok(GeneratedAlias {
            alias,
            domain: options.domain,
            destination: options.destination,
        })
    }

    /// Generates an alias and creates the matching forwarder.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the options cannot produce an alias
    /// (nothing is sent upstream in that case) and [`AppError::Upstream`] if the
    /// provider rejects the forwarder.
    pub async fn create_alias(&self, raw_options: &str) -> Result<GeneratedAlias, AppError> {
        let generated = self.generate(raw_options)?;

        let forwarder = NewForwarder::new(&generated.alias, &generated.destination);
        self.provider
            .create_forwarder(&generated.domain, &forwarder)
            .await?;

        tracing::info!(
            alias = %generated.alias,
            domain = %generated.domain,
            "Forwarder created"
        );

        Ok(generated)
    }

    /// Lists the forwarders of `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the provider call fails.
    pub async fn list_forwarders(&self, domain: &str) -> Result<ForwarderList, AppError> {
        Ok(self.provider.list_forwarders(domain).await?)
    }

    /// Deletes the forwarder for `email`, returning the provider's status code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] unless `email` has exactly one `@`, and
    /// [`AppError::Upstream`] if the provider call fails.
    pub async fn delete_forwarder(&self, email: &str) -> Result<u16, AppError> {
        let (alias, domain) =
            split_email(email).ok_or_else(|| AppError::bad_request("Invalid email format."))?;

        let status = self.provider.delete_forwarder(domain, alias).await?;

        tracing::info!(alias = %alias, domain = %domain, "Forwarder deleted");

        Ok(status)
    }
}

/// Splits `alias@domain`; any other number of `@` is rejected.
fn split_email(email: &str) -> Option<(&str, &str)> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(alias), Some(domain), None) => Some((alias, domain)),
        _ => None,
    }
}
