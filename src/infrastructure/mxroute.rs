//! MXroute HTTP API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, header::CONTENT_TYPE};
use serde_json::Value;
use url::Url;

use crate::config::MxrouteConfig;
use crate::domain::{ForwarderList, ForwarderProvider, NewForwarder, ProviderError};

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Request(e.to_string())
    }
}

/// [`ForwarderProvider`] backed by the MXroute REST API.
///
/// Every request carries the account's `X-Server`, `X-Username` and
/// `X-API-Key` headers. Calls are made once; failures are reported, not retried.
#[derive(Clone)]
pub struct MxrouteClient {
    client: Client,
    api_url: Url,
    server: String,
    username: String,
    api_key: String,
}

impl MxrouteClient {
    /// Builds a client from validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Request`] if the API URL cannot be parsed or the
    /// HTTP client cannot be built.
    pub fn new(config: &MxrouteConfig) -> Result<Self, ProviderError> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| ProviderError::Request(format!("Invalid MXroute API URL: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url,
            server: config.server.clone(),
            username: config.username.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// `{api_url}/domains/{domain}/forwarders[/{alias}]`, with each segment
    /// percent-encoded.
    fn endpoint(&self, domain: &str, alias: Option<&str>) -> Result<Url, ProviderError> {
        let mut url = self.api_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ProviderError::Request(format!("Invalid MXroute API URL: {}", self.api_url))
            })?;
            segments
                .pop_if_empty()
                .extend(["domains", domain, "forwarders"]);
            if let Some(alias) = alias {
                segments.push(alias);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("X-Server", &self.server)
            .header("X-Username", &self.username)
            .header("X-API-Key", &self.api_key)
            .header(CONTENT_TYPE, "application/json")
    }
}

#[async_trait]
impl ForwarderProvider for MxrouteClient {
    async fn create_forwarder(
        &self,
        domain: &str,
        forwarder: &NewForwarder,
    ) -> Result<(), ProviderError> {
        let url = self.endpoint(domain, None)?;

        self.request(Method::POST, url)
            .json(forwarder)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn list_forwarders(&self, domain: &str) -> Result<ForwarderList, ProviderError> {
        let url = self.endpoint(domain, None)?;

        let response = self
            .request(Method::GET, url)
            .send()
            .await?
            .error_for_status()?;

        let status = response.status().as_u16();
        let mut body: Value = response.json().await?;
        let forwarders = body
            .get_mut("data")
            .map(Value::take)
            .ok_or(ProviderError::MissingData)?;

        tracing::debug!(domain = %domain, status, "Forwarders listed");

        Ok(ForwarderList { status, forwarders })
    }

    async fn delete_forwarder(&self, domain: &str, alias: &str) -> Result<u16, ProviderError> {
        let url = self.endpoint(domain, Some(alias))?;

        let response = self
            .request(Method::DELETE, url)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.status().as_u16())
    }
}
