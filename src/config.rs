//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! ```bash
//! export SERVER_API_TOKEN="long-random-string"
//! export MXROUTE_SERVER="fusion.mxrouting.net"
//! export MXROUTE_USERNAME="account"
//! export MXROUTE_API_KEY="api-key"
//! ```
//!
//! ## Optional Variables
//!
//! - `MXROUTE_API_URL` - Provider API base URL (default: `https://api.mxroute.com`)
//! - `MXROUTE_TIMEOUT_SECS` - Upstream request timeout (default: 15, range: 1-300)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers (default: `false`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

pub const DEFAULT_MXROUTE_API_URL: &str = "https://api.mxroute.com";
pub const DEFAULT_MXROUTE_TIMEOUT_SECS: u64 = 15;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Bearer token clients must present. Loaded from `SERVER_API_TOKEN`.
    pub server_api_token: String,
    pub mxroute: MxrouteConfig,
}

/// Credentials and endpoint of the MXroute API.
#[derive(Debug, Clone)]
pub struct MxrouteConfig {
    pub api_url: String,
    pub server: String,
    pub username: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SERVER_API_TOKEN` or any MXroute credential is missing.
    pub fn from_env() -> Result<Self> {
        let server_api_token =
            env::var("SERVER_API_TOKEN").context("SERVER_API_TOKEN must be set")?;

        let mxroute = MxrouteConfig::from_env().context("Failed to load MXroute configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            server_api_token,
            mxroute,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `server_api_token` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - the MXroute settings are invalid (see [`MxrouteConfig::validate`])
    pub fn validate(&self) -> Result<()> {
        if self.server_api_token.is_empty() {
            anyhow::bail!("SERVER_API_TOKEN must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        self.mxroute.validate()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  API token: {}", mask_secret(&self.server_api_token));
        tracing::info!("  MXroute API: {}", self.mxroute.api_url);
        tracing::info!("  MXroute server: {}", self.mxroute.server);
        tracing::info!("  MXroute username: {}", self.mxroute.username);
        tracing::info!("  MXroute API key: {}", mask_secret(&self.mxroute.api_key));
        tracing::info!("  MXroute timeout: {}s", self.mxroute.timeout_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
    }
}

impl MxrouteConfig {
    /// Loads the MXroute settings on their own.
    ///
    /// Used by `aliasctl`, which talks to MXroute without serving HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if `MXROUTE_SERVER`, `MXROUTE_USERNAME` or
    /// `MXROUTE_API_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let server = env::var("MXROUTE_SERVER").context("MXROUTE_SERVER must be set")?;
        let username = env::var("MXROUTE_USERNAME").context("MXROUTE_USERNAME must be set")?;
        let api_key = env::var("MXROUTE_API_KEY").context("MXROUTE_API_KEY must be set")?;

        let api_url =
            env::var("MXROUTE_API_URL").unwrap_or_else(|_| DEFAULT_MXROUTE_API_URL.to_string());

        let timeout_secs = env::var("MXROUTE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MXROUTE_TIMEOUT_SECS);

        Ok(Self {
            api_url,
            server,
            username,
            api_key,
            timeout_secs,
        })
    }

    /// Validates the MXroute settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_url` is not an absolute `http`/`https` URL
    /// - `server`, `username` or `api_key` is empty
    /// - `timeout_secs` is outside 1-300
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_url)
            .with_context(|| format!("MXROUTE_API_URL is not a valid URL: '{}'", self.api_url))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "MXROUTE_API_URL must use http or https, got '{}'",
                self.api_url
            );
        }

        if self.server.is_empty() {
            anyhow::bail!("MXROUTE_SERVER must not be empty");
        }
        if self.username.is_empty() {
            anyhow::bail!("MXROUTE_USERNAME must not be empty");
        }
        if self.api_key.is_empty() {
            anyhow::bail!("MXROUTE_API_KEY must not be empty");
        }

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            anyhow::bail!(
                "MXROUTE_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.timeout_secs
            );
        }

        Ok(())
    }
}

/// Masks a secret for logging, keeping only its first four characters.
///
/// - `abcdef123456` → `abcd***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "***".to_string();
    }

    let visible: String = secret.chars().take(4).collect();
    format!("{visible}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
