//! # MXroute Alias Gateway
//!
//! An authenticated HTTP gateway that generates email forwarding aliases and
//! creates them on MXroute, for use as a password manager's forwarder backend.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Alias Core** ([`alias`]) - Option parsing and alias generation, free of I/O
//! - **Domain Layer** ([`domain`]) - Forwarder types and the provider trait
//! - **Application Layer** ([`application`]) - Service orchestration and authentication
//! - **Infrastructure Layer** ([`infrastructure`]) - MXroute HTTP client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Aliases
//!
//! Without a template, aliases encode where they were used and when:
//! `github.com` in February 2026 (second week) becomes `com-github-0262`.
//! With a template such as `<slug>_<hex>` they are random: `bold_tiger_3fa91c`.
//!
//! ## Quick Start
//!
//! ```bash
//! export SERVER_API_TOKEN="long-random-string"
//! export MXROUTE_SERVER="fusion.mxrouting.net"
//! export MXROUTE_USERNAME="account"
//! export MXROUTE_API_KEY="api-key"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod alias;
pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::alias::{AliasOptions, Clock, FixedClock, TokenSource};
    pub use crate::application::services::{AliasService, AuthService, GeneratedAlias};
    pub use crate::domain::{ForwarderProvider, NewForwarder};
    pub use crate::error::AppError;
    pub use crate::infrastructure::MxrouteClient;
    pub use crate::state::AppState;
}
