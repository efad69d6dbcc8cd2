//! Application layer services.
//!
//! Services sit between the HTTP handlers and the [`crate::domain`] provider
//! trait: they turn option strings into aliases, validate input, and log what
//! was changed upstream.
//!
//! # Available Services
//!
//! - [`services::alias_service::AliasService`] - Alias generation and forwarder management
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
