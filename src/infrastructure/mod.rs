//! Infrastructure layer for external integrations.
//!
//! Implements the [`crate::domain::ForwarderProvider`] trait against the
//! MXroute REST API.
//!
//! # Modules
//!
//! - [`mxroute`] - reqwest-based MXroute client

pub mod mxroute;

pub use mxroute::MxrouteClient;
