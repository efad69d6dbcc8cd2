//! Domain layer: forwarding rules and the upstream provider contract.
//!
//! The gateway owns no data of its own. Forwarders live at the mail provider
//! and are reached through the [`ForwarderProvider`] trait, implemented in
//! [`crate::infrastructure::mxroute`].
//!
//! # Design Principles
//!
//! - No dependency on HTTP frameworks or client libraries
//! - Mock implementation is auto-generated via `mockall` for service tests

pub mod forwarder;

pub use forwarder::{ForwarderList, ForwarderProvider, NewForwarder, ProviderError};

#[cfg(test)]
pub use forwarder::MockForwarderProvider;
