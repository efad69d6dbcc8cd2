//! Alias generation core.
//!
//! Turns the option string configured in the browser extension into the local
//! part of a forwarding address. Everything in this module is synchronous and
//! stateless; time and randomness come in through the [`Clock`] and
//! [`TokenSource`] traits so callers (and tests) decide where they come from.
//!
//! # Flow
//!
//! 1. [`options::parse_option_string`] splits `key=value` pairs into [`AliasOptions`]
//! 2. [`builder::build_alias`] picks the domain or template strategy
//! 3. Prefix and suffix decoration is applied on top of either strategy
//!
//! # Modules
//!
//! - [`options`] - Option string parsing and rendering
//! - [`builder`] - Domain and template strategies plus decoration
//! - [`template`] - Template placeholder scanning
//! - [`public_suffix`] - Registrable-label extraction over the bundled suffix list
//! - [`tokens`] - Slug words and hex tokens
//! - [`clock`] - Wall-clock seam

pub mod builder;
pub mod clock;
pub mod options;
pub mod public_suffix;
pub mod template;
pub mod tokens;
mod words;

pub use builder::{build_alias, build_domain_alias, build_template_alias};
pub use clock::{Clock, FixedClock, SystemClock};
pub use options::{AliasOptions, AliasStrategy, TemplateOptions, parse_option_string, parse_options};
pub use template::TemplatePart;
pub use tokens::{RandomTokens, TokenSource};

use thiserror::Error;

/// Validation failures raised while parsing options or building an alias.
///
/// All of these are caller errors: nothing is retried and no partial alias is
/// ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    /// One of `domain`, `destination` or `target` is absent or empty.
    #[error("The 'domain', 'destination', and 'target' options are required to be configured.")]
    MissingOptions,

    /// The target could not be reduced to a `tld` and host token.
    #[error("The 'target' option must be a valid domain (e.g. example.com).")]
    DomainFormat,

    /// A template placeholder other than `<slug>` or `<hex>`.
    #[error("Template part '{0}' is not allowed.")]
    UnknownTemplatePart(String),

    /// A numeric option that is not a whole number.
    #[error("The '{key}' option must be a whole number, got '{value}'.")]
    InvalidNumber { key: &'static str, value: String },

    /// A numeric option outside of its supported range.
    ///
    /// `hex_length` stops at 64 because RFC 5321 limits the local part of an
    /// address to 64 octets; a longer `<hex>` part could never be delivered.
    #[error("The '{key}' option must be between {min} and {max}, got {value}.")]
    OutOfRange {
        key: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}
