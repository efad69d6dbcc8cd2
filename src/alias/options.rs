//! Option string parsing.
//!
//! The extension sends a single comma-separated string such as
//! `domain=example.com,destination=me@example.net,target=github.com`.

use std::collections::HashMap;

use super::AliasError;

pub const DEFAULT_ALIAS_SEPARATOR: &str = "_";
pub const DEFAULT_SLUG_SEPARATOR: &str = "_";
pub const DEFAULT_SLUG_LENGTH: usize = 2;
pub const DEFAULT_HEX_LENGTH: usize = 6;

/// Supported number of words in a `<slug>` part.
pub const SLUG_LENGTH_RANGE: (usize, usize) = (1, 4);
/// Supported number of characters in a `<hex>` part. The upper bound is the
/// RFC 5321 local-part limit.
pub const HEX_LENGTH_RANGE: (usize, usize) = (0, 64);

/// Keys whose default value is left out by [`render_option_string`].
const DEFAULT_VALUES: &[(&str, &str)] = &[
    ("slug_length", "2"),
    ("hex_length", "6"),
    ("alias_separator", DEFAULT_ALIAS_SEPARATOR),
    ("slug_separator", DEFAULT_SLUG_SEPARATOR),
];

/// Validated options for a single "create alias" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasOptions {
    /// Mail domain the forwarder is created on.
    pub domain: String,
    /// Mailbox that receives the forwarded mail.
    pub destination: String,
    /// Website the alias is generated for.
    pub target: String,
    pub prefix: String,
    pub suffix: String,
    pub alias_separator: String,
    pub strategy: AliasStrategy,
}

/// Which of the two mutually exclusive generators runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasStrategy {
    /// `{tld}-{host}-{MMYW}` derived from the target.
    Domain,
    /// Random parts following a `<slug>`/`<hex>` template.
    Template(TemplateOptions),
}

/// Settings that only apply to the template strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOptions {
    pub template: String,
    pub slug_separator: String,
    pub slug_length: usize,
    pub hex_length: usize,
}

/// Splits `key=value` pairs into a map.
///
/// Each item is split on its first `=`; items without one are dropped. When a
/// key appears more than once the last value wins. Keys and values are kept
/// verbatim.
pub fn parse_pairs<I, S>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pairs
        .into_iter()
        .filter_map(|pair| {
            pair.as_ref()
                .split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
        })
        .collect()
}

/// Parses the comma-separated option string sent by the extension.
///
/// # Errors
///
/// See [`parse_options`].
pub fn parse_option_string(raw: &str) -> Result<AliasOptions, AliasError> {
    parse_options(raw.split(','))
}

/// Parses and validates a list of `key=value` pairs.
///
/// # Errors
///
/// - [`AliasError::MissingOptions`] if `domain`, `destination` or `target` is
///   missing or empty
/// - [`AliasError::InvalidNumber`] / [`AliasError::OutOfRange`] if a template is
///   configured and `slug_length` or `hex_length` is unusable
pub fn parse_options<I, S>(pairs: I) -> Result<AliasOptions, AliasError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = parse_pairs(pairs);

    let domain = take_non_empty(&mut options, "domain");
    let destination = take_non_empty(&mut options, "destination");
    let target = take_non_empty(&mut options, "target");
    let (Some(domain), Some(destination), Some(target)) = (domain, destination, target) else {
        return Err(AliasError::MissingOptions);
    };

    let prefix = options.remove("prefix").unwrap_or_default();
    let suffix = options.remove("suffix").unwrap_or_default();
    let alias_separator = options
        .remove("alias_separator")
        .unwrap_or_else(|| DEFAULT_ALIAS_SEPARATOR.to_string());

    let strategy = match take_non_empty(&mut options, "template") {
        Some(template) => {
            let slug_separator = options
                .remove("slug_separator")
                .unwrap_or_else(|| DEFAULT_SLUG_SEPARATOR.to_string());
            let slug_length = parse_length(
                "slug_length",
                options.get("slug_length"),
                DEFAULT_SLUG_LENGTH,
                SLUG_LENGTH_RANGE,
            )?;
            let hex_length = parse_length(
                "hex_length",
                options.get("hex_length"),
                DEFAULT_HEX_LENGTH,
                HEX_LENGTH_RANGE,
            )?;

            AliasStrategy::Template(TemplateOptions {
                template,
                slug_separator,
                slug_length,
                hex_length,
            })
        }
        None => AliasStrategy::Domain,
    };

    Ok(AliasOptions {
        domain,
        destination,
        target,
        prefix,
        suffix,
        alias_separator,
        strategy,
    })
}

/// Renders `key=value` pairs back into an option string.
///
/// Empty values and values equal to their defaults are skipped, so the output
/// stays as short as possible while parsing to the same options.
pub fn render_option_string<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .filter(|(key, value)| !value.is_empty() && !is_default(key, value))
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn is_default(key: &str, value: &str) -> bool {
    DEFAULT_VALUES
        .iter()
        .any(|(default_key, default_value)| *default_key == key && *default_value == value)
}

fn take_non_empty(options: &mut HashMap<String, String>, key: &str) -> Option<String> {
    options.remove(key).filter(|value| !value.is_empty())
}

fn parse_length(
    key: &'static str,
    raw: Option<&String>,
    default: usize,
    (min, max): (usize, usize),
) -> Result<usize, AliasError> {
    let value = match raw {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| AliasError::InvalidNumber {
                key,
                value: raw.clone(),
            })?,
        None => default,
    };

    if value < min || value > max {
        return Err(AliasError::OutOfRange {
            key,
            value,
            min,
            max,
        });
    }

    Ok(value)
}
