//! Alias construction.
//!
//! Two strategies produce the base alias:
//!
//! - **Domain**: `{tld}-{host}-{MM}{Y}{W}` from the target site and the current
//!   date, e.g. `com-example-0262` for `example.com` on 2026-02-08
//! - **Template**: `<slug>` and `<hex>` parts joined by the alias separator,
//!   e.g. `brave_otter_3fa9c1` for `<slug>-<hex>`
//!
//! Prefix and suffix are then wrapped around whichever base was produced.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDateTime};
use regex::Regex;

use super::clock::Clock;
use super::options::{AliasOptions, AliasStrategy, TemplateOptions};
use super::public_suffix::{extract_host, split_host};
use super::template::{TemplatePart, parse_template};
use super::tokens::TokenSource;
use super::AliasError;

/// Host and tld tokens must be plain lowercase DNS labels.
static DOMAIN_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("domain token regex is valid"));

/// Maximum number of host characters kept in a domain alias.
const MAX_HOST_CHARS: usize = 8;

/// Builds the final alias for a request.
///
/// The clock is only consulted by the domain strategy and the token source
/// only by the template strategy.
///
/// # Errors
///
/// Returns the [`AliasError`] of whichever strategy ran; see
/// [`build_domain_alias`] and [`build_template_alias`].
pub fn build_alias(
    options: &AliasOptions,
    clock: &dyn Clock,
    tokens: &dyn TokenSource,
) -> Result<String, AliasError> {
    let base = match &options.strategy {
        AliasStrategy::Domain => build_domain_alias(&options.target, clock.now())?,
        AliasStrategy::Template(template) => {
            build_template_alias(template, &options.alias_separator, tokens)?
        }
    };

    Ok(decorate(base, options))
}

/// Derives `{tld}-{host}-{MM}{Y}{W}` from a website.
///
/// The target is trimmed, lowercased and reduced to its host if it was given
/// as a URL. It is then split around its public suffix and the registrable
/// label is cut to eight characters. `W` is the week of the month counted in
/// plain seven-day buckets from the 1st.
///
/// # Errors
///
/// Returns [`AliasError::DomainFormat`] if the target has no registrable label
/// under a known suffix, or if either token is not `[a-z0-9-]+`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mxroute_alias_gateway::alias::build_domain_alias;
///
/// let now = NaiveDate::from_ymd_opt(2026, 2, 8).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(build_domain_alias("example.com", now).unwrap(), "com-example-0262");
/// ```
pub fn build_domain_alias(target: &str, now: NaiveDateTime) -> Result<String, AliasError> {
    let normalized = target.trim().to_lowercase();
    let split = split_host(extract_host(&normalized)).ok_or(AliasError::DomainFormat)?;

    let tld = split.tld();
    let host: String = split.label.chars().take(MAX_HOST_CHARS).collect();

    if !DOMAIN_TOKEN_REGEX.is_match(&host) || !DOMAIN_TOKEN_REGEX.is_match(tld) {
        return Err(AliasError::DomainFormat);
    }

    Ok(format!(
        "{tld}-{host}-{month:02}{year}{week}",
        month = now.month(),
        year = now.year().rem_euclid(10),
        week = week_of_month(now.day()),
    ))
}

/// Resolves each template placeholder and joins the results.
///
/// All placeholders are validated before any token is generated. A one-word
/// slug is the first word of a two-word slug.
///
/// # Errors
///
/// Returns [`AliasError::UnknownTemplatePart`] for the first placeholder that is
/// neither `slug` nor `hex`.
pub fn build_template_alias(
    template: &TemplateOptions,
    alias_separator: &str,
    tokens: &dyn TokenSource,
) -> Result<String, AliasError> {
    let parts = parse_template(&template.template)?;

    let resolved: Vec<String> = parts
        .into_iter()
        .map(|part| match part {
            TemplatePart::Slug => slug(template, tokens),
            TemplatePart::Hex => tokens.hex(template.hex_length),
        })
        .collect();

    Ok(resolved.join(alias_separator))
}

/// 1-based week of the month: days 1-7 are week 1, 8-14 week 2, and so on.
pub fn week_of_month(day: u32) -> u32 {
    day.saturating_sub(1) / 7 + 1
}

fn slug(template: &TemplateOptions, tokens: &dyn TokenSource) -> String {
    if template.slug_length == 1 {
        return tokens.words(2).into_iter().next().unwrap_or_default();
    }

    tokens
        .words(template.slug_length)
        .join(&template.slug_separator)
}

fn decorate(mut alias: String, options: &AliasOptions) -> String {
    if !options.prefix.is_empty() {
        alias = format!("{}{}{}", options.prefix, options.alias_separator, alias);
    }
    if !options.suffix.is_empty() {
        alias.push_str(&options.alias_separator);
        alias.push_str(&options.suffix);
    }
    alias
}
