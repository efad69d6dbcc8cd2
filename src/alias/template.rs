//! Template placeholder scanning.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::AliasError;

/// Non-greedy `<name>` placeholder.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(.*?)>").expect("placeholder regex is valid"));

/// A generated token inside an alias template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePart {
    /// Human-readable words, e.g. `brave_otter`.
    Slug,
    /// Random lowercase hex characters.
    Hex,
}

impl FromStr for TemplatePart {
    type Err = AliasError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "slug" => Ok(Self::Slug),
            "hex" => Ok(Self::Hex),
            other => Err(AliasError::UnknownTemplatePart(other.to_string())),
        }
    }
}

/// Extracts the placeholders of `template` in order of appearance.
///
/// Text outside of `<...>` is ignored. Parsing stops at the first placeholder
/// that is not a known [`TemplatePart`].
///
/// # Errors
///
/// Returns [`AliasError::UnknownTemplatePart`] naming the first invalid placeholder.
pub fn parse_template(template: &str) -> Result<Vec<TemplatePart>, AliasError> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .map(|captures| captures[1].parse())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_part() {
        assert_eq!(parse_template("<slug>").unwrap(), vec![TemplatePart::Slug]);
    }

    #[test]
    fn test_parse_keeps_template_order() {
        assert_eq!(
            parse_template("<hex>.<slug>.<hex>").unwrap(),
            vec![TemplatePart::Hex, TemplatePart::Slug, TemplatePart::Hex]
        );
    }

    #[test]
    fn test_literal_text_is_ignored() {
        assert_eq!(
            parse_template("mail-<slug>-x").unwrap(),
            vec![TemplatePart::Slug]
        );
    }

    #[test]
    fn test_template_without_placeholders() {
        assert!(parse_template("plain").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_part() {
        let err = parse_template("<bad>").unwrap_err();

        assert_eq!(err, AliasError::UnknownTemplatePart("bad".to_string()));
        assert!(err.to_string().contains("Template part 'bad' is not allowed"));
    }

    #[test]
    fn test_first_unknown_part_is_reported() {
        let err = parse_template("<slug>-<first>-<second>").unwrap_err();
        assert_eq!(err, AliasError::UnknownTemplatePart("first".to_string()));
    }

    #[test]
    fn test_placeholder_names_are_case_sensitive() {
        let err = parse_template("<SLUG>").unwrap_err();
        assert_eq!(err, AliasError::UnknownTemplatePart("SLUG".to_string()));
    }

    #[test]
    fn test_empty_placeholder_is_rejected() {
        let err = parse_template("<>").unwrap_err();
        assert_eq!(err, AliasError::UnknownTemplatePart(String::new()));
    }

    #[test]
    fn test_matching_is_non_greedy() {
        assert_eq!(
            parse_template("<slug><hex>").unwrap(),
            vec![TemplatePart::Slug, TemplatePart::Hex]
        );
    }
}
