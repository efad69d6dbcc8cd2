//! Registrable-label extraction over the bundled public suffix list.
//!
//! Only the ICANN section of the list is honoured: private suffixes such as
//! `github.io` are treated like ordinary subdomains, so `user.github.io`
//! resolves to the label `github` under the suffix `io`.

use psl::{Suffix, Type};

/// A hostname split around its public suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitHost<'a> {
    /// The label directly left of the suffix (`example` in `blog.example.co.uk`).
    pub label: &'a str,
    /// The public suffix (`co.uk` in `blog.example.co.uk`).
    pub suffix: &'a str,
}

impl SplitHost<'_> {
    /// The last label of the suffix (`uk` for `co.uk`).
    pub fn tld(&self) -> &str {
        self.suffix.rsplit('.').next().unwrap_or(self.suffix)
    }
}

/// Reduces a URL-ish target to its host.
///
/// Strips an optional `scheme://`, anything after the first `/`, `?` or `#`,
/// user info and a port. Plain hostnames are returned unchanged.
pub fn extract_host(target: &str) -> &str {
    let rest = match target.split_once("://") {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => target.strip_prefix("//").unwrap_or(target),
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let host_port = authority.rsplit('@').next().unwrap_or(authority);

    if host_port.starts_with('[') {
        // IPv6 literal; never a registrable name, keep it intact
        return host_port;
    }

    host_port.split(':').next().unwrap_or(host_port)
}

fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Splits `host` into its registrable label and public suffix.
///
/// Returns `None` when the name has no known suffix, is itself a suffix, or has
/// an empty label in front of the suffix. A single trailing dot is ignored.
pub fn split_host(host: &str) -> Option<SplitHost<'_>> {
    let host = host.strip_suffix('.').unwrap_or(host);
    let suffix_len = icann_suffix(host)?.as_bytes().len();

    let rest = host.get(..host.len().checked_sub(suffix_len)?)?;
    let rest = rest.strip_suffix('.')?;
    let label = rest.rsplit('.').next()?;
    if label.is_empty() {
        return None;
    }

    Some(SplitHost {
        label,
        suffix: &host[host.len() - suffix_len..],
    })
}

/// Finds the longest known ICANN suffix of `host`, skipping private rules.
fn icann_suffix(host: &str) -> Option<Suffix<'_>> {
    let mut candidate = host;

    loop {
        let suffix = psl::suffix(candidate.as_bytes())?;
        if !suffix.is_known() {
            return None;
        }
        if suffix.typ() == Some(Type::Icann) {
            return Some(suffix);
        }

        // Private rule: retry with its leftmost label removed.
        let matched = std::str::from_utf8(suffix.as_bytes()).ok()?;
        let (_, parent) = matched.split_once('.')?;
        candidate = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(host: &str) -> Option<(&str, &str)> {
        split_host(host).map(|split| (split.label, split.suffix))
    }

    #[test]
    fn test_extract_host_plain() {
        assert_eq!(extract_host("example.com"), "example.com");
    }

    #[test]
    fn test_extract_host_from_url() {
        assert_eq!(extract_host("https://www.example.com/login?next=/"), "www.example.com");
        assert_eq!(extract_host("//cdn.example.com/x.js"), "cdn.example.com");
    }

    #[test]
    fn test_extract_host_strips_port_and_user_info() {
        assert_eq!(extract_host("ftp://user:pw@files.example.org:2121"), "files.example.org");
        assert_eq!(extract_host("example.com:8080"), "example.com");
    }

    #[test]
    fn test_extract_host_ipv6() {
        assert_eq!(extract_host("http://[::1]:8080/"), "[::1]:8080");
        assert_eq!(split("[::1]:8080"), None);
    }

    #[test]
    fn test_simple_domain() {
        assert_eq!(split("example.com"), Some(("example", "com")));
    }

    #[test]
    fn test_subdomain_is_dropped() {
        assert_eq!(split("www.example.com"), Some(("example", "com")));
    }

    #[test]
    fn test_multi_label_suffix() {
        assert_eq!(split("blog.example.co.uk"), Some(("example", "co.uk")));
    }

    #[test]
    fn test_tld_is_last_suffix_label() {
        let split = split_host("blog.example.co.uk").unwrap();
        assert_eq!(split.tld(), "uk");

        let split = split_host("example.com").unwrap();
        assert_eq!(split.tld(), "com");
    }

    #[test]
    fn test_private_suffix_is_ignored() {
        assert_eq!(split("someone.github.io"), Some(("github", "io")));
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(split("example.com."), Some(("example", "com")));
    }

    #[test]
    fn test_bare_word_has_no_suffix() {
        assert_eq!(split("invalid"), None);
    }

    #[test]
    fn test_suffix_alone_has_no_label() {
        assert_eq!(split("co.uk"), None);
        assert_eq!(split("com"), None);
    }

    #[test]
    fn test_unknown_tld() {
        assert_eq!(split("example.notarealtld"), None);
    }

    #[test]
    fn test_ip_address() {
        assert_eq!(split("192.168.1.1"), None);
    }

    #[test]
    fn test_empty_label() {
        assert_eq!(split(".com"), None);
        assert_eq!(split("example..com"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split(""), None);
    }
}
