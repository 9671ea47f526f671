//! Turning user content into navigable URLs.
//!
//! Content is usually a bare domain (`example.com`) but must still reject
//! garbage (`badLink`), so resolution is two-phase: strings that already carry
//! an http(s) scheme go straight to the URL parser, everything else gets
//! `https://` prepended and has to look like a domain/path before parsing.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::error::{Result, VaunchError};

fn http_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https?://").expect("http prefix pattern is valid"))
}

fn looks_like_url() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(http(s)?://.)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_+.~#?&/=()']*)$",
        )
        .expect("url shape pattern is valid")
    })
}

/// Resolves `raw` into a URL, or [`VaunchError::InvalidUrl`] carrying `raw`.
pub fn resolve_url(raw: &str) -> Result<Url> {
    let invalid = || VaunchError::InvalidUrl(raw.to_string());

    if http_prefix().is_match(raw) {
        return Url::parse(raw).map_err(|_| invalid());
    }

    let prefixed = format!("https://{}", raw);
    if !looks_like_url().is_match(&prefixed) {
        return Err(invalid());
    }
    Url::parse(&prefixed).map_err(|_| invalid())
}

/// Whether [`resolve_url`] would succeed.
pub fn is_valid(raw: &str) -> bool {
    resolve_url(raw).is_ok()
}

/// The resolved href, or `raw` untouched when it does not resolve.
pub fn correct_url(raw: &str) -> String {
    match resolve_url(raw) {
        Ok(url) => url.to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scheme_url_parses_directly() {
        let url = resolve_url("http://example.com").unwrap();
        assert_eq!(url.as_str(), "http://example.com/");
    }

    #[test]
    fn test_bare_domain_gets_https() {
        let url = resolve_url("example.com/search?q=rust").unwrap();
        assert_eq!(url.as_str(), "https://example.com/search?q=rust");
    }

    #[test]
    fn test_www_domain() {
        let url = resolve_url("www.example.org").unwrap();
        assert_eq!(url.as_str(), "https://www.example.org/");
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = resolve_url("badLink").unwrap_err();
        assert_eq!(err, VaunchError::InvalidUrl("badLink".to_string()));
        assert!(!is_valid("badLink"));
        assert!(!is_valid("not a url.com"));
    }

    #[test]
    fn test_unparseable_scheme_url_is_rejected() {
        assert!(!is_valid("http://"));
    }

    #[test]
    fn test_long_tld_is_rejected() {
        assert!(!is_valid("example.abcdefg"));
    }

    #[test]
    fn test_correct_url_falls_back_to_raw() {
        assert_eq!(correct_url("example.com"), "https://example.com/");
        assert_eq!(correct_url("badLink"), "badLink");
    }

    #[test]
    fn test_two_letter_host_needs_a_scheme() {
        // The scheme-less pattern spends one host character after `https://`.
        assert!(resolve_url("bg.epz/l73q7").is_err());
        assert_eq!(
            resolve_url("https://bg.epz/l73q7").unwrap().as_str(),
            "https://bg.epz/l73q7"
        );
        assert!(is_valid("bgx.epz"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Resolving the href of a resolved URL yields the same URL.
        #[test]
        fn prop_resolution_is_idempotent(
            host in "[a-z][a-z0-9]{2,12}",
            tld in "[a-z]{2,6}",
            path in "(/[a-z0-9]{1,8}){0,3}",
            scheme in prop_oneof![Just(""), Just("http://"), Just("https://")],
        ) {
            let raw = format!("{}{}.{}{}", scheme, host, tld, path);
            let first = resolve_url(&raw).unwrap();
            let second = resolve_url(first.as_str()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
