// src/crawl/normalize.rs
// =============================================================================
// URL canonicalization and same-domain filtering.
//
// A canonical URL is absolute (relative hrefs get the crawl domain prepended)
// and carries no trailing slash. Two URLs are the same page iff their
// canonical strings are equal, which is what the visited set relies on.
//
// The domain is the scheme + host (+ port) of the seed, spelled exactly as
// the seed spells it, e.g.
//   "https://example.com/blog/" -> "https://example.com"
// =============================================================================

use crate::error::CrawlError;
use url::Url;

/// A validated seed URL together with the domain the crawl is locked to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    /// Canonical form of the seed URL
    pub url: String,
    /// Scheme + host prefix every crawled URL must start with
    pub domain: String,
}

impl Seed {
    /// Parses and validates a seed URL
    ///
    /// Only absolute http/https URLs with a host are accepted. The url crate
    /// is used for validation only: the seed and the domain keep the exact
    /// spelling that was passed in, so they compare byte-for-byte with hrefs
    /// that go through `normalize`.
    pub fn parse(raw: &str) -> Result<Self, CrawlError> {
        let invalid = |reason: String| CrawlError::InvalidSeed {
            url: raw.to_string(),
            reason,
        };

        let trimmed = raw.trim();
        let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(invalid(format!(
                "unsupported scheme '{}', expected http or https",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(invalid("URL has no host".to_string()));
        }

        let domain = origin_prefix(trimmed)
            .ok_or_else(|| invalid("expected scheme://host".to_string()))?
            .to_string();
        let url = normalize(trimmed, &domain);

        Ok(Seed { url, domain })
    }
}

// "https://Example.com:8080/a?b" -> "https://Example.com:8080"
fn origin_prefix(url: &str) -> Option<&str> {
    let host_start = url.find("://")? + 3;
    let host_end = url[host_start..]
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .map_or(url.len(), |i| host_start + i);

    if host_end == host_start {
        return None;
    }
    Some(&url[..host_end])
}

/// Turns a raw href into its canonical form
///
/// Relative hrefs ("/about") are resolved against `domain`; anything else is
/// taken as already absolute. Exactly one trailing slash is removed.
/// An empty input comes back empty.
///
/// Examples (domain = "https://example.com"):
///   "/home"                 -> "https://example.com/home"
///   "https://example.com/"  -> "https://example.com"
pub fn normalize(raw: &str, domain: &str) -> String {
    if is_relative(raw) {
        let absolute = format!("{}{}", domain, raw);
        strip_trailing_slash(&absolute).to_string()
    } else {
        strip_trailing_slash(raw).to_string()
    }
}

/// Returns true if `url` belongs to the crawl domain
///
/// Relative hrefs are always in-domain. Absolute ones must start with the
/// domain prefix. Empty input is never in-domain.
pub fn same_domain(url: &str, domain: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    is_relative(url) || url.starts_with(domain)
}

// "//cdn.example.com/x" is protocol-relative, i.e. it names another host
fn is_relative(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//")
}

fn strip_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "https://example.com";

    #[test]
    fn test_same_domain_accepts_domain_url() {
        assert!(same_domain("https://example.com", DOMAIN));
        assert!(same_domain("https://example.com/home", DOMAIN));
    }

    #[test]
    fn test_same_domain_accepts_relative_url() {
        assert!(same_domain("/home", DOMAIN));
        assert!(same_domain("/", DOMAIN));
    }

    #[test]
    fn test_same_domain_rejects_empty_and_foreign() {
        assert!(!same_domain("", DOMAIN));
        assert!(!same_domain("https://google.com/home", DOMAIN));
        assert!(!same_domain("http://example.com/home", DOMAIN));
        assert!(!same_domain("//cdn.other.com/lib.js", DOMAIN));
        assert!(!same_domain("mailto:me@example.com", DOMAIN));
        assert!(!same_domain("#top", DOMAIN));
    }

    #[test]
    fn test_normalize_removes_trailing_slash() {
        assert_eq!(normalize("https://example.com/", DOMAIN), "https://example.com");
        assert_eq!(normalize("https://example.com/docs/", DOMAIN), "https://example.com/docs");
    }

    #[test]
    fn test_normalize_resolves_relative_url() {
        assert_eq!(normalize("/home", DOMAIN), "https://example.com/home");
        assert_eq!(normalize("/", DOMAIN), "https://example.com");
    }

    #[test]
    fn test_normalize_keeps_empty_string() {
        assert_eq!(normalize("", DOMAIN), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["/home", "/home/", "https://example.com/", "https://example.com/a/b", ""] {
            let once = normalize(raw, DOMAIN);
            assert_eq!(normalize(&once, DOMAIN), once, "input: {raw:?}");
        }
    }

    #[test]
    fn test_seed_parse_derives_domain() {
        let seed = Seed::parse("https://example.com/blog/").unwrap();
        assert_eq!(seed.domain, "https://example.com");
        assert_eq!(seed.url, "https://example.com/blog");
    }

    #[test]
    fn test_seed_keeps_spelling_of_raw_input() {
        let seed = Seed::parse(" https://Example.com/café/ ").unwrap();
        assert_eq!(seed.domain, "https://Example.com");
        assert_eq!(seed.url, "https://Example.com/café");
        assert_eq!(seed.url, normalize("/café", &seed.domain));
    }

    #[test]
    fn test_seed_domain_stops_at_query() {
        let seed = Seed::parse("https://example.com?page=2").unwrap();
        assert_eq!(seed.domain, "https://example.com");
        assert_eq!(seed.url, "https://example.com?page=2");
    }

    #[test]
    fn test_seed_parse_keeps_explicit_port() {
        let seed = Seed::parse("http://127.0.0.1:8080").unwrap();
        assert_eq!(seed.domain, "http://127.0.0.1:8080");
        assert_eq!(seed.url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_seed_parse_rejects_bad_input() {
        assert!(matches!(Seed::parse("not a url"), Err(CrawlError::InvalidSeed { .. })));
        assert!(matches!(Seed::parse("/relative"), Err(CrawlError::InvalidSeed { .. })));
        assert!(matches!(
            Seed::parse("ftp://example.com/file"),
            Err(CrawlError::InvalidSeed { .. })
        ));
        assert!(matches!(
            Seed::parse("https:example.com"),
            Err(CrawlError::InvalidSeed { .. })
        ));
    }
}
