// src/error.rs
// =============================================================================
// Error types for the crawler and its collaborators.
//
// Any Transport or Parse error aborts the crawl that raised it. The caller
// gets the first failure and no partial sitemap.
// =============================================================================

use thiserror::Error;

/// Everything that can go wrong between reading the seed URL and producing
/// the sitemap document.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed is not an absolute http(s) URL with a host
    #[error("invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    /// Fetching a page failed (network, timeout or non-success HTTP status)
    #[error("failed to fetch {url}: {reason}")]
    Transport { url: String, reason: String },

    /// Page content could not be read as link-bearing markup
    #[error("failed to parse page: {0}")]
    Parse(String),

    /// `pick_any` was called on an empty set. This is a bug in the caller.
    #[error("tried to pick from an empty set")]
    EmptyContainer,

    /// Writing the sitemap document failed
    #[error("failed to encode sitemap: {0}")]
    Encoding(String),
}
