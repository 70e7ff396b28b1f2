// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl loop.
//
// How it works:
// 1. Canonicalize the seed URL and put it in the frontier
// 2. Take any URL out of the frontier; skip it if already visited
// 3. Fetch the page and extract its links
// 4. Add every same-domain link that hasn't been visited to the frontier
// 5. Mark the page visited and repeat until the frontier is empty
//
// The visited set is what makes link cycles (A -> B -> A) safe: a page is
// fetched at most once, and the set only grows, so the loop always ends.
//
// Pages are fetched one at a time. The first fetch or parse error aborts the
// whole crawl and nothing is returned but the error.
//
// Rust concepts:
// - Generics: the crawler works with any PageFetcher / LinkExtractor
// - Consuming `self`: a Crawler runs once, then its state is gone
// =============================================================================

use super::normalize::{normalize, same_domain, Seed};
use super::store::UrlSet;
use crate::error::CrawlError;
use crate::fetch::{HtmlLinkExtractor, HttpFetcher, Link, LinkExtractor, PageFetcher};
use reqwest::Client;

/// State for a single crawl run
pub struct Crawler<F, E> {
    seed: Seed,
    fetcher: F,
    extractor: E,
    frontier: UrlSet<String>,
    visited: UrlSet<String>,
}

impl<F: PageFetcher, E: LinkExtractor> Crawler<F, E> {
    /// Validates the seed and sets up empty frontier/visited sets
    pub fn new(seed_url: &str, fetcher: F, extractor: E) -> Result<Self, CrawlError> {
        let seed = Seed::parse(seed_url)?;

        Ok(Crawler {
            seed,
            fetcher,
            extractor,
            frontier: UrlSet::new(),
            visited: UrlSet::new(),
        })
    }

    pub fn domain(&self) -> &str {
        &self.seed.domain
    }

    /// Crawls until no unvisited same-domain pages remain
    ///
    /// Returns every visited URL in canonical form, sorted.
    pub async fn run(mut self) -> Result<Vec<String>, CrawlError> {
        tracing::info!(seed = %self.seed.url, domain = %self.domain(), "starting crawl");

        // The seed is already canonical (Seed::parse ran it through normalize)
        self.frontier.add(self.seed.url.clone());

        // Keep going until every discovered page has been expanded
        while !self.frontier.is_empty() {
            // Take one URL out of the frontier. Which one is unspecified;
            // pick_any cannot fail here because the set is non-empty.
            let url = self.frontier.pick_any()?;
            self.frontier.remove(&url);

            // Already fetched through another path (duplicate or cycle)
            if self.visited.has(&url) {
                continue;
            }

            // Fetch + extract + enqueue. Any error ends the crawl right here:
            // the frontier and visited sets are dropped with `self`, so no
            // partial result escapes.
            if let Err(e) = self.expand(&url).await {
                tracing::warn!(%url, error = %e, "crawl aborted");
                return Err(e);
            }

            // Only mark the page visited once it was fully expanded
            self.visited.add(url);
        }

        tracing::info!(pages = self.visited.len(), "crawl finished");

        // Sorted, so the sitemap comes out the same on every run
        Ok(self.visited.to_ordered_list())
    }

    // Fetches one page and pushes its unseen same-domain links to the frontier
    async fn expand(&mut self, url: &str) -> Result<(), CrawlError> {
        let content = self.fetcher.fetch(url).await?;
        let links: Vec<Link> = self.extractor.extract(&content)?;

        tracing::debug!(url, links = links.len(), "expanding page");

        for link in links {
            if !same_domain(&link.href, &self.seed.domain) {
                tracing::debug!(href = %link.href, text = %link.text, "skipping external link");
                continue;
            }

            let target = normalize(&link.href, &self.seed.domain);

            // A self-link would put `url` back in the frontier right before
            // it is marked visited.
            if target != url && !self.visited.has(&target) {
                self.frontier.add(target);
            }
        }

        Ok(())
    }
}

/// Crawls a site over HTTP and returns its canonical page URLs
///
/// Uses `client` when given (tests, custom timeouts), otherwise builds one
/// with the default settings.
pub async fn crawl(seed_url: &str, client: Option<Client>) -> Result<Vec<String>, CrawlError> {
    let fetcher = match client {
        Some(client) => HttpFetcher::with_client(client),
        None => HttpFetcher::new()?,
    };

    let crawler = Crawler::new(seed_url, fetcher, HtmlLinkExtractor::new()?)?;
    crawler.run().await
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why is the frontier a set and not a queue?
//    - Duplicate links collapse into one entry as soon as they are found
//    - The order pages are visited in is not fixed, only the final result is
//    - The returned list is sorted so output is stable between runs
//
// 2. Why skip visited URLs twice (on insert and on pick)?
//    - A URL may be added to the frontier by page A, then fetched, then
//      linked again by page B before the loop gets to it. The check on pick
//      catches anything the insert-time check could not.
//
// 3. Why `run(mut self)`?
//    - The frontier and visited sets belong to one run
//    - Taking self by value means a finished Crawler cannot be reused
// -----------------------------------------------------------------------------
