// src/fetch/http.rs
// =============================================================================
// This module retrieves raw page content over HTTP.
//
// Key functionality:
// - A PageFetcher trait so the crawler can run against fake sites in tests
// - HttpFetcher, the real implementation backed by a reqwest Client
// - Any network failure or non-2xx status becomes a Transport error
//
// Rust concepts:
// - Traits: the seam between the crawl loop and the network
// - async/await: a fetch suspends until the response arrives
// =============================================================================

use crate::error::CrawlError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Something that can fetch the body of a page given its URL
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CrawlError>;
}

/// Fetches pages with reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an existing client (e.g. one configured by the caller or a test)
    pub fn with_client(client: Client) -> Self {
        HttpFetcher { client }
    }

    /// Builds a client with the default timeout and user agent
    pub fn new() -> Result<Self, CrawlError> {
        let client = build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS), default_user_agent())?;
        Ok(Self::with_client(client))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CrawlError> {
        let transport = |reason: String| CrawlError::Transport {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport(describe_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport(describe_error(&e)))?;

        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "fetched page");
        Ok(body.to_vec())
    }
}

/// Builds the reqwest client used for crawling
pub fn build_client(timeout: Duration, user_agent: String) -> Result<Client, CrawlError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(|e| CrawlError::Transport {
            url: String::new(),
            reason: format!("could not build HTTP client: {}", e),
        })
}

pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

// Gives reqwest errors a short, readable reason
fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    }
}
