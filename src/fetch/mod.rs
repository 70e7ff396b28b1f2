// src/fetch/mod.rs
// =============================================================================
// The crawler's two collaborators.
//
// Submodules:
// - http: fetches raw page bytes (PageFetcher / HttpFetcher)
// - html: pulls hyperlinks out of page content (LinkExtractor / HtmlLinkExtractor)
//
// Both sit behind traits so the crawl loop can be driven by fakes in tests.
// =============================================================================

mod html;
mod http;

pub use html::{HtmlLinkExtractor, Link, LinkExtractor};
pub use http::{build_client, default_user_agent, HttpFetcher, PageFetcher, DEFAULT_TIMEOUT_SECS};
