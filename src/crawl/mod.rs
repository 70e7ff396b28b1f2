// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Traversal starting from a seed URL until no new pages are found
// - Same-domain restriction (external links are discarded)
// - URL canonicalization so each page is visited exactly once
// - Cycle safety through the visited set
// =============================================================================

mod engine;
mod normalize;
mod store;

pub use engine::crawl;
