// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// The whole CLI: one positional URL plus a few flags
#[derive(Parser, Debug)]
#[command(
    name = "sitemap-builder",
    version,
    about = "Crawl a website from a seed URL and print its sitemap",
    long_about = "sitemap-builder follows every same-domain link reachable from the seed URL \
                  and writes the pages it found as a sitemap.xml document."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com)
    pub url: String,

    /// Write the sitemap to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output the list of URLs as JSON instead of XML
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = crate::fetch::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// User-Agent header sent with every request
    ///
    /// Defaults to sitemap-builder/<version>
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Log each fetched page and skipped link to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
