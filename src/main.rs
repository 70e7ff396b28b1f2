// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Crawl the site starting at the seed URL
// 4. Render the visited pages as a sitemap (or JSON) and write it out
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;      // src/cli.rs - command-line parsing
mod crawl;    // src/crawl/ - traversal, URL normalization, frontier/visited sets
mod error;    // src/error.rs - CrawlError
mod fetch;    // src/fetch/ - HTTP fetching and link extraction
mod logging;  // src/logging.rs - tracing setup
mod sitemap;  // src/sitemap.rs - XML / JSON output

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::time::Duration;

// The #[tokio::main] attribute turns our async main into a real main function
// by creating a tokio runtime and running the future on it
#[tokio::main]
async fn main() {
    // Run the application and turn its outcome into a process exit code
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(())  = sitemap written
//   Err     = invalid seed, failed fetch/parse, or output error
async fn run() -> Result<()> {
    // Parse command-line arguments into our Cli struct
    // (clap handles --help and --version for us)
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout only ever carries the document
    logging::init(cli.verbose);

    eprintln!("🔍 Crawling: {}", cli.url);

    // One client for the whole crawl, so connections are reused
    let user_agent = cli
        .user_agent
        .clone()
        .unwrap_or_else(fetch::default_user_agent);
    let client = fetch::build_client(Duration::from_secs(cli.timeout), user_agent)?;

    // Walk the site. The first failed page aborts everything.
    let urls = crawl::crawl(&cli.url, Some(client))
        .await
        .with_context(|| format!("crawl of {} failed", cli.url))?;

    eprintln!("📄 Found {} page(s)", urls.len());

    // Render as XML sitemap (default) or JSON report (--json)
    let document = if cli.json {
        sitemap::to_json(&cli.url, &urls)?
    } else {
        sitemap::serialize(&urls)?
    };

    // Write to the file given with --output, or to stdout
    match &cli.output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("could not write {}", path.display()))?;
            eprintln!("✅ Sitemap written to {}", path.display());
        }
        None => println!("{}", document),
    }

    Ok(())
}
