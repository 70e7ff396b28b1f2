// src/logging.rs
// Diagnostic logging to stderr via tracing.
//
// RUST_LOG wins when set (e.g. RUST_LOG=sitemap_builder=debug,reqwest=warn).
// Otherwise --verbose means "debug" and the default is "warn".

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // try_init so a second call (tests) is a no-op instead of a panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
