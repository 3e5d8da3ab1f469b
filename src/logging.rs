// 📝 Logging Setup
// Diagnostics go to stderr so stdout carries only the demo transcript.

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the filter: RUST_LOG wins, then --quiet, then the -v count
pub fn filter_for(verbose: u8, quiet: bool) -> EnvFilter {
    resolve_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok(), verbose, quiet)
}

/// Same precedence as [`filter_for`], with the environment value passed in
fn resolve_filter(env: Option<String>, verbose: u8, quiet: bool) -> EnvFilter {
    let env = env.filter(|directives| !directives.trim().is_empty());
    if let Some(filter) = env.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return filter;
    }

    if quiet {
        return EnvFilter::new("error");
    }

    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber; call once per process
pub fn setup_logging(verbose: u8, quiet: bool) -> Result<()> {
    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter_for(verbose, quiet))
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
