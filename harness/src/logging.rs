//! Diagnostic tracing for the CLI.
//!
//! Reads `RUST_LOG`; defaults to `warn`. Output goes to stderr so stdout
//! stays clean for reports.
//!
//! ```bash
//! RUST_LOG=vacuum_search=debug vacuum run --algo ids --seed 7
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Call once, at startup.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
