//! Diagnostic logging setup.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `GLOSS_LOG=gloss_rank=debug`.
pub const LOG_ENV: &str = "GLOSS_LOG";

/// Filter used when `GLOSS_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber, writing to stderr so stdout stays clean for results.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = installed {
        eprintln!("warning: could not initialize logging: {e}");
    }
}
