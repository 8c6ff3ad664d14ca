//! Diagnostic logging to stderr

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `INVENTORY_LOG=debug`
pub const LOG_ENV: &str = "INVENTORY_LOG";

/// Install the global subscriber. `-v` and `-q` win over the environment.
pub fn init(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // try_init fails when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
