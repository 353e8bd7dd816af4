//! Diagnostic logging setup.
//!
//! Logs go to stderr so a subcommand's stdout stays clean for piping.
//! `MCMOD_LOG` takes an env-filter directive; without it the level is
//! `warn`, or `debug` when the verbose alias was used.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "MCMOD_LOG";

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_env_filter(filter(verbose))
        .try_init();
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}
