//! Diagnostic logging for the CLI.
//!
//! Everything goes to stderr so the greeting on stdout stays pipeable.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "GREGGSAY_LOG";

static INIT: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber. Only the first call has any effect.
pub fn set_verbose(verbose: bool) {
    INIT.get_or_init(|| {
        let fallback = if verbose { "greggsay=debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init();
    });
}

pub fn info(message: impl AsRef<str>) {
    tracing::info!("{}", message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    tracing::warn!("{}", message.as_ref());
}
