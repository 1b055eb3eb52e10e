//! Log output setup for hosts that don't bring their own subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSection;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, falling back to the
/// configured level. Returns `false` if a global subscriber was already set,
/// in which case the existing one stays in place.
pub fn init_logging(logging: &LoggingSection) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
