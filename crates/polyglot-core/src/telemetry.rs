//! Logging bootstrap for applications and tests that embed the registry.
//!
//! Library code only emits `tracing` events; installing a subscriber is
//! left to whoever owns the process. `init` is a convenience for that owner.
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive (ex: "polyglot_registry=debug")
pub const LOG_ENV: &str = "POLYGLOT_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install a stderr fmt subscriber filtered by `POLYGLOT_LOG`.
///
/// Returns false when a global subscriber was already set.
pub fn init() -> bool {
    install(filter_from_env())
}

/// Filter from `POLYGLOT_LOG`, or "info" when unset or unparsable
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr fmt subscriber with an explicit filter directive.
pub fn init_with(directive: &str) -> bool {
    install(EnvFilter::new(directive))
}

fn install(filter: EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
