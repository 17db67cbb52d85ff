//! Logging utilities

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system.
///
/// Honours `RUST_LOG`; falls back to `info` when it is unset.
pub fn init() {
    init_with_default("info");
}

/// Initialize logging with a custom default filter
pub fn init_with_default(filter: &str) {
    let env = env_logger::Env::default().default_filter_or(filter);
    // A second init (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
