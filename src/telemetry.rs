//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize the process logger. Honors `RUST_LOG`, defaulting to `info`.
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
