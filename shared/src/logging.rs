//! Shared tracing bootstrap for consistent log output across binaries

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber with env-filter control.
///
/// `process` names the emitting binary in every line. RUST_LOG overrides the
/// default `info` level. Safe to call once per process; later calls are
/// ignored rather than panicking so tests can share it.
pub fn init_tracing(process: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();

    if result.is_ok() {
        tracing::info!(process, "tracing initialized");
    }
}
