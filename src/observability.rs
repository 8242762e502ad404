//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout stays the operator-facing channel.
/// `RUST_LOG` overrides the default `rfidconv=warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rfidconv=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
