//! One-line `tracing` setup shared by every binary in the workspace.

use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber honoring `RUST_LOG`, defaulting to `warn`
/// so a conforming run stays quiet unless asked for detail.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
