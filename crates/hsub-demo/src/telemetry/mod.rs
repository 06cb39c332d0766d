//! Telemetry initialisation for the demo binary.
//!
//! Plain-text logs to stdout; the demo is an interactive self-test, not a
//! service, so there is no structured/JSON output or export pipeline.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber for the demo.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise hsub-demo tracing subscriber: {e}"))
}
