//! Log output for the driver.
//!
//! Events from `tracing` and records from the `log` facade used by the
//! libraries end up in the same formatted stream on stderr.

use std::io;

use tracing::subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber and the `log` bridge.
pub fn init() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .finish();
    subscriber::set_global_default(subscriber)?;
    LogTracer::init()?;

    Ok(())
}
