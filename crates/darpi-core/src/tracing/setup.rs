//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR, VERSION};

static INIT: Once = Once::new();

/// Initialize the darpi tracing/logging system.
///
/// Reads the `DARPI_LOG` environment variable for per-subsystem log levels.
/// Format: `DARPI_LOG=darpi_analysis::simulation=debug,darpi_core=warn`
///
/// Falls back to `darpi=info` if `DARPI_LOG` is not set or is invalid.
/// Safe to call more than once; only the first call installs a subscriber,
/// and an already-installed global subscriber is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();

        tracing::debug!(version = VERSION, "darpi tracing initialized");
    });
}
