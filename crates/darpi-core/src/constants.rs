//! Shared constants for the darpi cost-risk engine.

/// darpi version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of Monte Carlo samples drawn per risk.
pub const ITERATIONS: usize = 100_000;

// ---- Empirical statistics ----

/// Number of points on the PPF percentile grid (0.00, 0.01, ..., 1.00).
pub const PPF_POINTS: usize = 101;

/// Probability assigned to the largest sample by the production PPF.
/// Monte Carlo tails are unreliable at the extreme, so the maximum is
/// treated as the 99.9th percentile rather than the 100th.
pub const PPF_TOP_PROBABILITY: f64 = 0.999;

/// Number of equal-width histogram bins.
pub const HISTOGRAM_BINS: usize = 40;

/// Decimal places kept by single-percentile lookups.
pub const P_VALUE_DECIMALS: i32 = 2;

// ---- Configuration ----

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "darpi.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "DARPI_LOG";

/// Fallback log filter when `DARPI_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "darpi=info";
