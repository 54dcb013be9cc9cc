//! Empirical statistics over a sample or aggregate vector: CDF, PPF
//! (quantile curve), histogram, and single-percentile lookup.

pub mod cdf;
pub mod histogram;
pub mod ppf;
pub mod summary;
pub mod types;

pub use cdf::empirical_cdf;
pub use histogram::{histogram, histogram_with_bins};
pub use ppf::{
    empirical_ppf, empirical_ppf_simple, empirical_ppf_with_top, percentile_grid,
    value_at_percentile,
};
pub use summary::CostSummary;
pub use types::{CdfData, ConfidenceInterval, HistogramData, PpfData};

use darpi_core::errors::SimulationError;

/// Reject empty input and non-finite entries.
pub(crate) fn validate_samples(data: &[f64], what: &'static str) -> Result<(), SimulationError> {
    if data.is_empty() {
        return Err(SimulationError::EmptyInput { what });
    }
    if let Some((i, &x)) = data.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        return Err(SimulationError::not_finite(format!("data[{i}]"), x));
    }
    Ok(())
}

/// Ascending copy of `data`.
pub(crate) fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}
