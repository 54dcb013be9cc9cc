//! Empirical percent-point function (quantile curve) on a fixed 101-point grid.
//!
//! Two forms:
//! - `empirical_ppf`: production form. The largest sample is pinned to the
//!   0.999 quantile, and the last zero-cost grid point is replaced by the
//!   smallest non-zero sample, marking where "never occurs" ends.
//! - `empirical_ppf_simple`: permissive form used for non-exceedance tables.
//!   Plain `(i + 1) / n` plotting positions, no post-processing.

use darpi_core::constants::{PPF_POINTS, PPF_TOP_PROBABILITY, P_VALUE_DECIMALS};
use darpi_core::errors::SimulationError;

use super::types::PpfData;
use super::{sorted, validate_samples};

/// Percentiles `k / 100` for `k = 0..=100`.
pub fn percentile_grid() -> Vec<f64> {
    let last = (PPF_POINTS - 1) as f64;
    (0..PPF_POINTS).map(|k| k as f64 / last).collect()
}

/// Production PPF with the top empirical probability clamped to 0.999.
pub fn empirical_ppf(data: &[f64]) -> Result<PpfData, SimulationError> {
    empirical_ppf_with_top(data, PPF_TOP_PROBABILITY)
}

/// Production PPF with a configurable top empirical probability.
pub fn empirical_ppf_with_top(
    data: &[f64],
    top_probability: f64,
) -> Result<PpfData, SimulationError> {
    validate_samples(data, "an empirical PPF")?;
    if !top_probability.is_finite() {
        return Err(SimulationError::not_finite("top_probability", top_probability));
    }
    if !(top_probability > 0.0 && top_probability <= 1.0) {
        return Err(SimulationError::out_of_range(
            "top_probability",
            top_probability,
            0.0,
            1.0,
        ));
    }

    let sorted_data = sorted(data);
    let n = sorted_data.len();
    let step = 1.0 / n as f64;
    let mut cumulative: Vec<f64> = (0..n).map(|i| i as f64 * step + step).collect();
    cumulative[n - 1] = top_probability;

    let p = percentile_grid();
    let mut cost: Vec<f64> = p
        .iter()
        .map(|&x| interp(x, &cumulative, &sorted_data))
        .collect();

    mark_lower_bound(&mut cost, data);

    Ok(PpfData { cost, p })
}

/// Permissive PPF: `(i + 1) / n` plotting positions, no clamping and no
/// lower-bound marker.
pub fn empirical_ppf_simple(data: &[f64]) -> Result<PpfData, SimulationError> {
    if data.is_empty() {
        return Err(SimulationError::EmptyInput {
            what: "an empirical PPF",
        });
    }
    let sorted_data = sorted(data);
    let n = sorted_data.len() as f64;
    let cumulative: Vec<f64> = (1..=sorted_data.len()).map(|i| i as f64 / n).collect();

    let p = percentile_grid();
    let cost = p
        .iter()
        .map(|&x| interp(x, &cumulative, &sorted_data))
        .collect();
    Ok(PpfData { cost, p })
}

/// Cost at grid percentile `p`, rounded to two decimals.
///
/// `p` must be exactly one of `0.00, 0.01, ..., 1.00`; this is a lookup on
/// the PPF grid, not an interpolation query.
pub fn value_at_percentile(data: &[f64], p: f64) -> Result<f64, SimulationError> {
    if !p.is_finite() {
        return Err(SimulationError::not_finite("p", p));
    }
    let index = percentile_grid()
        .iter()
        .position(|&q| q == p)
        .ok_or(SimulationError::PercentileNotFound { p })?;

    let ppf = empirical_ppf(data)?;
    Ok(round_to(ppf.cost[index], P_VALUE_DECIMALS))
}

/// Replace the cost at the last zero-valued grid point with the smallest
/// non-zero sample. No-op when the curve has no zeros or the data has no
/// non-zero values.
fn mark_lower_bound(cost: &mut [f64], data: &[f64]) {
    let zero_count = cost.iter().filter(|&&c| c == 0.0).count();
    if zero_count == 0 {
        return;
    }
    let min_non_zero = data
        .iter()
        .copied()
        .filter(|&x| x != 0.0)
        .min_by(|a, b| a.total_cmp(b));
    match min_non_zero {
        Some(min) => cost[zero_count - 1] = min,
        None => tracing::debug!("all samples are zero; PPF lower bound left at zero"),
    }
}

/// One-dimensional linear interpolation of `x` against `(xp, fp)`, clamped
/// to the end values outside `[xp[0], xp[last]]`.
///
/// `xp` is ascending except possibly for its last element, which may sit
/// below its neighbour once the top probability is clamped.
fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let last = xp.len() - 1;
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }
    let hi = xp.partition_point(|&q| q <= x);
    let lo = hi - 1;
    let slope = (fp[hi] - fp[lo]) / (xp[hi] - xp[lo]);
    fp[lo] + slope * (x - xp[lo])
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
