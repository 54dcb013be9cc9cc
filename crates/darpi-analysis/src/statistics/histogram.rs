//! Fixed-bin histogram over the non-zero samples.
//!
//! Zero entries (iterations where nothing happened) are left out of the
//! bins, but counts are divided by the full sample count so the bars show
//! each cost band's share of all iterations.

use darpi_core::constants::HISTOGRAM_BINS;
use darpi_core::errors::SimulationError;

use super::types::HistogramData;
use super::validate_samples;

/// 40-bin histogram of the non-zero samples.
pub fn histogram(data: &[f64]) -> Result<HistogramData, SimulationError> {
    histogram_with_bins(data, HISTOGRAM_BINS)
}

/// Equal-width histogram of the non-zero samples with `bins` bins.
///
/// Bins span the non-zero range; every bin is half-open except the last,
/// which includes the maximum. A single distinct value gets a unit-wide
/// range centred on it, and all-zero data gets the range `[0, 1]`.
pub fn histogram_with_bins(data: &[f64], bins: usize) -> Result<HistogramData, SimulationError> {
    validate_samples(data, "a histogram")?;
    if bins == 0 {
        return Err(SimulationError::out_of_range("bins", 0.0, 1.0, f64::INFINITY));
    }

    let non_zero: Vec<f64> = data.iter().copied().filter(|&x| x != 0.0).collect();
    let (lo, hi) = bin_range(&non_zero);
    let bin_edges = edges(lo, hi, bins);

    let mut counts = vec![0usize; bins];
    let norm = bins as f64 / (hi - lo);
    for &x in &non_zero {
        counts[bin_index(x, lo, norm, &bin_edges)] += 1;
    }

    let total = data.len() as f64;
    let frequency = counts.into_iter().map(|c| c as f64 / total).collect();
    Ok(HistogramData {
        bin_edges,
        frequency,
    })
}

fn bin_range(values: &[f64]) -> (f64, f64) {
    let Some(first) = values.first() else {
        return (0.0, 1.0);
    };
    let (lo, hi) = values
        .iter()
        .fold((*first, *first), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

fn edges(lo: f64, hi: f64, bins: usize) -> Vec<f64> {
    let step = (hi - lo) / bins as f64;
    let mut edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * step).collect();
    edges[bins] = hi;
    edges
}

/// Bin for `x`, computed arithmetically and then corrected against the
/// stored edges so floating-point error never puts a value on the wrong
/// side of an edge.
fn bin_index(x: f64, lo: f64, norm: f64, edges: &[f64]) -> usize {
    let bins = edges.len() - 1;
    let mut index = (((x - lo) * norm) as usize).min(bins - 1);
    if x < edges[index] && index > 0 {
        index -= 1;
    } else if x >= edges[index + 1] && index != bins - 1 {
        index += 1;
    }
    index
}
