//! Data structures handed to the plotting and tabular-export collaborators.

use serde::{Deserialize, Serialize};

/// Empirical CDF: sorted costs and their cumulative probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdfData {
    pub cost: Vec<f64>,
    pub p: Vec<f64>,
}

/// Empirical PPF: cost at each point of the 101-point percentile grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfData {
    pub cost: Vec<f64>,
    pub p: Vec<f64>,
}

impl PpfData {
    /// `(cost, p)` pairs in grid order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cost.iter().copied().zip(self.p.iter().copied())
    }
}

/// Histogram of the non-zero samples. `bin_edges` has one more entry than
/// `frequency`; frequencies are normalized by the full sample count, zeros
/// included, so they sum to at most 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramData {
    pub bin_edges: Vec<f64>,
    pub frequency: Vec<f64>,
}

impl HistogramData {
    pub fn bin_count(&self) -> usize {
        self.frequency.len()
    }

    /// Share of all samples that fell in some bin (the non-zero share).
    pub fn total_frequency(&self) -> f64 {
        self.frequency.iter().sum()
    }
}

/// P10/P50/P90 cost interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// 10th percentile (optimistic).
    pub p10: f64,
    /// 50th percentile (median).
    pub p50: f64,
    /// 90th percentile (pessimistic).
    pub p90: f64,
}

impl ConfidenceInterval {
    /// Validate the ordering invariant: p10 <= p50 <= p90.
    pub fn is_valid(&self) -> bool {
        self.p10 <= self.p50 && self.p50 <= self.p90
    }
}
