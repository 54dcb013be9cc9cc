//! Empirical statistics configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{HISTOGRAM_BINS, PPF_TOP_PROBABILITY};

/// Configuration for histogram and PPF derivation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Equal-width histogram bins. Default: 40.
    pub histogram_bins: Option<usize>,
    /// Probability assigned to the sample maximum by the production PPF. Default: 0.999.
    pub top_probability: Option<f64>,
}

impl StatisticsConfig {
    /// Returns the effective bin count, defaulting to 40.
    pub fn effective_histogram_bins(&self) -> usize {
        self.histogram_bins.unwrap_or(HISTOGRAM_BINS)
    }

    /// Returns the effective top probability, defaulting to 0.999.
    pub fn effective_top_probability(&self) -> f64 {
        self.top_probability.unwrap_or(PPF_TOP_PROBABILITY)
    }
}
