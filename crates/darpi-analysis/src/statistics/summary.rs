//! All empirical views of one cost vector, derived together.

use serde::{Deserialize, Serialize};

use darpi_core::config::StatisticsConfig;
use darpi_core::errors::SimulationError;

use super::cdf::empirical_cdf;
use super::histogram::histogram_with_bins;
use super::ppf::empirical_ppf_with_top;
use super::types::{CdfData, ConfidenceInterval, HistogramData, PpfData};

/// CDF, PPF, histogram, and headline numbers for a sample or aggregate vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    pub cdf: CdfData,
    pub ppf: PpfData,
    pub histogram: HistogramData,
    /// P10/P50/P90 read off the production PPF grid.
    pub interval: ConfidenceInterval,
    pub mean: f64,
    pub sample_count: usize,
}

impl CostSummary {
    /// Derive every view using default statistics settings.
    pub fn from_samples(data: &[f64]) -> Result<Self, SimulationError> {
        Self::with_config(data, &StatisticsConfig::default())
    }

    /// Derive every view using the given statistics settings.
    pub fn with_config(data: &[f64], config: &StatisticsConfig) -> Result<Self, SimulationError> {
        let cdf = empirical_cdf(data)?;
        let ppf = empirical_ppf_with_top(data, config.effective_top_probability())?;
        let histogram = histogram_with_bins(data, config.effective_histogram_bins())?;

        let interval = ConfidenceInterval {
            p10: ppf.cost[10],
            p50: ppf.cost[50],
            p90: ppf.cost[90],
        };
        let mean = data.iter().sum::<f64>() / data.len() as f64;

        Ok(Self {
            cdf,
            ppf,
            histogram,
            interval,
            mean,
            sample_count: data.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_ramp_has_ordered_interval() {
        let data: Vec<f64> = (1..=10_000).map(f64::from).collect();
        let summary = CostSummary::from_samples(&data).unwrap();
        assert!(summary.interval.is_valid());
        assert!((summary.interval.p50 - 5000.0).abs() < 1.0);
        assert!((summary.mean - 5000.5).abs() < 1e-9);
        assert_eq!(summary.sample_count, 10_000);
        assert_eq!(summary.cdf.cost.len(), 10_000);
        assert_eq!(summary.histogram.bin_count(), 40);
    }

    #[test]
    fn config_controls_bin_count() {
        let config = StatisticsConfig {
            histogram_bins: Some(10),
            top_probability: None,
        };
        let summary = CostSummary::with_config(&[1.0, 2.0, 3.0], &config).unwrap();
        assert_eq!(summary.histogram.bin_edges.len(), 11);
    }

    #[test]
    fn empty_data_is_rejected() {
        assert!(CostSummary::from_samples(&[]).is_err());
    }
}
