//! # darpi-analysis
//!
//! Monte Carlo cost-risk engine.
//! - Simulation: triangular distributions, zero-inflated risk sampling,
//!   elementwise aggregation, and the portfolio runner.
//! - Statistics: empirical CDF, PPF (quantile curve), histogram, and
//!   single-percentile lookup.
//! - Report: non-exceedance tables for tabular export.

pub mod report;
pub mod simulation;
pub mod statistics;

pub use report::NonExceedanceTable;
pub use simulation::{
    aggregate_portfolio, build_triangular, sample_risk, sum_samples, MonteCarloSimulator,
    PortfolioRun, TriangularDistribution,
};
pub use statistics::{
    empirical_cdf, empirical_ppf, empirical_ppf_simple, histogram, value_at_percentile,
    CdfData, ConfidenceInterval, CostSummary, HistogramData, PpfData,
};
