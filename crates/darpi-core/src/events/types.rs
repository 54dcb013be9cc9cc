//! Event payloads emitted during a portfolio run.

/// A single risk has been sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskSampledEvent {
    pub risk_name: String,
    pub occurrences: usize,
    pub iterations: usize,
    /// Mean of the zero-inflated sample vector.
    pub sample_mean: f64,
}

/// All risks have been sampled and summed.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioAggregatedEvent {
    pub risk_count: usize,
    pub iterations: usize,
    pub aggregate_mean: f64,
}
