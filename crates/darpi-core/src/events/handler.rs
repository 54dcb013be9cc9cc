//! SimulationEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing simulation progress.
///
/// Handlers only override the events they care about. The trait requires
/// `Send + Sync` so a handler can be shared behind an `Arc`.
pub trait SimulationEventHandler: Send + Sync {
    /// Within a portfolio run, delivered only after the run has aggregated.
    fn on_risk_sampled(&self, _event: &RiskSampledEvent) {}
    fn on_portfolio_aggregated(&self, _event: &PortfolioAggregatedEvent) {}
}
