//! Portfolio runner: samples every risk and sums the results.
//!
//! Uses one `SmallRng` per run, seeded for reproducibility when a seed is set.

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use darpi_core::config::DarpiConfig;
use darpi_core::constants::ITERATIONS;
use darpi_core::errors::PortfolioError;
use darpi_core::events::{
    EventDispatcher, PortfolioAggregatedEvent, RiskSampledEvent, SimulationEventHandler,
};
use darpi_core::types::{Portfolio, Risk};

use super::aggregate::sum_samples_expecting;
use super::sampler::{occurrence_count, sample_risk_n};
use super::triangular::TriangularDistribution;

/// Monte Carlo simulator for portfolio cost aggregation.
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator {
    /// Samples drawn per risk.
    iterations: usize,
    /// Random seed for reproducibility (None = OS entropy).
    seed: Option<u64>,
    events: EventDispatcher,
}

/// Result of one portfolio run: each risk's sample vector plus their sum.
#[derive(Debug, Clone)]
pub struct PortfolioRun {
    risk_samples: Vec<(String, Vec<f64>)>,
    aggregate: Vec<f64>,
}

impl PortfolioRun {
    /// The elementwise sum across all risks.
    pub fn aggregate(&self) -> &[f64] {
        &self.aggregate
    }

    pub fn into_aggregate(self) -> Vec<f64> {
        self.aggregate
    }

    /// The sample vector recorded for one risk.
    pub fn samples_for(&self, name: &str) -> Option<&[f64]> {
        self.risk_samples
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s.as_slice())
    }

    /// `(name, samples)` pairs in portfolio order.
    pub fn risk_samples(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.risk_samples
            .iter()
            .map(|(n, s)| (n.as_str(), s.as_slice()))
    }

    pub fn risk_count(&self) -> usize {
        self.risk_samples.len()
    }
}

impl MonteCarloSimulator {
    /// Create a new simulator with the given iteration count (at least 1).
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations: iterations.max(1),
            seed: None,
            events: EventDispatcher::new(),
        }
    }

    /// Build a simulator from resolved configuration.
    pub fn from_config(config: &DarpiConfig) -> Self {
        let sim = Self::new(config.simulation.effective_iterations());
        match config.simulation.seed {
            Some(seed) => sim.with_seed(seed),
            None => sim,
        }
    }

    /// Set a deterministic seed for reproducible results.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Register a handler for per-risk and per-run events.
    pub fn with_event_handler(mut self, handler: Arc<dyn SimulationEventHandler>) -> Self {
        self.events.register(handler);
        self
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }

    /// Sample a single risk on its own generator.
    pub fn sample(&self, risk: &Risk) -> Result<Vec<f64>, PortfolioError> {
        let mut rng = self.rng();
        let (samples, event) = self.sample_with(risk, &mut rng)?;
        self.events.emit_risk_sampled(&event);
        Ok(samples)
    }

    fn sample_with(
        &self,
        risk: &Risk,
        rng: &mut SmallRng,
    ) -> Result<(Vec<f64>, RiskSampledEvent), PortfolioError> {
        let distribution = TriangularDistribution::from_costs(&risk.costs)
            .map_err(|e| PortfolioError::for_risk(&risk.name, e))?;
        let samples = sample_risk_n(&distribution, risk.probability, self.iterations, rng)
            .map_err(|e| PortfolioError::for_risk(&risk.name, e))?;

        let occurrences = occurrence_count(self.iterations, risk.probability);
        tracing::debug!(
            risk_name = %risk.name,
            occurrences,
            iterations = self.iterations,
            "sampled risk"
        );
        let event = RiskSampledEvent {
            risk_name: risk.name.clone(),
            occurrences,
            iterations: self.iterations,
            sample_mean: mean(&samples),
        };
        Ok((samples, event))
    }

    /// Sample every risk in portfolio order and sum the vectors.
    ///
    /// Fails on the first risk that cannot be built or sampled; nothing is
    /// aggregated in that case. Risk events are held back until the sum
    /// succeeds, so a failed run emits no events at all.
    pub fn aggregate_portfolio(
        &self,
        portfolio: &Portfolio,
    ) -> Result<PortfolioRun, PortfolioError> {
        if portfolio.is_empty() {
            return Err(PortfolioError::Empty);
        }

        let span = tracing::info_span!(
            "aggregate_portfolio",
            risk_count = portfolio.len(),
            iterations = self.iterations
        );
        let _guard = span.enter();
        let started = Instant::now();

        let mut rng = self.rng();
        let mut risk_samples = Vec::with_capacity(portfolio.len());
        let mut pending = Vec::with_capacity(portfolio.len());
        for risk in portfolio {
            let (samples, event) = self.sample_with(risk, &mut rng)?;
            risk_samples.push((risk.name.clone(), samples));
            pending.push(event);
        }

        let vectors: Vec<&[f64]> = risk_samples.iter().map(|(_, s)| s.as_slice()).collect();
        let aggregate = sum_samples_expecting(&vectors, self.iterations)?;

        let aggregate_mean = mean(&aggregate);
        tracing::info!(
            portfolio_run_time_ms = started.elapsed().as_millis() as u64,
            aggregate_mean,
            "portfolio aggregated"
        );
        for event in &pending {
            self.events.emit_risk_sampled(event);
        }
        self.events.emit_portfolio_aggregated(&PortfolioAggregatedEvent {
            risk_count: risk_samples.len(),
            iterations: self.iterations,
            aggregate_mean,
        });

        Ok(PortfolioRun {
            risk_samples,
            aggregate,
        })
    }
}

impl Default for MonteCarloSimulator {
    fn default() -> Self {
        Self::new(ITERATIONS)
    }
}

/// Aggregate a portfolio with the default simulator (`ITERATIONS` samples,
/// OS-seeded generator), returning only the summed vector.
pub fn aggregate_portfolio(portfolio: &Portfolio) -> Result<Vec<f64>, PortfolioError> {
    MonteCarloSimulator::default()
        .aggregate_portfolio(portfolio)
        .map(PortfolioRun::into_aggregate)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
