//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::ITERATIONS;

/// Configuration for Monte Carlo sampling.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Samples drawn per risk. Default: 100,000.
    pub iterations: Option<usize>,
    /// RNG seed. Unset means a fresh OS-seeded generator per run.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Returns the effective sample count, defaulting to `ITERATIONS`.
    pub fn effective_iterations(&self) -> usize {
        self.iterations.unwrap_or(ITERATIONS)
    }
}
