//! Zero-inflated risk sampling.
//!
//! A risk with occurrence probability `p` contributes `floor(n * p)` draws
//! from its distribution; every other entry is exactly zero (the risk did
//! not happen in that iteration). The vector is then shuffled so the zeros
//! are not clustered.

use rand::seq::SliceRandom;
use rand::Rng;

use darpi_core::constants::ITERATIONS;
use darpi_core::errors::SimulationError;

use super::triangular::TriangularDistribution;

/// Sample a risk with the default `ITERATIONS` sample count.
pub fn sample_risk<R: Rng + ?Sized>(
    distribution: &TriangularDistribution,
    occurrence_probability: f64,
    rng: &mut R,
) -> Result<Vec<f64>, SimulationError> {
    sample_risk_n(distribution, occurrence_probability, ITERATIONS, rng)
}

/// Sample a risk into a vector of `iterations` entries.
pub fn sample_risk_n<R: Rng + ?Sized>(
    distribution: &TriangularDistribution,
    occurrence_probability: f64,
    iterations: usize,
    rng: &mut R,
) -> Result<Vec<f64>, SimulationError> {
    if !occurrence_probability.is_finite() {
        return Err(SimulationError::not_finite(
            "occurrence_probability",
            occurrence_probability,
        ));
    }
    if !(0.0..=1.0).contains(&occurrence_probability) {
        return Err(SimulationError::out_of_range(
            "occurrence_probability",
            occurrence_probability,
            0.0,
            1.0,
        ));
    }

    let occurrences = occurrence_count(iterations, occurrence_probability);
    let mut samples = vec![0.0; iterations];
    samples[..occurrences].copy_from_slice(&distribution.sample(occurrences, rng));
    samples.shuffle(rng);
    Ok(samples)
}

/// Number of iterations in which the risk occurs: `floor(iterations * p)`.
pub fn occurrence_count(iterations: usize, occurrence_probability: f64) -> usize {
    ((iterations as f64 * occurrence_probability).floor() as usize).min(iterations)
}
