//! Triangular distribution built from a (minimum, most-likely, maximum) cost triple.
//!
//! Wraps `statrs`' triangular distribution and samples by inverse CDF.
//! A zero-width triple (`minimum == maximum`) is a point mass.

use rand::Rng;
use statrs::distribution::{ContinuousCDF, Triangular};

use darpi_core::errors::SimulationError;
use darpi_core::types::CostTriple;

/// Triangular distribution over `[minimum, maximum]` with mode `most_likely`.
#[derive(Debug, Clone)]
pub struct TriangularDistribution {
    minimum: f64,
    most_likely: f64,
    maximum: f64,
    /// `None` for a point mass.
    inner: Option<Triangular>,
}

/// Build a triangular distribution, validating that every bound is a finite
/// number and that `minimum <= most_likely <= maximum`.
pub fn build_triangular(
    minimum: f64,
    most_likely: f64,
    maximum: f64,
) -> Result<TriangularDistribution, SimulationError> {
    for (parameter, value) in [
        ("minimum", minimum),
        ("most_likely", most_likely),
        ("maximum", maximum),
    ] {
        if !value.is_finite() {
            return Err(SimulationError::not_finite(parameter, value));
        }
    }
    if !(minimum <= most_likely && most_likely <= maximum) {
        return Err(SimulationError::out_of_range(
            "most_likely",
            most_likely,
            minimum,
            maximum,
        ));
    }

    let inner = if minimum < maximum {
        let dist = Triangular::new(minimum, maximum, most_likely).map_err(|_| {
            SimulationError::out_of_range("most_likely", most_likely, minimum, maximum)
        })?;
        Some(dist)
    } else {
        None
    };

    Ok(TriangularDistribution {
        minimum,
        most_likely,
        maximum,
        inner,
    })
}

impl TriangularDistribution {
    /// Build from a risk's cost triple.
    pub fn from_costs(costs: &CostTriple) -> Result<Self, SimulationError> {
        build_triangular(costs.minimum, costs.most_likely, costs.maximum)
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn most_likely(&self) -> f64 {
        self.most_likely
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Location parameter: the lower bound of the support.
    pub fn location(&self) -> f64 {
        self.minimum
    }

    /// Scale parameter: the width of the support.
    pub fn scale(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// Shape parameter `c = (most_likely - minimum) / (maximum - minimum)`.
    /// 0.0 for a point mass.
    pub fn shape(&self) -> f64 {
        let scale = self.scale();
        if scale > 0.0 {
            (self.most_likely - self.minimum) / scale
        } else {
            0.0
        }
    }

    /// Support as `(minimum, maximum)`.
    pub fn support(&self) -> (f64, f64) {
        (self.minimum, self.maximum)
    }

    pub fn mean(&self) -> f64 {
        (self.minimum + self.most_likely + self.maximum) / 3.0
    }

    pub fn is_point_mass(&self) -> bool {
        self.inner.is_none()
    }

    pub fn cdf(&self, x: f64) -> f64 {
        match &self.inner {
            Some(dist) => dist.cdf(x),
            None if x < self.minimum => 0.0,
            None => 1.0,
        }
    }

    /// Cost at cumulative probability `u`.
    ///
    /// `u` is clamped to [0, 1]; NaN maps to the minimum.
    pub fn inverse_cdf(&self, u: f64) -> f64 {
        let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };
        match &self.inner {
            Some(dist) => dist.inverse_cdf(u).clamp(self.minimum, self.maximum),
            None => self.minimum,
        }
    }

    /// Draw `n` independent samples.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        (0..n).map(|_| self.inverse_cdf(rng.random::<f64>())).collect()
    }
}
