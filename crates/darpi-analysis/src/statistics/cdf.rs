//! Empirical cumulative distribution function.

use darpi_core::errors::SimulationError;

use super::types::CdfData;
use super::{sorted, validate_samples};

/// Sort `data` ascending and pair each value with `(i + 1) / n`.
pub fn empirical_cdf(data: &[f64]) -> Result<CdfData, SimulationError> {
    validate_samples(data, "an empirical CDF")?;
    let n = data.len() as f64;
    let p = (1..=data.len()).map(|i| i as f64 / n).collect();
    Ok(CdfData {
        cost: sorted(data),
        p,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_points() {
        let cdf = empirical_cdf(&[3.0, 1.0, 4.0, 2.0]).unwrap();
        assert_eq!(cdf.cost, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(cdf.p, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn ties_keep_strictly_increasing_probabilities() {
        let cdf = empirical_cdf(&[0.0, 0.0, 5.0]).unwrap();
        assert_eq!(cdf.cost, vec![0.0, 0.0, 5.0]);
        assert!(cdf.p.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*cdf.p.last().unwrap(), 1.0);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            empirical_cdf(&[]),
            Err(SimulationError::EmptyInput { .. })
        ));
    }
}
