//! Elementwise summation of per-risk sample vectors.

use darpi_core::constants::ITERATIONS;
use darpi_core::errors::SimulationError;

/// Sum sample vectors elementwise, expecting the default `ITERATIONS` length.
pub fn sum_samples<S: AsRef<[f64]>>(sample_sets: &[S]) -> Result<Vec<f64>, SimulationError> {
    sum_samples_expecting(sample_sets, ITERATIONS)
}

/// Sum sample vectors elementwise.
///
/// All vectors must share one length; the first one that differs from the
/// first vector is reported by index. Vectors that agree with each other but
/// not with `expected_len` only produce a warning, since a short run may be
/// intentional.
pub fn sum_samples_expecting<S: AsRef<[f64]>>(
    sample_sets: &[S],
    expected_len: usize,
) -> Result<Vec<f64>, SimulationError> {
    let (first, rest) = sample_sets
        .split_first()
        .ok_or(SimulationError::EmptyInput { what: "a sum of sample vectors" })?;
    let first = first.as_ref();

    if sample_sets.iter().any(|s| s.as_ref().len() != expected_len) {
        tracing::warn!(
            expected = expected_len,
            "sample vectors differ from the configured iteration count"
        );
    }

    if let Some((index, offending)) = sample_sets
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, s)| s.as_ref().len() != first.len())
    {
        return Err(SimulationError::LengthMismatch {
            index,
            expected: first.len(),
            actual: offending.as_ref().len(),
        });
    }

    let mut total = first.to_vec();
    for samples in rest {
        for (acc, x) in total.iter_mut().zip(samples.as_ref()) {
            *acc += x;
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_elementwise() {
        let sets = [vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert_eq!(sum_samples(&sets).unwrap(), vec![5.0, 7.0, 9.0]);
    }

    #[test]
    fn single_vector_is_returned_as_is() {
        let sets = [vec![1.5, 2.5]];
        assert_eq!(sum_samples_expecting(&sets, 2).unwrap(), vec![1.5, 2.5]);
    }

    #[test]
    fn mismatch_reports_first_offending_index() {
        let sets = [vec![0.0; 3], vec![0.0; 3], vec![0.0; 4]];
        let err = sum_samples(&sets).unwrap_err();
        assert_eq!(
            err,
            SimulationError::LengthMismatch {
                index: 2,
                expected: 3,
                actual: 4
            }
        );
    }

    #[test]
    fn empty_set_is_rejected() {
        let sets: [Vec<f64>; 0] = [];
        assert!(matches!(
            sum_samples(&sets),
            Err(SimulationError::EmptyInput { .. })
        ));
    }

    #[test]
    fn accepts_borrowed_slices() {
        let a = [1.0, 1.0];
        let b = [2.0, 3.0];
        let sets: [&[f64]; 2] = [&a, &b];
        assert_eq!(sum_samples_expecting(&sets, 2).unwrap(), vec![3.0, 4.0]);
    }
}
