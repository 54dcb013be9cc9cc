//! Empirical statistics over simulated cost vectors.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use darpi_analysis::report::NonExceedanceTable;
use darpi_analysis::simulation::{build_triangular, sample_risk_n};
use darpi_analysis::statistics::*;
use darpi_core::errors::SimulationError;

fn uniform(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random::<f64>()).collect()
}

#[test]
fn cdf_of_four_points() {
    let cdf = empirical_cdf(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(cdf.cost, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(cdf.p, vec![0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn ppf_has_101_points_stepping_by_hundredths() {
    let ppf = empirical_ppf(&uniform(100_000, 1)).unwrap();
    assert_eq!(ppf.cost.len(), 101);
    assert_eq!(ppf.p.len(), 101);
    for (k, &p) in ppf.p.iter().enumerate() {
        assert!((p - k as f64 * 0.01).abs() < 1e-12);
    }
    assert_eq!(ppf.p[0], 0.0);
    assert_eq!(ppf.p[100], 1.0);
}

#[test]
fn histogram_of_uniform_data() {
    let hist = histogram(&uniform(100_000, 2)).unwrap();
    assert_eq!(hist.bin_edges.len(), 41);
    assert_eq!(hist.frequency.len(), 40);
    assert!(hist.total_frequency() <= 1.0 + 1e-12);
    // Roughly 1/40 per bin.
    assert!(hist.frequency.iter().all(|&f| (f - 0.025).abs() < 0.005));
}

#[test]
fn histogram_of_zero_inflated_risk_sums_to_probability() {
    let dist = build_triangular(1000.0, 2000.0, 5000.0).unwrap();
    let mut rng = SmallRng::seed_from_u64(11);
    let samples = sample_risk_n(&dist, 0.3, 10_000, &mut rng).unwrap();
    let hist = histogram(&samples).unwrap();
    assert!((hist.total_frequency() - 0.3).abs() < 1e-9);
    assert!(hist.bin_edges[0] >= 1000.0);
    assert!(hist.bin_edges[40] <= 5000.0);
}

#[test]
fn median_lookup_tracks_the_sample_median() {
    let data = uniform(100_000, 3);
    let median = value_at_percentile(&data, 0.5).unwrap();
    assert!((median - 0.5).abs() <= 0.011, "median {median}");
}

#[test]
fn non_grid_percentile_is_not_found() {
    let data = uniform(1000, 4);
    assert!(matches!(
        value_at_percentile(&data, 0.333),
        Err(SimulationError::PercentileNotFound { .. })
    ));
}

#[test]
fn zero_inflated_ppf_marks_the_occurrence_boundary() {
    let dist = build_triangular(2800.0, 4000.0, 10_000.0).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let samples = sample_risk_n(&dist, 0.5, 100_000, &mut rng).unwrap();

    let ppf = empirical_ppf(&samples).unwrap();
    let min_non_zero = samples
        .iter()
        .copied()
        .filter(|&x| x != 0.0)
        .fold(f64::INFINITY, f64::min);
    let first_non_zero = ppf.cost.iter().position(|&c| c != 0.0).unwrap();
    assert_eq!(ppf.cost[first_non_zero], min_non_zero);
    assert!(ppf.cost[..first_non_zero].iter().all(|&c| c == 0.0));
}

#[test]
fn summary_and_table_agree_on_the_top_row() {
    let data = uniform(10_000, 6);
    let summary = CostSummary::from_samples(&data).unwrap();
    let table = NonExceedanceTable::from_samples(&data).unwrap();
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(summary.ppf.cost[100], max);
    assert_eq!(table.rows[100].cost, max);
    assert!(summary.interval.is_valid());
}

#[test]
fn nan_samples_are_rejected() {
    let err = empirical_ppf(&[1.0, f64::NAN, 2.0]).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidParameterType { .. }));
    assert!(histogram(&[f64::INFINITY]).is_err());
}
