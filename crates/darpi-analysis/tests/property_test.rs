//! Property tests for the sampling and statistics engine.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use darpi_analysis::simulation::{build_triangular, sample_risk_n, sum_samples_expecting};
use darpi_analysis::statistics::{empirical_cdf, empirical_ppf, histogram};
use darpi_core::errors::SimulationError;

/// Ordered cost triple `(a, c, b)` with `a <= c <= b`.
fn ordered_triple() -> impl Strategy<Value = (f64, f64, f64)> {
    (-1.0e6..1.0e6f64, 0.0..1.0e6f64, 0.0..=1.0f64).prop_map(|(a, width, t)| {
        let b = a + width;
        let c = (a + t * width).clamp(a, b);
        (a, c, b)
    })
}

proptest! {
    #[test]
    fn ordered_triples_always_build(triple in ordered_triple()) {
        let (a, c, b) = triple;
        let dist = build_triangular(a, c, b).unwrap();
        prop_assert_eq!(dist.support(), (a, b));
        prop_assert_eq!(dist.most_likely(), c);
    }

    #[test]
    fn mode_outside_support_is_a_range_error(
        a in -1.0e3..1.0e3f64,
        width in 0.0..1.0e3f64,
        overshoot in 1.0e-3..1.0e3f64,
        above in any::<bool>(),
    ) {
        let b = a + width;
        let c = if above { b + overshoot } else { a - overshoot };
        let err = build_triangular(a, c, b).unwrap_err();
        let is_range_error = matches!(err, SimulationError::InvalidParameterRange { .. });
        prop_assert!(is_range_error);
    }

    #[test]
    fn non_zero_count_is_floor_n_p(p in 0.0..=1.0f64, n in 1usize..2000, seed in any::<u64>()) {
        let dist = build_triangular(1.0, 2.0, 3.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let samples = sample_risk_n(&dist, p, n, &mut rng).unwrap();
        prop_assert_eq!(samples.len(), n);
        let non_zero = samples.iter().filter(|&&x| x != 0.0).count();
        prop_assert_eq!(non_zero, (n as f64 * p).floor() as usize);
    }

    #[test]
    fn probability_outside_unit_interval_is_rejected(
        p in prop_oneof![-10.0..-1e-9f64, 1.0 + 1e-9..10.0f64]
    ) {
        let dist = build_triangular(1.0, 2.0, 3.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        let err = sample_risk_n(&dist, p, 10, &mut rng).unwrap_err();
        let is_range_error = matches!(err, SimulationError::InvalidParameterRange { .. });
        prop_assert!(is_range_error);
    }

    #[test]
    fn sum_is_permutation_invariant(
        rows in prop::collection::vec(prop::collection::vec(-1.0e3..1.0e3f64, 8), 1..6),
        rotate in 0usize..6,
    ) {
        let mut rotated = rows.clone();
        let k = rotate % rows.len();
        rotated.rotate_left(k);
        let a = sum_samples_expecting(&rows, 8).unwrap();
        let b = sum_samples_expecting(&rotated, 8).unwrap();
        for (x, y) in a.iter().zip(&b) {
            prop_assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn cdf_probabilities_strictly_increase_to_one(
        data in prop::collection::vec(-1.0e6..1.0e6f64, 1..500)
    ) {
        let cdf = empirical_cdf(&data).unwrap();
        prop_assert_eq!(cdf.cost.len(), data.len());
        prop_assert!(cdf.cost.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(cdf.p.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(*cdf.p.last().unwrap(), 1.0);
    }

    #[test]
    fn ppf_always_has_101_points(data in prop::collection::vec(0.0..1.0e6f64, 1..500)) {
        let ppf = empirical_ppf(&data).unwrap();
        prop_assert_eq!(ppf.cost.len(), 101);
        prop_assert_eq!(ppf.p.len(), 101);
        prop_assert_eq!(ppf.p[0], 0.0);
        prop_assert_eq!(ppf.p[100], 1.0);
    }

    #[test]
    fn histogram_frequencies_never_exceed_one(
        data in prop::collection::vec(0.0..1.0e6f64, 1..500)
    ) {
        let hist = histogram(&data).unwrap();
        prop_assert_eq!(hist.bin_edges.len(), 41);
        prop_assert_eq!(hist.frequency.len(), 40);
        prop_assert!(hist.total_frequency() <= 1.0 + 1e-9);
    }
}
