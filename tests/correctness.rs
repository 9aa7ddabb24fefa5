//! Correctness and invariant tests for meanflow
//!
//! These tests check the identities that must hold between accumulator
//! families: weighted vs unweighted, data kind vs ddof, fused vs separate
//! traversals. They complement the unit tests in each module.
//!
//! Run with: cargo test --test correctness --features full

// Require all features
#[cfg(not(all(feature = "means", feature = "dispersion")))]
compile_error!(
    "Correctness tests require all features. Run: cargo test --test correctness --features full"
);

use meanflow::accumulate::{stats_accumulate, stats_accumulate_weighted};
use meanflow::batch::*;
use meanflow::dispersion::{StandardDeviation, Variance, WeightedStandardDeviation, WeightedVariance};
use meanflow::means::{GeometricMean, Mean, WeightedMean};
use meanflow::traits::{Accumulator, DataKind, StatsError};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

fn integers(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000i32..1000, min_len..64)
        .prop_map(|v| v.into_iter().map(f64::from).collect())
}

fn positives() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.1f64..10.0, 1..32)
}

// ============================================================================
// Reference scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn means() {
        assert_eq!(mean([1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_eq!(mean([1.0, 2.0, 3.0]), 2.0);
        assert_eq!(weighted_mean([1.0, 2.0, 3.0], [1.0, 1.0, 2.0]), 2.25);

        assert!(close(geometric_mean([1.0, 2.0, 4.0]), 2.0));
        assert!(close(
            weighted_geometric_mean([1.0, 2.0, 4.0], [2.0, 1.0, 2.0]),
            2.0
        ));

        assert!(close(harmonic_mean([40.0, 60.0]), 48.0));
        assert!(close(weighted_harmonic_mean([40.0, 60.0], [5.0, 30.0]), 56.0));
    }

    #[test]
    fn dispersion() {
        let x = [1.0, 2.0, 3.0];
        let w = [1.0, 1.0, 2.0];

        assert!(close(variance(x, DataKind::Population), 0.6666666666666666));
        assert!(close(variance(x, DataKind::Sample), 1.0));
        assert!(close(weighted_variance(x, w, DataKind::Population), 0.6875));
        assert!(close(weighted_variance(x, w, DataKind::Sample), 1.1));

        assert!((standard_deviation_ddof(x, 0.0) - 0.81649658).abs() < 1e-8);
        assert!(close(standard_deviation_ddof(x, 1.0), 1.0));
        assert!((weighted_standard_deviation(x, w, DataKind::Population) - 0.82915620).abs() < 1e-8);
        assert!((weighted_standard_deviation(x, w, DataKind::Sample) - 1.04880885).abs() < 1e-8);
    }

    #[test]
    fn normalize_with_one_traversal() {
        let mut values = [1.0, 2.0, 3.0, 4.0, 5.0];

        let mut mu = Mean::<f64>::new();
        let mut sigma = StandardDeviation::<f64>::with_ddof(0.0);
        stats_accumulate(values, (&mut mu, &mut sigma));

        assert_eq!(mu.value(), mean(values));
        assert_eq!(sigma.value(), standard_deviation_ddof(values, 0.0));

        let (mu, sigma) = (mu.value(), sigma.value());
        for x in values.iter_mut() {
            *x = (*x - mu) / sigma;
        }

        assert!(close(mean(values), 0.0));
        assert!(close(standard_deviation_ddof(values, 0.0), 1.0));
    }
}

// ============================================================================
// Degenerate input
// ============================================================================

mod degenerate {
    use super::*;

    #[test]
    fn empty_input_is_not_guarded() {
        let empty: [f64; 0] = [];

        assert!(mean(empty).is_nan());
        assert!(harmonic_mean(empty).is_nan());
        assert!(variance(empty, DataKind::Population).is_nan());
        assert!(weighted_mean(empty, empty).is_nan());
    }

    #[test]
    fn empty_weights_leave_accumulator_untouched() {
        let mut acc = WeightedMean::<f64>::new();
        let visited = stats_accumulate_weighted([1.0, 2.0, 3.0], [0.0f64; 0], (&mut acc,));

        assert_eq!(visited, 0);
        assert!(acc.is_empty());
        assert_eq!(acc.checked_value(), Err(StatsError::Empty));
    }

    #[test]
    fn checked_value_reports_each_case() {
        let mut sample = Variance::<f64>::new(DataKind::Sample);
        sample.update(3.0);
        assert_eq!(
            sample.checked_value(),
            Err(StatsError::InsufficientDegreesOfFreedom)
        );

        let mut concentrated = WeightedStandardDeviation::<f64>::new(DataKind::Sample);
        concentrated.update((1.0, 0.0));
        concentrated.update((4.0, 3.0));
        assert_eq!(
            concentrated.checked_value(),
            Err(StatsError::DegenerateWeights)
        );

        let mut weightless = WeightedVariance::<f64>::new(DataKind::Population);
        weightless.update((4.0, 0.0));
        assert_eq!(weightless.checked_value(), Err(StatsError::ZeroTotalWeight));
    }

    #[test]
    fn negative_geometric_mean_is_nan() {
        let mut acc = GeometricMean::<f64>::new();
        acc.update(-8.0);
        acc.update(2.0);

        // (-16)^(1/2)
        assert!(acc.value().is_nan());
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn mean_is_sum_over_count(x in integers(1)) {
        let expected = x.iter().sum::<f64>() / x.len() as f64;
        prop_assert_eq!(mean(x.iter().copied()), expected);
    }

    #[test]
    fn unit_weights_match_unweighted(x in positives()) {
        let ones = vec![1.0; x.len()];
        let x = || x.iter().copied();
        let w = || ones.iter().copied();

        prop_assert!(close(weighted_mean(x(), w()), mean(x())));
        prop_assert!(close(weighted_geometric_mean(x(), w()), geometric_mean(x())));
        prop_assert!(close(weighted_harmonic_mean(x(), w()), harmonic_mean(x())));
        prop_assert!(close(
            weighted_variance(x(), w(), DataKind::Population),
            variance(x(), DataKind::Population)
        ));
        if ones.len() > 1 {
            prop_assert!(close(
                weighted_variance(x(), w(), DataKind::Sample),
                variance(x(), DataKind::Sample)
            ));
        }
    }

    #[test]
    fn data_kind_matches_ddof(x in integers(2)) {
        let x = || x.iter().copied();

        prop_assert_eq!(variance(x(), DataKind::Population), variance_ddof(x(), 0.0));
        prop_assert_eq!(variance(x(), DataKind::Sample), variance_ddof(x(), 1.0));
        prop_assert_eq!(
            standard_deviation(x(), DataKind::Sample),
            standard_deviation_ddof(x(), 1.0)
        );
    }

    #[test]
    fn standard_deviation_is_sqrt_of_variance(x in integers(2), ddof in 0u8..2) {
        let ddof = f64::from(ddof);
        let x = || x.iter().copied();

        prop_assert_eq!(
            standard_deviation_ddof(x(), ddof),
            variance_ddof(x(), ddof).sqrt()
        );
    }

    #[test]
    fn population_not_above_sample(x in integers(2)) {
        let x = || x.iter().copied();
        prop_assert!(variance(x(), DataKind::Population) <= variance(x(), DataKind::Sample));
    }

    #[test]
    fn fused_matches_separate(x in integers(2)) {
        let mut mu = Mean::<f64>::new();
        let mut sigma = StandardDeviation::<f64>::new(DataKind::Sample);
        let mut var = Variance::<f64>::with_ddof(0.0);
        stats_accumulate(x.iter().copied(), (&mut mu, &mut sigma, &mut var));

        prop_assert_eq!(mu.value(), mean(x.iter().copied()));
        prop_assert_eq!(sigma.value(), standard_deviation(x.iter().copied(), DataKind::Sample));
        prop_assert_eq!(var.value(), variance_ddof(x.iter().copied(), 0.0));
    }

    #[test]
    fn zip_shortens_to_shorter(x in integers(1), w in prop::collection::vec(1u8..10, 1..64)) {
        let n = x.len().min(w.len());
        let w: Vec<f64> = w.into_iter().map(f64::from).collect();

        prop_assert_eq!(
            weighted_mean(x.iter().copied(), w.iter().copied()),
            weighted_mean(x[..n].iter().copied(), w[..n].iter().copied())
        );
    }

    #[test]
    fn checked_value_agrees_with_value(x in integers(2)) {
        let mut acc = Variance::<f64>::new(DataKind::Sample);
        stats_accumulate(x.iter().copied(), (&mut acc,));

        prop_assert_eq!(acc.checked_value(), Ok(acc.value()));
    }

    #[test]
    fn clear_restores_fresh_state(x in integers(1)) {
        let mut reused = WeightedVariance::<f64>::new(DataKind::Sample);
        stats_accumulate_weighted(x.iter().copied(), x.iter().map(|v| v.abs() + 1.0), (&mut reused,));
        reused.clear();

        prop_assert_eq!(reused, WeightedVariance::<f64>::new(DataKind::Sample));
    }
}

// ============================================================================
// Serde checkpoints
// ============================================================================

#[cfg(feature = "serde")]
mod checkpoint {
    use super::*;

    #[test]
    fn resume_after_round_trip() {
        let data = [(1.5, 2.0), (3.0, 1.0), (-4.25, 0.5), (8.0, 3.0), (2.0, 1.0)];

        let mut uninterrupted = WeightedVariance::<f64>::new(DataKind::Sample);
        stats_accumulate_weighted(
            data.iter().map(|p| p.0),
            data.iter().map(|p| p.1),
            (&mut uninterrupted,),
        );

        let mut first_half = WeightedVariance::<f64>::new(DataKind::Sample);
        for &(x, w) in &data[..2] {
            first_half.update((x, w));
        }
        let json = serde_json::to_string(&first_half).unwrap();
        let mut resumed: WeightedVariance<f64> = serde_json::from_str(&json).unwrap();
        for &(x, w) in &data[2..] {
            resumed.update((x, w));
        }

        assert_eq!(resumed.data_kind(), DataKind::Sample);
        assert_eq!(resumed.count(), uninterrupted.count());
        assert!(close(resumed.value(), uninterrupted.value()));
    }

    #[test]
    fn data_kind_serializes_by_name() {
        let json = serde_json::to_string(&DataKind::Population).unwrap();
        assert_eq!(json, "\"Population\"");

        let kind: DataKind = serde_json::from_str("\"Sample\"").unwrap();
        assert_eq!(kind, DataKind::Sample);
    }
}
