//! Property-based tests for the sample statistics.

use proptest::prelude::*;
use riskvar_math::distributions::standard_normal_inv_cdf;
use riskvar_math::statistics::{mean, percentile, sample_std_dev};

fn sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0f64..1.0, 1..200)
}

proptest! {
    #[test]
    fn prop_percentile_hits_extremes(v in sample()) {
        let min = v.iter().copied().fold(f64::INFINITY, f64::min);
        let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert_eq!(percentile(&v, 0.0).unwrap(), min);
        prop_assert_eq!(percentile(&v, 1.0).unwrap(), max);
    }

    #[test]
    fn prop_percentile_ignores_input_order(v in sample(), q in 0.0f64..=1.0) {
        let mut reversed = v.clone();
        reversed.reverse();

        prop_assert_eq!(percentile(&v, q).unwrap(), percentile(&reversed, q).unwrap());
    }

    #[test]
    fn prop_std_dev_is_shift_invariant(v in prop::collection::vec(-1.0f64..1.0, 2..200), c in -5.0f64..5.0) {
        let shifted: Vec<f64> = v.iter().map(|x| x + c).collect();

        let a = sample_std_dev(&v).unwrap();
        let b = sample_std_dev(&shifted).unwrap();
        prop_assert!((a - b).abs() < 1e-9);
        prop_assert!((mean(&shifted).unwrap() - mean(&v).unwrap() - c).abs() < 1e-9);
    }

    #[test]
    fn prop_inverse_cdf_is_odd(p in 0.001f64..0.999) {
        let upper = standard_normal_inv_cdf(p).unwrap();
        let lower = standard_normal_inv_cdf(1.0 - p).unwrap();
        prop_assert!((upper + lower).abs() < 1e-8);
    }
}
