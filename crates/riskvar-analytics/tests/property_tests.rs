//! Property-based tests for the VaR estimators.
//!
//! These tests verify properties that should hold for any valid sample:
//! - Log returns are exact ratios of consecutive prices
//! - Historical VaR stays inside the sample range and grows with confidence
//! - Historical and Monte Carlo VaR are non-negative on loss-dominated samples
//! - Parametric VaR reduces to the negated mean at 50% confidence
//! - Dollar VaR is exactly value × percentage

use proptest::prelude::*;
use riskvar_analytics::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn prices(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..1_000.0, min_len..120)
}

fn returns_sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-0.2f64..0.2, 2..250)
}

fn confidence() -> impl Strategy<Value = f64> {
    0.5f64..0.999
}

/// Symmetric pairs `x, -x` plus one extra loss: a strict majority of the
/// sample is non-positive and the mean is negative.
fn loss_dominated_sample() -> impl Strategy<Value = Vec<f64>> {
    (
        prop::collection::vec(0.0f64..0.1, 1..120),
        -0.05f64..-0.001,
    )
        .prop_map(|(half, extra)| {
            let mut sample: Vec<f64> = half.iter().flat_map(|&x| [x, -x]).collect();
            sample.push(extra);
            sample
        })
}

// =============================================================================
// RETURNS
// =============================================================================

proptest! {
    #[test]
    fn prop_log_returns_are_price_ratios(p in prices(31)) {
        let returns = calculate_returns(&p, ReturnMethod::Log).unwrap();

        prop_assert_eq!(returns.len(), p.len() - 1);
        prop_assert_eq!(returns.invalid_count(), 0);
        for (i, r) in returns.values().iter().enumerate() {
            prop_assert_eq!(*r, (p[i + 1] / p[i]).ln());
        }
    }

    #[test]
    fn prop_log_return_never_exceeds_simple(p in prices(2)) {
        let log = calculate_returns(&p, ReturnMethod::Log).unwrap();
        let simple = calculate_returns(&p, ReturnMethod::Simple).unwrap();

        for (l, s) in log.values().iter().zip(simple.values()) {
            prop_assert!(*l <= *s + 1e-15);
            prop_assert!(l.abs() < 1e-300 || (*l > 0.0) == (*s > 0.0));
        }
    }
}

// =============================================================================
// HISTORICAL VAR
// =============================================================================

proptest! {
    #[test]
    fn prop_historical_var_within_sample_range(r in returns_sample(), c in confidence()) {
        let var = historical_var(&r, c).unwrap();
        let min = r.iter().copied().fold(f64::INFINITY, f64::min);
        let max = r.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(var <= -min + 1e-15);
        prop_assert!(var >= -max - 1e-15);
    }

    #[test]
    fn prop_historical_var_monotone_in_confidence(
        r in returns_sample(),
        a in confidence(),
        b in confidence(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let var_lo = historical_var(&r, lo).unwrap();
        let var_hi = historical_var(&r, hi).unwrap();

        prop_assert!(var_hi >= var_lo - 1e-15);
    }

    #[test]
    fn prop_all_gain_sample_has_negative_var(
        r in prop::collection::vec(0.001f64..0.05, 2..100),
        c in confidence(),
    ) {
        // No losses in the sample means the loss quantile is itself a gain.
        prop_assert!(historical_var(&r, c).unwrap() < 0.0);
    }
}

// =============================================================================
// NON-NEGATIVITY
// =============================================================================

proptest! {
    #[test]
    fn prop_historical_var_non_negative_when_losses_dominate(
        r in loss_dominated_sample(),
        c in 0.501f64..0.999,
    ) {
        prop_assert!(historical_var(&r, c).unwrap() >= 0.0);
    }

    #[test]
    fn prop_historical_var_non_negative_for_majority_losses(
        losses in prop::collection::vec(-0.2f64..0.0, 3..100),
        gains in prop::collection::vec(0.0f64..0.2, 0..50),
        c in 0.501f64..0.999,
    ) {
        prop_assume!(losses.len() > gains.len());
        let sample: Vec<f64> = gains.iter().chain(&losses).copied().collect();

        prop_assert!(historical_var(&sample, c).unwrap() >= 0.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_monte_carlo_var_non_negative_when_losses_dominate(
        r in loss_dominated_sample(),
        c in 0.9f64..0.999,
        seed in any::<u64>(),
    ) {
        let params = MonteCarloParams::new(c).with_simulations(2_000).with_seed(seed);
        let mc = monte_carlo_var(&r, &params).unwrap();

        prop_assert!(mc.var >= 0.0);
    }
}

/// All-gain sample: the loss quantile is itself a gain, so both estimators
/// report a negative VaR. Returned as is.
#[test]
fn test_all_gain_sample_yields_negative_monte_carlo_var() {
    let gains: Vec<f64> = (0..60)
        .map(|i| 0.01 + 0.001 * (f64::from(i) * 0.7).sin())
        .collect();
    let params = MonteCarloParams::new(0.95)
        .with_simulations(10_000)
        .with_seed(42);

    let mc = monte_carlo_var(&gains, &params).unwrap();
    assert!(mc.var < 0.0, "expected negative VaR, got {}", mc.var);
    assert!(mc.var > -0.011);
    assert_eq!(mc.simulated_returns.len(), 10_000);

    let again = monte_carlo_var(&gains, &params).unwrap();
    assert_eq!(mc.var, again.var);

    assert!(historical_var(&gains, 0.95).unwrap() < 0.0);
}

// =============================================================================
// PARAMETRIC VAR
// =============================================================================

proptest! {
    #[test]
    fn prop_parametric_var_at_half_is_negated_mean(
        half in prop::collection::vec(0.0f64..0.1, 1..100),
    ) {
        let symmetric: Vec<f64> = half.iter().flat_map(|&x| [x, -x]).collect();
        let var = parametric_var(&symmetric, 0.5).unwrap();

        prop_assert!(var.abs() < 1e-12);
    }

    #[test]
    fn prop_parametric_var_increases_with_confidence(r in returns_sample()) {
        prop_assume!(r.iter().any(|&x| x != r[0]));

        let v90 = parametric_var(&r, 0.90).unwrap();
        let v95 = parametric_var(&r, 0.95).unwrap();
        let v99 = parametric_var(&r, 0.99).unwrap();

        prop_assert!(v90 < v95);
        prop_assert!(v95 < v99);
    }
}

// =============================================================================
// PORTFOLIO VAR
// =============================================================================

proptest! {
    #[test]
    fn prop_dollar_var_is_exact_product(
        value in -1.0e9f64..1.0e9,
        pct in -1.0f64..1.0,
    ) {
        let pv = calculate_portfolio_var(&[], value, pct);

        prop_assert_eq!(pv.var_percentage, pct);
        prop_assert_eq!(pv.var_dollar, value * pct);
    }
}

#[test]
fn test_dollar_var_edge_values() {
    assert_eq!(calculate_portfolio_var(&[], 100_000.0, 0.0).var_dollar, 0.0);
    assert_eq!(calculate_portfolio_var(&[], 0.0, 0.05).var_dollar, 0.0);
    assert_eq!(
        calculate_portfolio_var(&[], 100_000.0, -0.012).var_dollar,
        100_000.0 * -0.012
    );
}
