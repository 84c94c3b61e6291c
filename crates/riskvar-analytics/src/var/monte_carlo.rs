//! Monte Carlo VaR calculation.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use riskvar_math::statistics::{mean, percentile_sorted, sample_std_dev};
use serde::{Deserialize, Serialize};

use super::validate_sample;
use crate::error::{VarError, VarResult};

/// Settings for a Monte Carlo VaR run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloParams {
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
    /// Number of simulated horizon returns
    pub num_simulations: usize,
    /// Holding period in days
    pub horizon_days: u32,
    /// Seed for a reproducible draw; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl MonteCarloParams {
    /// 10,000 one-day draws without a fixed seed.
    #[must_use]
    pub fn new(confidence_level: f64) -> Self {
        Self {
            confidence_level,
            num_simulations: 10_000,
            horizon_days: 1,
            seed: None,
        }
    }

    /// Sets the number of simulations.
    #[must_use]
    pub fn with_simulations(mut self, num_simulations: usize) -> Self {
        self.num_simulations = num_simulations;
        self
    }

    /// Sets the holding period.
    #[must_use]
    pub fn with_horizon(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// Fixes the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Monte Carlo VaR together with the sample it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloVar {
    /// VaR as a fraction of position value
    pub var: f64,
    /// Simulated horizon returns, in draw order
    pub simulated_returns: Vec<f64>,
}

/// Calculate Monte Carlo VaR.
///
/// Fits μ and σ to `returns` exactly as [`parametric_var`](super::parametric_var)
/// does, draws `num_simulations` horizon returns from
/// `Normal(μ·h, σ·√h)` (returns i.i.d. across days), and negates the
/// `(1 - confidence_level)` percentile of the draws.
///
/// The generator is created inside the call. With a seed, identical inputs
/// give a bit-identical sample; without one every call differs.
///
/// # Errors
///
/// `InvalidArgument` for zero simulations, a zero horizon or a confidence
/// level outside (0, 1); `InsufficientData` for fewer than two returns.
pub fn monte_carlo_var(returns: &[f64], params: &MonteCarloParams) -> VarResult<MonteCarloVar> {
    validate_sample(returns, params.confidence_level)?;

    if params.num_simulations == 0 {
        return Err(VarError::invalid_argument(
            "number of simulations must be a positive integer",
        ));
    }
    if params.horizon_days == 0 {
        return Err(VarError::invalid_argument(
            "time horizon must be at least one day",
        ));
    }

    let mu = mean(returns)?;
    let sigma = sample_std_dev(returns)?;
    let horizon = f64::from(params.horizon_days);

    let normal = Normal::new(mu * horizon, sigma * horizon.sqrt())
        .map_err(|e| VarError::invalid_argument(format!("cannot fit normal distribution: {e}")))?;

    let mut rng = match params.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let simulated_returns: Vec<f64> = (0..params.num_simulations)
        .map(|_| normal.sample(&mut rng))
        .collect();

    let mut sorted = simulated_returns.clone();
    sorted.sort_by(f64::total_cmp);
    let quantile = percentile_sorted(&sorted, 1.0 - params.confidence_level)?;

    Ok(MonteCarloVar {
        var: -quantile,
        simulated_returns,
    })
}
