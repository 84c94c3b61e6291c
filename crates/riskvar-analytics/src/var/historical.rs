//! Historical VaR calculation.

use riskvar_math::statistics::percentile;

use super::validate_sample;
use crate::error::VarResult;

/// Calculate historical VaR from a series of returns.
///
/// VaR is the negated `(1 - confidence_level)` percentile of the observed
/// returns, with linear interpolation between the two order statistics that
/// bracket position `(1 - confidence_level) * (n - 1)`.
///
/// # Arguments
///
/// * `returns` - Finite historical returns (as decimals, e.g., -0.01 for -1%)
/// * `confidence_level` - Confidence level (e.g., 0.95 for 95%)
///
/// # Errors
///
/// `InsufficientData` for an empty sample, `InvalidArgument` for a confidence
/// level outside (0, 1) or a non-finite return.
pub fn historical_var(returns: &[f64], confidence_level: f64) -> VarResult<f64> {
    validate_sample(returns, confidence_level)?;
    let quantile = percentile(returns, 1.0 - confidence_level)?;
    Ok(-quantile)
}
