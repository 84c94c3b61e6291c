//! Value at Risk (VaR) estimators.
//!
//! VaR is the loss, as a fraction of position value, that is not expected to
//! be exceeded at a given confidence level. All three estimators take the same
//! canonical input, a slice of finite returns, and report VaR as a positive
//! number for a loss.
//!
//! - [`historical_var`]: empirical quantile of the observed returns
//! - [`parametric_var`]: Normal quantile from the sample mean and volatility
//! - [`monte_carlo_var`]: empirical quantile of draws from the fitted Normal
//!
//! A sample that contains no losses can produce a negative VaR; it is
//! returned as-is.

mod historical;
mod monte_carlo;
mod parametric;

pub use historical::historical_var;
pub use monte_carlo::{monte_carlo_var, MonteCarloParams, MonteCarloVar};
pub use parametric::parametric_var;

use serde::{Deserialize, Serialize};

use crate::error::{VarError, VarResult};

/// VaR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VarMethod {
    /// Historical simulation
    Historical,
    /// Parametric (variance-covariance)
    Parametric,
    /// Monte Carlo simulation
    MonteCarlo,
}

impl VarMethod {
    /// All methods, in reporting order.
    pub const ALL: [VarMethod; 3] = [
        VarMethod::Historical,
        VarMethod::Parametric,
        VarMethod::MonteCarlo,
    ];

    /// Human-readable method name.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            VarMethod::Historical => "Historical",
            VarMethod::Parametric => "Parametric",
            VarMethod::MonteCarlo => "Monte Carlo",
        }
    }
}

impl std::fmt::Display for VarMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single VaR estimate with the settings that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarEstimate {
    /// Method used for calculation
    pub method: VarMethod,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
    /// Time horizon in days
    pub horizon_days: u32,
    /// VaR as a fraction of position value
    pub var: f64,
}

impl std::fmt::Display for VarEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} VaR({}, {}d): {:.4}%",
            self.method,
            format_confidence(self.confidence_level),
            self.horizon_days,
            self.var * 100.0
        )
    }
}

/// Formats a confidence level as a percentage, e.g. `95%` or `97.5%`.
#[must_use]
pub fn format_confidence(confidence_level: f64) -> String {
    let pct = (confidence_level * 10_000.0).round() / 100.0;
    format!("{pct}%")
}

/// Checks the shared estimator preconditions.
fn validate_sample(returns: &[f64], confidence_level: f64) -> VarResult<()> {
    if returns.is_empty() {
        return Err(VarError::insufficient_data(1, 0));
    }

    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(VarError::invalid_argument(format!(
            "confidence level must be strictly between 0 and 1, got {confidence_level}"
        )));
    }

    if let Some(pos) = returns.iter().position(|r| !r.is_finite()) {
        return Err(VarError::invalid_argument(format!(
            "returns must be finite; found {} at index {pos}",
            returns[pos]
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.95), "95%");
        assert_eq!(format_confidence(0.975), "97.5%");
        assert_eq!(format_confidence(0.999), "99.9%");
    }

    #[test]
    fn test_estimate_display() {
        let estimate = VarEstimate {
            method: VarMethod::MonteCarlo,
            confidence_level: 0.99,
            horizon_days: 10,
            var: 0.0523,
        };
        assert_eq!(estimate.to_string(), "Monte Carlo VaR(99%, 10d): 5.2300%");
    }

    #[test]
    fn test_validate_sample() {
        assert_eq!(
            validate_sample(&[], 0.95).unwrap_err(),
            VarError::insufficient_data(1, 0)
        );
        assert!(validate_sample(&[0.01], 1.0).is_err());
        assert!(validate_sample(&[0.01], 0.0).is_err());
        assert!(validate_sample(&[0.01, f64::NAN], 0.95).is_err());
        assert!(validate_sample(&[0.01, -0.02], 0.95).is_ok());
    }
}
