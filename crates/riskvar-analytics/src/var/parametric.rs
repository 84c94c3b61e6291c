//! Parametric (variance-covariance) VaR calculation.

use riskvar_math::distributions::standard_normal_inv_cdf;
use riskvar_math::statistics::{mean, sample_std_dev};

use super::validate_sample;
use crate::error::VarResult;

/// Calculate parametric VaR assuming Normally distributed returns.
///
/// `VaR = -(μ - z·σ)` where μ is the sample mean, σ the Bessel-corrected
/// sample standard deviation and `z = Φ⁻¹(confidence_level)`.
///
/// # Errors
///
/// `InsufficientData` for fewer than two observations (σ needs `n - 1 > 0`),
/// `InvalidArgument` for a confidence level outside (0, 1).
///
/// # Example
///
/// ```rust
/// use riskvar_analytics::var::parametric_var;
///
/// let returns = [-0.01, 0.01, -0.01, 0.01];
/// let var = parametric_var(&returns, 0.95).unwrap();
/// assert!(var > 0.0);
/// ```
pub fn parametric_var(returns: &[f64], confidence_level: f64) -> VarResult<f64> {
    validate_sample(returns, confidence_level)?;

    let mu = mean(returns)?;
    let sigma = sample_std_dev(returns)?;
    let z = standard_normal_inv_cdf(confidence_level)?;

    Ok(-(mu - z * sigma))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VarError;
    use approx::assert_relative_eq;

    #[test]
    fn test_parametric_var_zero_mean() {
        // mean 0, sample std 0.01 * sqrt(4/3)
        let returns = [-0.01, 0.01, -0.01, 0.01];
        let sigma = 0.01 * (4.0_f64 / 3.0).sqrt();
        assert_relative_eq!(
            parametric_var(&returns, 0.95).unwrap(),
            1.6448536269514722 * sigma,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_mean_shifts_var() {
        let base = [-0.01, 0.01, -0.01, 0.01];
        let shifted: Vec<f64> = base.iter().map(|r| r + 0.002).collect();
        let diff = parametric_var(&base, 0.99).unwrap() - parametric_var(&shifted, 0.99).unwrap();
        assert_relative_eq!(diff, 0.002, epsilon = 1e-12);
    }

    #[test]
    fn test_needs_two_observations() {
        assert_eq!(
            parametric_var(&[0.01], 0.95).unwrap_err(),
            VarError::insufficient_data(2, 1)
        );
    }

    #[test]
    fn test_rejects_confidence_outside_unit_interval() {
        assert!(matches!(
            parametric_var(&[0.01, -0.01], 1.2),
            Err(VarError::InvalidArgument(_))
        ));
    }
}
