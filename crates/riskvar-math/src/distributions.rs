//! Probability distributions.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{MathError, MathResult};

/// Inverse CDF of the standard Normal distribution.
///
/// `standard_normal_inv_cdf(0.95)` is the familiar one-sided 95% z-score,
/// 1.6448536269514722.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] unless `p` lies strictly inside (0, 1).
///
/// # Example
///
/// ```rust
/// use riskvar_math::distributions::standard_normal_inv_cdf;
///
/// let z = standard_normal_inv_cdf(0.5).unwrap();
/// assert!(z.abs() < 1e-10);
/// ```
pub fn standard_normal_inv_cdf(p: f64) -> MathResult<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(MathError::invalid_input(format!(
            "probability must be in (0, 1), got {p}"
        )));
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| MathError::invalid_input(e.to_string()))?;
    Ok(normal.inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_quantiles() {
        assert_relative_eq!(
            standard_normal_inv_cdf(0.95).unwrap(),
            1.6448536269514722,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            standard_normal_inv_cdf(0.99).unwrap(),
            2.3263478740408408,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            standard_normal_inv_cdf(0.90).unwrap(),
            1.2815515655446004,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_symmetry() {
        let lo = standard_normal_inv_cdf(0.025).unwrap();
        let hi = standard_normal_inv_cdf(0.975).unwrap();
        assert_relative_eq!(lo, -hi, epsilon = 1e-10);
    }

    #[test]
    fn test_rejects_boundaries() {
        assert!(standard_normal_inv_cdf(0.0).is_err());
        assert!(standard_normal_inv_cdf(1.0).is_err());
        assert!(standard_normal_inv_cdf(f64::NAN).is_err());
        assert!(standard_normal_inv_cdf(-0.1).is_err());
    }
}
