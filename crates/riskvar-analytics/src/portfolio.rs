//! Dollar scaling of percentage VaR.

use serde::{Deserialize, Serialize};

/// A VaR figure expressed both as a fraction and in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioVar {
    /// VaR as a decimal fraction (e.g., 0.02 for 2%)
    pub var_percentage: f64,
    /// VaR in dollars
    pub var_dollar: f64,
}

impl PortfolioVar {
    /// Scales a percentage VaR by the position value.
    #[must_use]
    pub fn from_percentage(portfolio_value: f64, var_percentage: f64) -> Self {
        Self {
            var_percentage,
            var_dollar: portfolio_value * var_percentage,
        }
    }
}

/// Converts percentage VaR to dollar VaR for a position.
///
/// `var_dollar` is exactly `portfolio_value * var_percentage` for every real
/// input, zero and negative percentages included. `returns` is not used; it is
/// accepted so every VaR entry point takes the sample first.
///
/// ```rust
/// use riskvar_analytics::portfolio::calculate_portfolio_var;
///
/// let pv = calculate_portfolio_var(&[], 250_000.0, 0.021);
/// assert_eq!(pv.var_dollar, 250_000.0 * 0.021);
/// ```
#[must_use]
pub fn calculate_portfolio_var(
    _returns: &[f64],
    portfolio_value: f64,
    var_percentage: f64,
) -> PortfolioVar {
    PortfolioVar::from_percentage(portfolio_value, var_percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollar_scaling_is_exact() {
        for pct in [0.0, 0.0123, -0.004, 1.0, 0.1 + 0.2] {
            let pv = calculate_portfolio_var(&[0.01, -0.02], 100_000.0, pct);
            assert_eq!(pv.var_percentage, pct);
            assert_eq!(pv.var_dollar, 100_000.0 * pct);
        }
    }

    #[test]
    fn test_zero_portfolio() {
        assert_eq!(PortfolioVar::from_percentage(0.0, 0.05).var_dollar, 0.0);
    }
}
