//! Return calculation from price sequences.

use std::fmt;
use std::str::FromStr;

use riskvar_core::PriceSeries;
use serde::{Deserialize, Serialize};

use crate::error::{VarError, VarResult};

/// How consecutive prices are turned into a return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReturnMethod {
    /// `ln(p[i] / p[i-1])`
    #[default]
    Log,
    /// `p[i] / p[i-1] - 1`
    Simple,
}

impl ReturnMethod {
    /// Returns the method tag (`"log"` or `"simple"`).
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            ReturnMethod::Log => "log",
            ReturnMethod::Simple => "simple",
        }
    }

    fn apply(self, previous: f64, current: f64) -> f64 {
        match self {
            ReturnMethod::Log => (current / previous).ln(),
            ReturnMethod::Simple => current / previous - 1.0,
        }
    }
}

impl fmt::Display for ReturnMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ReturnMethod {
    type Err = VarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "log" => Ok(ReturnMethod::Log),
            "simple" => Ok(ReturnMethod::Simple),
            _ => Err(VarError::InvalidArgument(format!(
                "unknown return method: {s}. Use 'log' or 'simple'"
            ))),
        }
    }
}

/// Returns derived from a price sequence.
///
/// Holds one value per price after the first. Entries computed from a zero,
/// missing or otherwise unusable price are non-finite and are removed by
/// [`ReturnSeries::cleaned`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    method: ReturnMethod,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Method used to compute the returns.
    pub fn method(&self) -> ReturnMethod {
        self.method
    }

    /// Raw returns, including undefined entries.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of raw returns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no returns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of undefined (non-finite) entries.
    pub fn invalid_count(&self) -> usize {
        self.values.iter().filter(|r| !r.is_finite()).count()
    }

    /// Finite returns only, in their original order.
    pub fn cleaned(&self) -> Vec<f64> {
        self.values.iter().copied().filter(|r| r.is_finite()).collect()
    }
}

/// Calculates returns from prices.
///
/// Produces `prices.len() - 1` values; `result[i - 1]` is the return from
/// `prices[i - 1]` to `prices[i]`.
///
/// # Errors
///
/// Returns [`VarError::InsufficientData`] for fewer than two prices.
///
/// # Example
///
/// ```rust
/// use riskvar_analytics::returns::{calculate_returns, ReturnMethod};
///
/// let simple = calculate_returns(&[100.0, 110.0, 99.0], ReturnMethod::Simple).unwrap();
/// assert_eq!(simple.len(), 2);
/// assert!((simple.values()[0] - 0.10).abs() < 1e-12);
/// assert!((simple.values()[1] + 0.10).abs() < 1e-12);
/// ```
pub fn calculate_returns(prices: &[f64], method: ReturnMethod) -> VarResult<ReturnSeries> {
    if prices.len() < 2 {
        return Err(VarError::insufficient_data(2, prices.len()));
    }

    let values = prices
        .windows(2)
        .map(|w| method.apply(w[0], w[1]))
        .collect();

    Ok(ReturnSeries { method, values })
}

/// Calculates returns from the closing prices of a price series.
pub fn calculate_returns_from_series(
    series: &PriceSeries,
    method: ReturnMethod,
) -> VarResult<ReturnSeries> {
    calculate_returns(&series.closes(), method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_returns() {
        let prices = [100.0, 105.0, 102.0];
        let returns = calculate_returns(&prices, ReturnMethod::Log).unwrap();
        assert_eq!(returns.len(), 2);
        assert_eq!(returns.values()[0], (105.0_f64 / 100.0).ln());
        assert_eq!(returns.values()[1], (102.0_f64 / 105.0).ln());
        assert_eq!(returns.method(), ReturnMethod::Log);
    }

    #[test]
    fn test_simple_returns() {
        let returns = calculate_returns(&[50.0, 55.0, 44.0], ReturnMethod::Simple).unwrap();
        assert_relative_eq!(returns.values()[0], 0.10, epsilon = 1e-12);
        assert_relative_eq!(returns.values()[1], -0.20, epsilon = 1e-12);
    }

    #[test]
    fn test_requires_two_prices() {
        assert_eq!(
            calculate_returns(&[100.0], ReturnMethod::Log).unwrap_err(),
            VarError::insufficient_data(2, 1)
        );
        assert!(calculate_returns(&[], ReturnMethod::Simple).is_err());
    }

    #[test]
    fn test_unusable_prices_are_flagged_and_cleaned() {
        let prices = [100.0, f64::NAN, 101.0, 0.0, 102.0, 103.0];
        let returns = calculate_returns(&prices, ReturnMethod::Log).unwrap();
        assert_eq!(returns.len(), 5);
        // NaN poisons two returns, the zero price two more (-inf and +inf).
        assert_eq!(returns.invalid_count(), 4);
        assert_eq!(returns.cleaned(), vec![(103.0_f64 / 102.0).ln()]);
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("log".parse::<ReturnMethod>().unwrap(), ReturnMethod::Log);
        assert_eq!(" Simple ".parse::<ReturnMethod>().unwrap(), ReturnMethod::Simple);

        let err = "arithmetic".parse::<ReturnMethod>().unwrap_err();
        assert!(matches!(err, VarError::InvalidArgument(ref m) if m.contains("arithmetic")));
    }
}
