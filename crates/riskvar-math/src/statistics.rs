//! Sample statistics.
//!
//! All functions take the canonical `&[f64]` sample and assume the caller has
//! already removed non-finite values.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Arithmetic mean of a sample.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for an empty sample.
pub fn mean(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance with Bessel's correction (divisor `n - 1`).
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for fewer than two observations.
pub fn sample_variance(values: &[f64]) -> MathResult<f64> {
    if values.len() < 2 {
        return Err(MathError::insufficient_data(2, values.len()));
    }
    let mu = mean(values)?;
    let ss: f64 = values.iter().map(|x| (x - mu) * (x - mu)).sum();
    Ok(ss / (values.len() - 1) as f64)
}

/// Sample standard deviation with Bessel's correction.
pub fn sample_std_dev(values: &[f64]) -> MathResult<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Percentile of an unsorted sample using linear interpolation.
///
/// `q` is a fraction in `[0, 1]` (0.05 is the 5th percentile). The position
/// `q * (n - 1)` is located in the sorted sample and the two bracketing order
/// statistics are interpolated linearly. This is the conventional "linear"
/// percentile used by most statistical packages.
///
/// # Example
///
/// ```rust
/// use riskvar_math::statistics::percentile;
///
/// let data = [4.0, 1.0, 3.0, 2.0];
/// // position 0.5 * 3 = 1.5 -> halfway between 2.0 and 3.0
/// assert_eq!(percentile(&data, 0.5).unwrap(), 2.5);
/// ```
pub fn percentile(values: &[f64], q: f64) -> MathResult<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    percentile_sorted(&sorted, q)
}

/// Percentile of a sample already sorted in ascending order.
///
/// See [`percentile`] for the interpolation rule.
pub fn percentile_sorted(sorted: &[f64], q: f64) -> MathResult<f64> {
    if sorted.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(MathError::invalid_input(format!(
            "percentile fraction must be in [0, 1], got {q}"
        )));
    }

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;

    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Summary statistics of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleStats {
    /// Number of observations
    pub count: usize,
    /// Sample mean
    pub mean: f64,
    /// Bessel-corrected standard deviation
    pub std_dev: f64,
    /// Smallest observation
    pub min: f64,
    /// Largest observation
    pub max: f64,
}

impl SampleStats {
    /// Computes summary statistics; needs at least two observations.
    pub fn from_slice(values: &[f64]) -> MathResult<Self> {
        let std_dev = sample_std_dev(values)?;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        Ok(Self {
            count: values.len(),
            mean: mean(values)?,
            std_dev,
            min,
            max,
        })
    }
}
