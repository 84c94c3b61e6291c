//! Error types for VaR calculations.

use riskvar_config::ConfigError;
use riskvar_core::DataError;
use riskvar_math::MathError;
use thiserror::Error;

/// A specialized Result type for VaR calculations.
pub type VarResult<T> = Result<T, VarError>;

/// Errors surfaced by the VaR engine.
///
/// Every failure collapses into one of three kinds; a failed step aborts the
/// whole run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VarError {
    /// Unsupported method, non-positive simulation count, or a confidence
    /// level outside (0, 1).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The price-history provider returned nothing for the ticker and range.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// Too few observations for a reliable estimate.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations.
        required: usize,
        /// Observations actually available.
        actual: usize,
    },
}

impl VarError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

impl From<MathError> for VarError {
    fn from(e: MathError) -> Self {
        match e {
            MathError::InsufficientData { required, actual } => {
                VarError::InsufficientData { required, actual }
            }
            MathError::InvalidInput { reason } => VarError::InvalidArgument(reason),
        }
    }
}

impl From<DataError> for VarError {
    fn from(e: DataError) -> Self {
        VarError::DataUnavailable(e.to_string())
    }
}

impl From<ConfigError> for VarError {
    fn from(e: ConfigError) -> Self {
        VarError::InvalidArgument(e.to_string())
    }
}
