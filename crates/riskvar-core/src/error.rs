//! Error types for price data.

use thiserror::Error;

/// A specialized Result type for price data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised while obtaining or validating price history.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// The provider has no data at all for the ticker.
    #[error("not found: {0}")]
    NotFound(String),

    /// The provider knows the ticker but returned no observations.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// A price series violated its ordering or shape invariants.
    #[error("invalid price series: {reason}")]
    InvalidSeries {
        /// Description of the violation.
        reason: String,
    },

    /// Reading the underlying source failed.
    #[error("IO error: {0}")]
    Io(String),

    /// The underlying source could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl DataError {
    /// Creates an invalid series error.
    #[must_use]
    pub fn invalid_series(reason: impl Into<String>) -> Self {
        Self::InvalidSeries {
            reason: reason.into(),
        }
    }

    /// Creates a data unavailable error for a ticker and date range.
    #[must_use]
    pub fn no_observations(
        ticker: &str,
        start: impl std::fmt::Display,
        end: impl std::fmt::Display,
    ) -> Self {
        Self::DataUnavailable(format!(
            "no data returned for ticker {ticker} between {start} and {end}"
        ))
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e.to_string())
    }
}
