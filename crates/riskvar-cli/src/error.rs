//! CLI error types.

use riskvar_analytics::VarError;
use riskvar_config::ConfigError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Configuration file or flag error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// VaR calculation error.
    #[error("Calculation error: {0}")]
    Calculation(#[from] VarError),

    /// Some tickers of a batch run failed.
    #[error("{failed} of {total} tickers failed")]
    TickersFailed {
        /// Number of failed tickers.
        failed: usize,
        /// Number of tickers requested.
        total: usize,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
