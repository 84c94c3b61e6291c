//! VaR run configuration.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigResult, Validate, ValidationError};
use crate::window::LookbackWindow;

/// Ticker analysed when none is given.
pub const DEFAULT_TICKER: &str = "AAPL";
/// Default confidence level (95%).
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;
/// Default position size in dollars.
pub const DEFAULT_PORTFOLIO_VALUE: f64 = 100_000.0;
/// Default holding period in days.
pub const DEFAULT_TIME_HORIZON: u32 = 1;
/// Default number of Monte Carlo draws.
pub const DEFAULT_MC_SIMULATIONS: usize = 10_000;
/// Default lookback in calendar days (two years).
pub const DEFAULT_LOOKBACK_DAYS: u32 = 365 * 2;
/// Longest accepted lookback in calendar days (one hundred years).
pub const MAX_LOOKBACK_DAYS: u32 = 365 * 100;
/// Confidence levels reported side by side in a VaR ladder.
pub const STANDARD_CONFIDENCE_LEVELS: [f64; 3] = [0.90, 0.95, 0.99];

/// Configuration of a single VaR run.
///
/// Every field has a documented default, so a partially specified TOML file
/// or a `VarConfig::default()` followed by a few `with_*` calls is always a
/// complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VarConfig {
    /// Ticker symbol to analyse.
    pub ticker: String,

    /// Confidence level, strictly between 0 and 1.
    pub confidence_level: f64,

    /// Position value in dollars used to scale percentage VaR.
    pub portfolio_value: f64,

    /// Holding period in days for the Monte Carlo projection.
    pub time_horizon: u32,

    /// Number of Monte Carlo draws.
    pub mc_simulations: usize,

    /// Calendar days of history to request.
    pub lookback_days: u32,

    /// Run date; the lookback window ends the day before. `None` means today.
    pub as_of: Option<NaiveDate>,
}

impl Default for VarConfig {
    fn default() -> Self {
        Self {
            ticker: DEFAULT_TICKER.to_string(),
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            portfolio_value: DEFAULT_PORTFOLIO_VALUE,
            time_horizon: DEFAULT_TIME_HORIZON,
            mc_simulations: DEFAULT_MC_SIMULATIONS,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            as_of: None,
        }
    }
}

impl VarConfig {
    /// Creates the default configuration for a ticker.
    pub fn for_ticker(ticker: impl Into<String>) -> Self {
        Self::default().with_ticker(ticker)
    }

    /// Parses a configuration from TOML; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Sets the ticker.
    #[must_use]
    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = ticker.into();
        self
    }

    /// Sets the confidence level.
    #[must_use]
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Sets the portfolio value.
    #[must_use]
    pub fn with_portfolio_value(mut self, portfolio_value: f64) -> Self {
        self.portfolio_value = portfolio_value;
        self
    }

    /// Sets the time horizon in days.
    #[must_use]
    pub fn with_time_horizon(mut self, time_horizon: u32) -> Self {
        self.time_horizon = time_horizon;
        self
    }

    /// Sets the number of Monte Carlo simulations.
    #[must_use]
    pub fn with_mc_simulations(mut self, mc_simulations: usize) -> Self {
        self.mc_simulations = mc_simulations;
        self
    }

    /// Sets the lookback in calendar days.
    #[must_use]
    pub fn with_lookback_days(mut self, lookback_days: u32) -> Self {
        self.lookback_days = lookback_days;
        self
    }

    /// Pins the run date.
    #[must_use]
    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Run date: the pinned `as_of`, otherwise today's local date.
    pub fn run_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Lookback window ending the day before the run date.
    pub fn lookback_window(&self) -> LookbackWindow {
        LookbackWindow::ending_before(self.run_date(), self.lookback_days)
    }

    /// Validates the configuration and returns it unchanged.
    pub fn validated(self) -> ConfigResult<Self> {
        self.validate_or_error()?;
        Ok(self)
    }
}

impl Validate for VarConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.ticker.trim().is_empty() {
            errors.push(ValidationError::new("ticker", "Ticker cannot be empty"));
        }

        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            errors.push(ValidationError::with_rule(
                "confidence_level",
                format!(
                    "Confidence level must be strictly between 0 and 1, got {}",
                    self.confidence_level
                ),
                "open_unit_interval",
            ));
        }

        if !self.portfolio_value.is_finite() {
            errors.push(ValidationError::with_rule(
                "portfolio_value",
                "Portfolio value must be finite",
                "finite",
            ));
        }

        if self.time_horizon == 0 {
            errors.push(ValidationError::with_rule(
                "time_horizon",
                "Time horizon must be at least one day",
                "positive_horizon",
            ));
        }

        if self.mc_simulations == 0 {
            errors.push(ValidationError::with_rule(
                "mc_simulations",
                "Number of simulations must be positive",
                "positive_simulations",
            ));
        }

        if self.lookback_days < 2 {
            errors.push(ValidationError::with_rule(
                "lookback_days",
                "Lookback must cover at least two days",
                "min_lookback",
            ));
        } else if self.lookback_days > MAX_LOOKBACK_DAYS {
            errors.push(ValidationError::with_rule(
                "lookback_days",
                format!(
                    "Lookback cannot exceed {MAX_LOOKBACK_DAYS} days, got {}",
                    self.lookback_days
                ),
                "max_lookback",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = VarConfig::default();
        assert_eq!(config.ticker, "AAPL");
        assert!((config.confidence_level - 0.95).abs() < f64::EPSILON);
        assert!((config.portfolio_value - 100_000.0).abs() < f64::EPSILON);
        assert_eq!(config.time_horizon, 1);
        assert_eq!(config.mc_simulations, 10_000);
        assert_eq!(config.lookback_days, 730);
        assert!(config.as_of.is_none());
        assert!(config.is_valid());
    }

    #[test]
    fn test_builder() {
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let config = VarConfig::for_ticker("TSLA")
            .with_confidence_level(0.99)
            .with_portfolio_value(250_000.0)
            .with_time_horizon(10)
            .with_mc_simulations(50_000)
            .with_lookback_days(365)
            .with_as_of(as_of);

        assert_eq!(config.ticker, "TSLA");
        assert_eq!(config.time_horizon, 10);
        assert_eq!(config.run_date(), as_of);
        assert_eq!(
            config.lookback_window().end,
            NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
        );
    }

    #[test]
    fn test_invalid_confidence() {
        for bad in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let config = VarConfig::default().with_confidence_level(bad);
            let errors = config.validate();
            assert_eq!(errors.len(), 1, "confidence {bad}");
            assert_eq!(errors[0].field, "confidence_level");
        }
    }

    #[test]
    fn test_lookback_bounds() {
        assert!(VarConfig::default().with_lookback_days(MAX_LOOKBACK_DAYS).is_valid());
        for bad in [0, 1, MAX_LOOKBACK_DAYS + 1, u32::MAX] {
            let errors = VarConfig::default().with_lookback_days(bad).validate();
            assert_eq!(errors.len(), 1, "lookback {bad}");
            assert_eq!(errors[0].field, "lookback_days");
        }
    }

    #[test]
    fn test_multiple_errors_are_collected() {
        let config = VarConfig::default()
            .with_ticker("")
            .with_mc_simulations(0)
            .with_time_horizon(0);
        match config.validated() {
            Err(ConfigError::MultipleValidationErrors(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected multiple errors, got {other:?}"),
        }
    }

    #[test]
    fn test_single_error_is_flattened() {
        let err = VarConfig::default().with_mc_simulations(0).validated().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation { ref field, .. } if field == "mc_simulations")
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = VarConfig::from_toml_str(
            r#"
            ticker = "NVDA"
            confidence_level = 0.99
            as_of = "2024-12-31"
            "#,
        )
        .unwrap();
        assert_eq!(config.ticker, "NVDA");
        assert!((config.confidence_level - 0.99).abs() < f64::EPSILON);
        assert_eq!(config.mc_simulations, DEFAULT_MC_SIMULATIONS);
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2024, 12, 31));
    }

    #[test]
    fn test_unknown_toml_key_is_rejected() {
        let err = VarConfig::from_toml_str("tickr = \"AAPL\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "portfolio_value = 5000.0\nmc_simulations = 2000").unwrap();
        let config = VarConfig::from_file(file.path()).unwrap();
        assert!((config.portfolio_value - 5000.0).abs() < f64::EPSILON);
        assert_eq!(config.mc_simulations, 2000);
        assert_eq!(config.ticker, DEFAULT_TICKER);
    }

    #[test]
    fn test_missing_file() {
        let err = VarConfig::from_file("/nonexistent/riskvar.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
