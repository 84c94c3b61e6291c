//! CLI command implementations.

pub mod config;
pub mod ladder;
pub mod var;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use ladder::LadderArgs;
pub use var::VarArgs;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use riskvar_analytics::VarPipeline;
use riskvar_config::VarConfig;
use riskvar_ext_file::CsvPriceSource;

use crate::error::{CliError, CliResult};

/// Run settings shared by every command. Flags override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// TOML file with run settings
    #[arg(long, env = "RISKVAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Confidence level, e.g. 0.95
    #[arg(short, long)]
    pub confidence: Option<f64>,

    /// Position value in dollars
    #[arg(short, long)]
    pub portfolio_value: Option<f64>,

    /// Monte Carlo holding period in days
    #[arg(long)]
    pub time_horizon: Option<u32>,

    /// Number of Monte Carlo draws
    #[arg(long)]
    pub mc_simulations: Option<usize>,

    /// Calendar days of history to use
    #[arg(long)]
    pub lookback_days: Option<u32>,

    /// Run date (YYYY-MM-DD); history ends the day before. Defaults to today.
    #[arg(long)]
    pub as_of: Option<String>,
}

impl ConfigOverrides {
    /// Builds the run configuration: defaults, then the file, then flags.
    pub fn resolve(&self) -> CliResult<VarConfig> {
        let mut config = match &self.config {
            Some(path) => VarConfig::from_file(path)?,
            None => VarConfig::default(),
        };

        if let Some(confidence) = self.confidence {
            config = config.with_confidence_level(confidence);
        }
        if let Some(value) = self.portfolio_value {
            config = config.with_portfolio_value(value);
        }
        if let Some(horizon) = self.time_horizon {
            config = config.with_time_horizon(horizon);
        }
        if let Some(sims) = self.mc_simulations {
            config = config.with_mc_simulations(sims);
        }
        if let Some(days) = self.lookback_days {
            config = config.with_lookback_days(days);
        }
        if let Some(ref as_of) = self.as_of {
            config = config.with_as_of(parse_date(as_of)?);
        }

        Ok(config)
    }
}

/// Price data location plus run settings.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Directory holding <TICKER>.csv price files
    #[arg(short, long, env = "RISKVAR_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

impl RunArgs {
    /// Pipeline reading from the data directory.
    pub fn pipeline(&self) -> VarPipeline<CsvPriceSource> {
        VarPipeline::new(CsvPriceSource::new(&self.data_dir))
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(matches!(parse_date("15/03/2024"), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn test_flags_override_defaults() {
        let overrides = ConfigOverrides {
            confidence: Some(0.99),
            time_horizon: Some(10),
            as_of: Some("2024-06-01".to_string()),
            ..ConfigOverrides::default()
        };
        let config = overrides.resolve().unwrap();

        assert_eq!(config.confidence_level, 0.99);
        assert_eq!(config.time_horizon, 10);
        assert_eq!(config.mc_simulations, riskvar_config::DEFAULT_MC_SIMULATIONS);
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(&path, "ticker = \"SPY\"\nconfidence_level = 0.9\n").unwrap();

        let overrides = ConfigOverrides {
            config: Some(path),
            confidence: Some(0.975),
            ..ConfigOverrides::default()
        };
        let config = overrides.resolve().unwrap();

        assert_eq!(config.ticker, "SPY");
        assert_eq!(config.confidence_level, 0.975);
    }
}
