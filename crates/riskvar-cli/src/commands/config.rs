//! Config command implementation.
//!
//! Shows the configuration a run would use after defaults, the config file
//! and flags are combined.

use anyhow::Result;
use clap::Args;

use riskvar_analytics::results::format_currency;
use riskvar_analytics::var::format_confidence;
use riskvar_config::VarConfig;

use crate::cli::OutputFormat;
use crate::commands::ConfigOverrides;
use crate::error::CliError;
use crate::output::{print_csv, print_header, print_table, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Ticker symbol
    #[arg(short, long)]
    pub ticker: Option<String>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat) -> Result<()> {
    let mut config = args.overrides.resolve()?;
    if let Some(ticker) = args.ticker {
        config = config.with_ticker(ticker);
    }
    let config = config.validated().map_err(CliError::from)?;

    match format {
        OutputFormat::Table => {
            print_header("Run Configuration");
            print_table(&config_rows(&config))?;
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Csv => print_csv(&config_rows(&config))?,
        // TOML, so the output can be saved and passed back with --config.
        OutputFormat::Minimal => print!("{}", toml::to_string(&config)?),
    }

    Ok(())
}

fn config_rows(config: &VarConfig) -> Vec<KeyValue> {
    let window = config.lookback_window();
    vec![
        KeyValue::new("Ticker", config.ticker.clone()),
        KeyValue::new("Confidence Level", format_confidence(config.confidence_level)),
        KeyValue::new("Portfolio Value", format_currency(config.portfolio_value)),
        KeyValue::new("Time Horizon (days)", config.time_horizon.to_string()),
        KeyValue::new("MC Simulations", config.mc_simulations.to_string()),
        KeyValue::new("Lookback (days)", config.lookback_days.to_string()),
        KeyValue::new("Run Date", config.run_date().to_string()),
        KeyValue::new("History", window.to_string()),
    ]
}
