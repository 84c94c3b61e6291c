//! Ladder command implementation.
//!
//! Evaluates several confidence levels over one fetched return sample.

use anyhow::Result;
use clap::Args;
use tabled::Tabled;
use tracing::debug;

use riskvar_analytics::results::format_currency;
use riskvar_analytics::var::format_confidence;
use riskvar_analytics::VarResults;
use riskvar_config::STANDARD_CONFIDENCE_LEVELS;

use crate::cli::OutputFormat;
use crate::commands::RunArgs;
use crate::error::CliError;
use crate::output::{format_percent, print_csv, print_header, print_json, print_table, VarRow};

/// Arguments for the ladder command.
#[derive(Args, Debug)]
pub struct LadderArgs {
    /// Ticker symbol. Defaults to the configured ticker.
    #[arg(short, long)]
    pub ticker: Option<String>,

    /// Comma-separated confidence levels (default: 0.90,0.95,0.99)
    #[arg(short, long, value_delimiter = ',')]
    pub levels: Vec<f64>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Tabled)]
struct LadderRow {
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Historical")]
    historical: String,
    #[tabled(rename = "Parametric")]
    parametric: String,
    #[tabled(rename = "Monte Carlo")]
    monte_carlo: String,
    #[tabled(rename = "Historical ($)")]
    historical_dollar: String,
    #[tabled(rename = "Parametric ($)")]
    parametric_dollar: String,
    #[tabled(rename = "Monte Carlo ($)")]
    monte_carlo_dollar: String,
}

impl From<&VarResults> for LadderRow {
    fn from(r: &VarResults) -> Self {
        Self {
            confidence: format_confidence(r.confidence_level),
            historical: format_percent(r.historical_var),
            parametric: format_percent(r.parametric_var),
            monte_carlo: format_percent(r.monte_carlo_var),
            historical_dollar: format_currency(r.historical_var_dollar),
            parametric_dollar: format_currency(r.parametric_var_dollar),
            monte_carlo_dollar: format_currency(r.monte_carlo_var_dollar),
        }
    }
}

/// Execute the ladder command.
pub fn execute(args: LadderArgs, format: OutputFormat) -> Result<()> {
    let mut config = args.run.overrides.resolve()?;
    if let Some(ticker) = args.ticker {
        config = config.with_ticker(ticker);
    }
    let levels = if args.levels.is_empty() {
        STANDARD_CONFIDENCE_LEVELS.to_vec()
    } else {
        args.levels
    };
    debug!(ticker = %config.ticker, ?levels, "Running ladder command");

    let ladder = args
        .run
        .pipeline()
        .run_ladder(&config, &levels)
        .map_err(CliError::from)?;

    match format {
        OutputFormat::Table => {
            print_header(&format!("VaR Ladder: {}", config.ticker));
            if let Some(first) = ladder.first() {
                if let Some(window) = &first.window {
                    println!("History: {window} ({} returns)", first.returns.len());
                }
            }
            let rows: Vec<LadderRow> = ladder.iter().map(LadderRow::from).collect();
            print_table(&rows)?;
        }
        OutputFormat::Json => {
            print_json(&ladder.iter().map(VarRow::from).collect::<Vec<_>>())?;
        }
        OutputFormat::Csv => {
            print_csv(&ladder.iter().map(VarRow::from).collect::<Vec<_>>())?;
        }
        OutputFormat::Minimal => {
            for r in &ladder {
                println!(
                    "{} {:.6} {:.6} {:.6}",
                    r.confidence_level, r.historical_var, r.parametric_var, r.monte_carlo_var
                );
            }
        }
    }

    Ok(())
}
