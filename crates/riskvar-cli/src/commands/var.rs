//! Var command implementation.
//!
//! Runs the VaR pipeline for one or more tickers.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use riskvar_analytics::VarResults;

use crate::cli::OutputFormat;
use crate::commands::RunArgs;
use crate::error::CliError;
use crate::output::{print_csv, print_error, print_header, print_json, VarRow};

/// Arguments for the var command.
#[derive(Args, Debug)]
pub struct VarArgs {
    /// Ticker symbol; repeat for several tickers. Defaults to the configured ticker.
    #[arg(short, long = "ticker")]
    pub tickers: Vec<String>,

    /// Emit the full result record, including return and simulated samples (JSON only)
    #[arg(long)]
    pub full: bool,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Execute the var command.
pub fn execute(args: VarArgs, format: OutputFormat) -> Result<()> {
    let config = args.run.overrides.resolve()?;
    let pipeline = args.run.pipeline();

    let tickers = if args.tickers.is_empty() {
        vec![config.ticker.clone()]
    } else {
        args.tickers
    };
    debug!(?tickers, data_dir = %args.run.data_dir.display(), "Running var command");

    if let [ticker] = tickers.as_slice() {
        let results = pipeline
            .run(&config.with_ticker(ticker.clone()))
            .map_err(CliError::from)?;
        return render(&[results], format, args.full);
    }

    let total = tickers.len();
    let mut completed = Vec::with_capacity(total);
    for (ticker, run) in pipeline.run_many(&tickers, &config) {
        match run {
            Ok(results) => completed.push(results),
            Err(e) => print_error(&format!("{ticker}: {e}")),
        }
    }

    render(&completed, format, args.full)?;

    let failed = total - completed.len();
    if failed > 0 {
        return Err(CliError::TickersFailed { failed, total }.into());
    }
    Ok(())
}

fn render(results: &[VarResults], format: OutputFormat, full: bool) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for r in results {
                print_header(&format!("Value at Risk: {}", r.ticker));
                print!("{r}");
            }
        }
        OutputFormat::Json if full => print_json(results)?,
        OutputFormat::Json => print_json(&rows(results))?,
        OutputFormat::Csv => print_csv(&rows(results))?,
        OutputFormat::Minimal => {
            for r in results {
                println!(
                    "{} {:.6} {:.6} {:.6}",
                    r.ticker, r.historical_var, r.parametric_var, r.monte_carlo_var
                );
            }
        }
    }
    Ok(())
}

fn rows(results: &[VarResults]) -> Vec<VarRow> {
    results.iter().map(VarRow::from).collect()
}
