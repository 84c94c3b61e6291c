//! riskvar CLI - Command-line interface for single-asset Value-at-Risk.
//!
//! # Usage
//!
//! ```bash
//! # VaR for one ticker from ./data/AAPL.csv
//! riskvar var --data-dir data --ticker AAPL --confidence 0.99
//!
//! # Several tickers in parallel, as JSON
//! riskvar --format json var --data-dir data --ticker AAPL --ticker MSFT
//!
//! # 90/95/99% ladder for one ticker
//! riskvar ladder --data-dir data --ticker SPY
//!
//! # Show the resolved configuration
//! riskvar config --config risk.toml --time-horizon 10
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let format = cli.format;

    match cli.command {
        Commands::Var(args) => commands::var::execute(args, format)?,
        Commands::Ladder(args) => commands::ladder::execute(args, format)?,
        Commands::Config(args) => commands::config::execute(args, format)?,
    }

    Ok(())
}

/// Logs go to stderr so table/JSON/CSV output on stdout stays clean.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else if verbose {
        "warn,riskvar=debug"
    } else {
        "warn,riskvar=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
