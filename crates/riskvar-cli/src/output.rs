//! Output formatting utilities.

use chrono::NaiveDate;
use colored::Colorize;
use riskvar_analytics::VarResults;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as a JSON array.
pub fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV with a header row.
pub fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Formats a fraction as a percentage string with four decimals.
pub fn format_percent(value: f64) -> String {
    format!("{:.4}%", value * 100.0)
}

/// Flat, machine-readable view of one VaR run.
///
/// Leaves out the return and simulated samples so each run is one CSV row.
#[derive(Debug, Clone, Serialize)]
pub struct VarRow {
    pub ticker: String,
    pub confidence_level: f64,
    pub portfolio_value: f64,
    pub time_horizon: u32,
    pub mc_simulations: usize,
    pub observations: usize,
    pub window_start: Option<NaiveDate>,
    pub window_end: Option<NaiveDate>,
    pub historical_var: f64,
    pub parametric_var: f64,
    pub monte_carlo_var: f64,
    pub historical_var_dollar: f64,
    pub parametric_var_dollar: f64,
    pub monte_carlo_var_dollar: f64,
}

impl From<&VarResults> for VarRow {
    fn from(r: &VarResults) -> Self {
        Self {
            ticker: r.ticker.clone(),
            confidence_level: r.confidence_level,
            portfolio_value: r.portfolio_value,
            time_horizon: r.time_horizon,
            mc_simulations: r.mc_simulations,
            observations: r.returns.len(),
            window_start: r.window.map(|w| w.start),
            window_end: r.window.map(|w| w.end),
            historical_var: r.historical_var,
            parametric_var: r.parametric_var,
            monte_carlo_var: r.monte_carlo_var,
            historical_var_dollar: r.historical_var_dollar,
            parametric_var_dollar: r.parametric_var_dollar,
            monte_carlo_var_dollar: r.monte_carlo_var_dollar,
        }
    }
}
