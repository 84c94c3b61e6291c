//! The VaR result record and its text summary.

use std::fmt;

use riskvar_config::LookbackWindow;
use riskvar_math::statistics::SampleStats;
use serde::{Deserialize, Serialize};

use crate::portfolio::PortfolioVar;
use crate::var::{format_confidence, VarEstimate, VarMethod};

/// Everything produced by one pipeline run.
///
/// Built once by the pipeline, fully populated, and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarResults {
    /// Ticker symbol
    pub ticker: String,
    /// Position value in dollars
    pub portfolio_value: f64,
    /// Confidence level
    pub confidence_level: f64,
    /// Monte Carlo holding period in days
    pub time_horizon: u32,
    /// Number of Monte Carlo draws
    pub mc_simulations: usize,
    /// Price window the returns came from; `None` when returns were supplied
    pub window: Option<LookbackWindow>,
    /// Cleaned log returns used by all three estimators
    pub returns: Vec<f64>,
    /// Summary statistics of `returns`
    pub return_stats: SampleStats,
    /// Historical VaR (fraction)
    pub historical_var: f64,
    /// Parametric VaR (fraction)
    pub parametric_var: f64,
    /// Monte Carlo VaR (fraction)
    pub monte_carlo_var: f64,
    /// Simulated horizon returns behind `monte_carlo_var`
    pub mc_simulated_returns: Vec<f64>,
    /// Historical VaR in dollars
    pub historical_var_dollar: f64,
    /// Parametric VaR in dollars
    pub parametric_var_dollar: f64,
    /// Monte Carlo VaR in dollars
    pub monte_carlo_var_dollar: f64,
}

impl VarResults {
    /// The three estimates in reporting order.
    ///
    /// Historical and parametric figures are one-period estimates; only the
    /// Monte Carlo figure is projected over `time_horizon`.
    pub fn estimates(&self) -> [VarEstimate; 3] {
        VarMethod::ALL.map(|method| VarEstimate {
            method,
            confidence_level: self.confidence_level,
            horizon_days: self.horizon_for(method),
            var: self.var_for(method),
        })
    }

    /// Percentage and dollar VaR for one method.
    pub fn portfolio_var(&self, method: VarMethod) -> PortfolioVar {
        let (var_percentage, var_dollar) = match method {
            VarMethod::Historical => (self.historical_var, self.historical_var_dollar),
            VarMethod::Parametric => (self.parametric_var, self.parametric_var_dollar),
            VarMethod::MonteCarlo => (self.monte_carlo_var, self.monte_carlo_var_dollar),
        };
        PortfolioVar {
            var_percentage,
            var_dollar,
        }
    }

    fn var_for(&self, method: VarMethod) -> f64 {
        self.portfolio_var(method).var_percentage
    }

    fn horizon_for(&self, method: VarMethod) -> u32 {
        match method {
            VarMethod::MonteCarlo => self.time_horizon,
            VarMethod::Historical | VarMethod::Parametric => 1,
        }
    }

    /// Human-readable multi-line summary; the same text as `Display`.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VarResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conf = format_confidence(self.confidence_level);

        writeln!(f, "Ticker: {}", self.ticker)?;
        writeln!(f, "Portfolio Value: {}", format_currency(self.portfolio_value))?;
        writeln!(f, "Confidence Level: {conf}")?;
        if let Some(window) = &self.window {
            writeln!(f, "History: {window}")?;
        }
        writeln!(f, "Observations: {}", self.returns.len())?;
        writeln!(f)?;
        writeln!(f, "Value at Risk (VaR) Results:")?;

        for method in VarMethod::ALL {
            let pv = self.portfolio_var(method);
            match method {
                VarMethod::Historical => writeln!(f, "  Historical Method:")?,
                VarMethod::Parametric => {
                    writeln!(f, "  Parametric Method (Normal Distribution):")?;
                }
                VarMethod::MonteCarlo => writeln!(
                    f,
                    "  Monte Carlo Method ({} simulations, {}):",
                    format_count(self.mc_simulations),
                    format_days(self.time_horizon)
                )?,
            }
            writeln!(f, "    VaR: {:.4}%", pv.var_percentage * 100.0)?;
            writeln!(f, "    VaR (Dollar): {}", format_currency(pv.var_dollar))?;
            writeln!(f)?;
        }

        writeln!(f, "Interpretation:")?;
        writeln!(f, "  With {conf} confidence, the maximum expected loss is:")?;
        for method in VarMethod::ALL {
            writeln!(
                f,
                "    {} ({}): {}",
                method,
                format_days(self.horizon_for(method)),
                format_currency(self.portfolio_var(method).var_dollar)
            )?;
        }
        Ok(())
    }
}

/// Formats a dollar amount with thousands separators, e.g. `$12,345.67`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&format!("{:.2}", amount.abs())))
}

fn format_count(n: usize) -> String {
    group_thousands(&n.to_string())
}

fn format_days(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

fn group_thousands(number: &str) -> String {
    let (int_part, frac_part) = match number.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (number, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}
