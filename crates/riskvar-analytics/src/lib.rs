//! # riskvar Analytics
//!
//! Single-asset Value-at-Risk analytics.
//!
//! This crate provides:
//!
//! - **Returns**: Log and simple returns from a price sequence
//! - **VaR**: Historical, Parametric (variance-covariance) and Monte Carlo
//!   estimators over a return sample
//! - **Portfolio**: Scaling percentage VaR to a dollar amount
//! - **Pipeline**: Price history → returns → three estimates → dollar VaR,
//!   assembled into a [`VarResults`] record
//!
//! ## Example
//!
//! ```rust
//! use riskvar_analytics::prelude::*;
//!
//! let prices = [100.0, 101.0, 99.5, 100.2, 98.7, 99.9];
//! let returns = calculate_returns(&prices, ReturnMethod::Log).unwrap().cleaned();
//!
//! let hist = historical_var(&returns, 0.95).unwrap();
//! let param = parametric_var(&returns, 0.95).unwrap();
//! let mc = monte_carlo_var(&returns, &MonteCarloParams::new(0.95).with_seed(7)).unwrap();
//!
//! assert!(hist > 0.0 && param > 0.0 && mc.var > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod pipeline;
pub mod portfolio;
pub mod results;
pub mod returns;
pub mod var;

pub use error::{VarError, VarResult};
pub use pipeline::{
    calculate_var_for_ticker, calculate_var_for_tickers, calculate_var_from_returns,
    calculate_var_ladder, VarPipeline, MIN_RETURN_OBSERVATIONS, PIPELINE_SEED,
};
pub use results::VarResults;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{VarError, VarResult};
    pub use crate::pipeline::{
        calculate_var_for_ticker, calculate_var_for_tickers, calculate_var_from_returns,
        calculate_var_ladder, VarPipeline,
    };
    pub use crate::portfolio::{calculate_portfolio_var, PortfolioVar};
    pub use crate::results::VarResults;
    pub use crate::returns::{calculate_returns, ReturnMethod, ReturnSeries};
    pub use crate::var::{
        historical_var, monte_carlo_var, parametric_var, MonteCarloParams, MonteCarloVar,
        VarEstimate, VarMethod,
    };
}
