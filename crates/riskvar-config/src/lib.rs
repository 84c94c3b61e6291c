//! riskvar Configuration Layer
//!
//! A single explicit value object, [`VarConfig`], carries everything a VaR
//! run needs. Unset fields fall back to documented defaults at construction
//! time; there is no ambient or global configuration.
//!
//! # Defaults
//!
//! | Field | Default |
//! |---|---|
//! | `ticker` | `"AAPL"` |
//! | `confidence_level` | `0.95` |
//! | `portfolio_value` | `100000.0` |
//! | `time_horizon` | `1` day |
//! | `mc_simulations` | `10000` |
//! | `lookback_days` | `730` calendar days, ending the day before the run date |
//!
//! # Example
//!
//! ```rust
//! use riskvar_config::{Validate, VarConfig};
//!
//! let config = VarConfig::default()
//!     .with_ticker("MSFT")
//!     .with_confidence_level(0.99);
//! assert!(config.is_valid());
//!
//! let from_file = VarConfig::from_toml_str("ticker = \"SPY\"\ntime_horizon = 10").unwrap();
//! assert_eq!(from_file.ticker, "SPY");
//! assert_eq!(from_file.time_horizon, 10);
//! assert_eq!(from_file.mc_simulations, 10_000);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod run;
mod window;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use run::{
    VarConfig, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_LOOKBACK_DAYS, DEFAULT_MC_SIMULATIONS,
    DEFAULT_PORTFOLIO_VALUE, DEFAULT_TICKER, DEFAULT_TIME_HORIZON, MAX_LOOKBACK_DAYS,
    STANDARD_CONFIDENCE_LEVELS,
};
pub use window::LookbackWindow;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::run::VarConfig;
    pub use crate::window::LookbackWindow;
}
