//! # riskvar Core
//!
//! Core types and abstractions shared by the riskvar crates.
//!
//! - **Types**: [`PricePoint`], [`PriceSeries`] and the sampling [`Interval`]
//! - **Provider seam**: [`PriceHistoryProvider`], the trait every price-history
//!   source implements, together with its [`PriceHistoryRequest`]
//! - **Errors**: [`DataError`] for everything that can go wrong while
//!   obtaining or validating price data
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use riskvar_core::prelude::*;
//!
//! let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
//! let series = PriceSeries::new(
//!     "AAPL",
//!     vec![
//!         PricePoint::from_close(d(2), 185.64),
//!         PricePoint::from_close(d(3), 184.25),
//!         PricePoint::from_close(d(4), 181.91),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(series.closes(), vec![185.64, 184.25, 181.91]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod provider;
pub mod types;

pub use error::{DataError, DataResult};
pub use provider::{PriceHistoryProvider, PriceHistoryRequest};
pub use types::{Interval, PricePoint, PriceSeries};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{DataError, DataResult};
    pub use crate::provider::{PriceHistoryProvider, PriceHistoryRequest};
    pub use crate::types::{Interval, PricePoint, PriceSeries};
}
