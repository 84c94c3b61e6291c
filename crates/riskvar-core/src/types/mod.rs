//! Domain types for price history.
//!
//! - [`PricePoint`]: One dated OHLCV observation
//! - [`PriceSeries`]: Date-ordered observations for a single ticker
//! - [`Interval`]: Sampling interval requested from a provider

mod interval;
mod price;

pub use interval::Interval;
pub use price::{PricePoint, PriceSeries};
