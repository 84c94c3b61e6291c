//! The price-history provider seam.
//!
//! The risk engine never talks to a market-data vendor directly. It asks a
//! [`PriceHistoryProvider`] for a [`PriceSeries`]; file, in-memory and
//! network sources live in extension crates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};
use crate::types::{Interval, PriceSeries};

/// Request for the price history of one ticker over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceHistoryRequest {
    /// Ticker symbol (e.g. "AAPL")
    pub ticker: String,
    /// First date of the range (inclusive)
    pub start: NaiveDate,
    /// Last date of the range (inclusive)
    pub end: NaiveDate,
    /// Bar interval
    pub interval: Interval,
}

impl PriceHistoryRequest {
    /// Creates a daily request, rejecting an empty ticker or inverted range.
    pub fn new(ticker: impl Into<String>, start: NaiveDate, end: NaiveDate) -> DataResult<Self> {
        let ticker = ticker.into();
        if ticker.trim().is_empty() {
            return Err(DataError::Parse("ticker must not be empty".to_string()));
        }
        if start > end {
            return Err(DataError::Parse(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(Self {
            ticker,
            start,
            end,
            interval: Interval::Daily,
        })
    }

    /// Sets the bar interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }
}

/// A source of historical prices.
///
/// Implementations return observations in date order and fail with
/// [`DataError::NotFound`] or [`DataError::DataUnavailable`] when nothing
/// exists for the ticker and range. Calls may block on I/O.
pub trait PriceHistoryProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetches the price history described by `request`.
    fn price_history(&self, request: &PriceHistoryRequest) -> DataResult<PriceSeries>;
}

impl<P: PriceHistoryProvider + ?Sized> PriceHistoryProvider for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn price_history(&self, request: &PriceHistoryRequest) -> DataResult<PriceSeries> {
        (**self).price_history(request)
    }
}

impl<P: PriceHistoryProvider + ?Sized> PriceHistoryProvider for std::sync::Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn price_history(&self, request: &PriceHistoryRequest) -> DataResult<PriceSeries> {
        (**self).price_history(request)
    }
}
