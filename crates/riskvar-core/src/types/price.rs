//! Price observations and series.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Interval;
use crate::error::{DataError, DataResult};

/// A single dated OHLCV observation.
///
/// Only `close` is consumed by the risk engine. A close that is missing in
/// the source is stored as `NaN`; it yields an undefined return that is
/// dropped before estimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Session high
    pub high: f64,
    /// Session low
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume, when the source reports it
    pub volume: Option<u64>,
}

impl PricePoint {
    /// Creates an observation where only the close is known.
    #[must_use]
    pub fn from_close(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            open: close,
            high: close,
            low: close,
            close,
            volume: None,
        }
    }

    /// Returns true if the close is a usable (finite, positive) price.
    #[must_use]
    pub fn has_valid_close(&self) -> bool {
        self.close.is_finite() && self.close > 0.0
    }
}

/// Date-ordered price history for one ticker.
///
/// Dates are strictly increasing. The series is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    ticker: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates a price series, rejecting non-increasing dates.
    pub fn new(ticker: impl Into<String>, points: Vec<PricePoint>) -> DataResult<Self> {
        let ticker = ticker.into();
        if let Some(pair) = points.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(DataError::invalid_series(format!(
                "{ticker}: dates must be strictly increasing ({} followed by {})",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self { ticker, points })
    }

    /// Creates a price series after sorting observations by date.
    ///
    /// Duplicate dates are still rejected.
    pub fn from_unsorted(
        ticker: impl Into<String>,
        mut points: Vec<PricePoint>,
    ) -> DataResult<Self> {
        points.sort_by_key(|p| p.date);
        Self::new(ticker, points)
    }

    /// Ticker symbol this series belongs to.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All observations in date order.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Date of the first observation.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Date of the last observation.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Returns the sub-series with dates in `[start, end]`.
    #[must_use]
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            ticker: self.ticker.clone(),
            points: self
                .points
                .iter()
                .filter(|p| p.date >= start && p.date <= end)
                .copied()
                .collect(),
        }
    }

    /// Aggregates daily bars into `interval` bars.
    ///
    /// Each output bar is dated at its last observation and carries the first
    /// open, highest high, lowest low, last close and summed volume of its
    /// period. Weeks are ISO weeks. Daily resampling returns a copy.
    #[must_use]
    pub fn resample(&self, interval: Interval) -> Self {
        let period_key = |date: NaiveDate| -> (i32, u32) {
            match interval {
                Interval::Daily => (date.year(), date.ordinal()),
                Interval::Weekly => (date.iso_week().year(), date.iso_week().week()),
                Interval::Monthly => (date.year(), date.month()),
            }
        };

        let mut bars: Vec<PricePoint> = Vec::new();
        let mut current_key = None;
        for point in &self.points {
            let key = period_key(point.date);
            match bars.last_mut() {
                Some(bar) if current_key == Some(key) => {
                    bar.date = point.date;
                    bar.high = bar.high.max(point.high);
                    bar.low = bar.low.min(point.low);
                    bar.close = point.close;
                    bar.volume = match (bar.volume, point.volume) {
                        (Some(a), Some(b)) => Some(a.saturating_add(b)),
                        (a, b) => a.or(b),
                    };
                }
                _ => {
                    bars.push(*point);
                    current_key = Some(key);
                }
            }
        }

        Self {
            ticker: self.ticker.clone(),
            points: bars,
        }
    }
}
