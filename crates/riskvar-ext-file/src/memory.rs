//! In-memory price history.

use std::collections::HashMap;

use riskvar_core::{DataError, DataResult, PriceHistoryProvider, PriceHistoryRequest, PriceSeries};

/// Price history held in memory, keyed by ticker.
///
/// Useful for tests and for callers that already hold prices from elsewhere.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPriceSource {
    series: HashMap<String, PriceSeries>,
}

impl InMemoryPriceSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series, keyed by its ticker.
    #[must_use]
    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.insert(series);
        self
    }

    /// Add or replace a series, keyed by its ticker.
    pub fn insert(&mut self, series: PriceSeries) {
        self.series.insert(series.ticker().to_string(), series);
    }

    /// Tickers held by this source, sorted.
    pub fn tickers(&self) -> Vec<&str> {
        let mut tickers: Vec<&str> = self.series.keys().map(String::as_str).collect();
        tickers.sort_unstable();
        tickers
    }
}

impl PriceHistoryProvider for InMemoryPriceSource {
    fn name(&self) -> &str {
        "memory"
    }

    fn price_history(&self, request: &PriceHistoryRequest) -> DataResult<PriceSeries> {
        let stored = self
            .series
            .get(&request.ticker)
            .or_else(|| self.series.get(&request.ticker.to_uppercase()))
            .ok_or_else(|| {
                DataError::NotFound(format!("no series loaded for ticker {}", request.ticker))
            })?;

        let series = stored
            .between(request.start, request.end)
            .resample(request.interval);
        if series.is_empty() {
            return Err(DataError::no_observations(
                &request.ticker,
                request.start,
                request.end,
            ));
        }
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use riskvar_core::PricePoint;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn source() -> InMemoryPriceSource {
        let points = (1..=10)
            .map(|day| PricePoint::from_close(d(day), 100.0 + f64::from(day)))
            .collect();
        InMemoryPriceSource::new().with_series(PriceSeries::new("XYZ", points).unwrap())
    }

    #[test]
    fn test_range_is_inclusive() {
        let request = PriceHistoryRequest::new("XYZ", d(3), d(5)).unwrap();
        let series = source().price_history(&request).unwrap();
        assert_eq!(series.closes(), vec![103.0, 104.0, 105.0]);
    }

    #[test]
    fn test_unknown_ticker_not_found() {
        let request = PriceHistoryRequest::new("NOPE", d(1), d(5)).unwrap();
        let err = source().price_history(&request).unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
    }

    #[test]
    fn test_empty_range_unavailable() {
        let request = PriceHistoryRequest::new("XYZ", d(20), d(25)).unwrap();
        let err = source().price_history(&request).unwrap_err();
        assert!(matches!(err, DataError::DataUnavailable(_)));
    }

    #[test]
    fn test_lowercase_request_matches() {
        let request = PriceHistoryRequest::new("xyz", d(1), d(2)).unwrap();
        assert_eq!(source().price_history(&request).unwrap().len(), 2);
        assert_eq!(source().tickers(), vec!["XYZ"]);
    }
}
