//! CSV price files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use dashmap::DashMap;
use serde::Deserialize;
use tracing::debug;

use riskvar_core::{
    DataError, DataResult, PriceHistoryProvider, PriceHistoryRequest, PricePoint, PriceSeries,
};

// =============================================================================
// CSV RECORD
// =============================================================================

/// One row of a price file.
///
/// Lower-case headers are canonical; the capitalised headers of common
/// vendor exports (`Date,Open,High,Low,Close,Adj Close,Volume`) are accepted
/// and extra columns are ignored. Unparseable cells such as `null` read as
/// missing.
#[derive(Debug, Deserialize)]
struct PriceRecord {
    #[serde(alias = "Date")]
    date: String,
    #[serde(default, alias = "Open", deserialize_with = "csv::invalid_option")]
    open: Option<f64>,
    #[serde(default, alias = "High", deserialize_with = "csv::invalid_option")]
    high: Option<f64>,
    #[serde(default, alias = "Low", deserialize_with = "csv::invalid_option")]
    low: Option<f64>,
    #[serde(default, alias = "Close", deserialize_with = "csv::invalid_option")]
    close: Option<f64>,
    #[serde(default, alias = "Volume", deserialize_with = "csv::invalid_option")]
    volume: Option<u64>,
}

impl PriceRecord {
    fn into_point(self, path: &Path) -> DataResult<PricePoint> {
        // Timestamped exports carry "2024-01-02 00:00:00-05:00"; the date prefix is enough.
        let raw = self.date.trim();
        let date = raw
            .get(..10)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .ok_or_else(|| {
                DataError::Parse(format!("{}: invalid date '{raw}'", path.display()))
            })?;

        // A missing close stays NaN so the return calculation can drop it.
        let close = self.close.unwrap_or(f64::NAN);
        Ok(PricePoint {
            date,
            open: self.open.unwrap_or(close),
            high: self.high.unwrap_or(close),
            low: self.low.unwrap_or(close),
            close,
            volume: self.volume,
        })
    }
}

/// Reads a whole price file into a date-ordered series.
pub fn read_price_file(ticker: &str, path: impl AsRef<Path>) -> DataResult<PriceSeries> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| DataError::Io(format!("{}: {e}", path.display())))?;

    let mut points = Vec::new();
    for result in reader.deserialize() {
        let record: PriceRecord =
            result.map_err(|e| DataError::Parse(format!("{}: {e}", path.display())))?;
        points.push(record.into_point(path)?);
    }

    PriceSeries::from_unsorted(ticker, points)
}

// =============================================================================
// CSV PRICE SOURCE
// =============================================================================

/// Price history read from a directory of `<TICKER>.csv` files.
///
/// Files are parsed on first use and cached by resolved path for the life of
/// the source, so `abc` and `ABC` share one entry. Call
/// [`CsvPriceSource::reload`] to pick up changes on disk.
#[derive(Debug)]
pub struct CsvPriceSource {
    data_dir: PathBuf,
    files: HashMap<String, PathBuf>,
    cache: DashMap<PathBuf, PriceSeries>,
}

impl CsvPriceSource {
    /// Create a source rooted at `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            files: HashMap::new(),
            cache: DashMap::new(),
        }
    }

    /// Serve `ticker` from an explicit file instead of the directory lookup.
    #[must_use]
    pub fn with_file(mut self, ticker: impl Into<String>, path: impl AsRef<Path>) -> Self {
        self.files.insert(ticker.into(), path.as_ref().to_path_buf());
        self
    }

    /// Directory searched for `<TICKER>.csv` files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Drop every cached series.
    pub fn reload(&self) {
        self.cache.clear();
    }

    /// Resolves the file backing `ticker`, trying the exact name then upper case.
    fn resolve(&self, ticker: &str) -> DataResult<PathBuf> {
        if let Some(path) = self.files.get(ticker) {
            return Ok(path.clone());
        }

        let upper = ticker.to_uppercase();
        [ticker, upper.as_str()]
            .iter()
            .map(|name| self.data_dir.join(format!("{name}.csv")))
            .find(|path| path.is_file())
            .ok_or_else(|| {
                DataError::NotFound(format!(
                    "no price file for ticker {ticker} in {}",
                    self.data_dir.display()
                ))
            })
    }

    fn load(&self, ticker: &str) -> DataResult<PriceSeries> {
        let path = self.resolve(ticker)?;
        if let Some(series) = self.cache.get(&path) {
            return Ok(series.clone());
        }

        let series = read_price_file(ticker, &path)?;
        debug!(ticker, path = %path.display(), rows = series.len(), "loaded price file");
        self.cache.insert(path, series.clone());
        Ok(series)
    }
}

impl PriceHistoryProvider for CsvPriceSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn price_history(&self, request: &PriceHistoryRequest) -> DataResult<PriceSeries> {
        let series = self
            .load(&request.ticker)?
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
