//! # riskvar Ext File
//!
//! File-based and in-memory price history for the riskvar engine.
//!
//! This crate provides default [`PriceHistoryProvider`] implementations for
//! offline runs, EOD loads and tests:
//! - [`CsvPriceSource`]: one `<TICKER>.csv` file of daily bars per ticker
//! - [`InMemoryPriceSource`]: series registered directly in memory
//!
//! For live market data, implement [`PriceHistoryProvider`] against the
//! vendor API of your choice.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod csv_source;
mod memory;

pub use csv_source::*;
pub use memory::*;

use std::path::Path;
use std::sync::Arc;

use riskvar_core::PriceHistoryProvider;

/// Create a CSV-backed price history provider rooted at `data_dir`.
pub fn create_file_provider(data_dir: impl AsRef<Path>) -> Arc<dyn PriceHistoryProvider> {
    Arc::new(CsvPriceSource::new(data_dir))
}
