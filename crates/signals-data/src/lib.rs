//! OHLCV bar loading.
//!
//! The indicator and scoring crates assume bars arrive ordered ascending by
//! timestamp with no duplicates; this crate is the layer that guarantees it.

mod csv_source;

pub use csv_source::CsvBarSource;

use signals_core::error::DataError;
use signals_core::types::{BarSeries, Timeframe};
use std::path::Path;

/// Load a bar series from a CSV file.
pub fn load_csv(
    path: impl AsRef<Path>,
    symbol: &str,
    timeframe: Timeframe,
) -> Result<BarSeries, DataError> {
    CsvBarSource::new(path)?.load(symbol, timeframe)
}
