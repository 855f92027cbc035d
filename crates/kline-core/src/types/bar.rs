//! Daily (or resampled) OHLCV bar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading-period observation.
///
/// Prices are `f64` with two fractional digits once decoded. OHLC
/// ordering (`low <= open <= high` etc.) is not enforced since upstream
/// data may violate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Representative (closing) date of the period
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Total traded value
    pub amount: f64,
    /// Total traded units
    pub volume: u64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        amount: f64,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            amount,
            volume,
        }
    }
}

/// Extract close prices as a vector.
pub fn closes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

/// Extract volumes as a vector.
pub fn volumes(bars: &[Bar]) -> Vec<u64> {
    bars.iter().map(|b| b.volume).collect()
}
