//! Bar storage collaborators.

mod csv_store;
mod memory;

pub use csv_store::CsvStore;
pub use memory::MemoryStore;

use chrono::NaiveDate;
use kline_core::error::StoreError;
use kline_core::types::Bar;
use std::collections::BTreeMap;

/// Merge `incoming` into `existing`, replacing bars that share a date.
///
/// The result is ascending by date with one bar per date.
pub(crate) fn upsert_bars(existing: Vec<Bar>, incoming: &[Bar]) -> Vec<Bar> {
    let mut by_date: BTreeMap<NaiveDate, Bar> =
        existing.into_iter().map(|b| (b.date, b)).collect();
    for bar in incoming {
        by_date.insert(bar.date, *bar);
    }
    by_date.into_values().collect()
}

/// Reject codes that cannot serve as a single file name.
pub(crate) fn validate_code(code: &str) -> Result<(), StoreError> {
    let bad = code.is_empty()
        || code == "."
        || code.contains("..")
        || code.contains(['/', '\\', ':'])
        || code.chars().any(char::is_control);
    if bad {
        return Err(StoreError::InvalidCode(code.to_string()));
    }
    Ok(())
}
