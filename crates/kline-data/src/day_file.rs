//! `.day` binary daily-bar records.
//!
//! A `.day` file is a flat array of 32-byte little-endian records:
//!
//! | offset | field    | type  | meaning                  |
//! |--------|----------|-------|--------------------------|
//! | 0      | date     | u32   | `YYYYMMDD`               |
//! | 4      | open     | i32   | price × 1000             |
//! | 8      | high     | i32   | price × 1000             |
//! | 12     | low      | i32   | price × 1000             |
//! | 16     | close    | i32   | price × 1000             |
//! | 20     | amount   | f32   | traded value             |
//! | 24     | volume   | u32   | traded units             |
//! | 28     | reserved | u32   | unused                   |
//!
//! Records whose date is outside 1990..=2100 or is not a calendar date are
//! skipped rather than failing the decode; trailing padding records in
//! these files look exactly like that.

use chrono::NaiveDate;
use kline_core::error::DecodeError;
use kline_core::types::Bar;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::path::Path;
use tracing::debug;

/// Size of one record in bytes.
pub const RECORD_SIZE: usize = 32;

/// Lowest accepted date integer.
pub const MIN_DATE: u32 = 1990_01_01;

/// Highest accepted date integer.
pub const MAX_DATE: u32 = 2100_12_31;

/// One raw record, fields as stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRecord {
    pub date: u32,
    pub open: i32,
    pub high: i32,
    pub low: i32,
    pub close: i32,
    pub amount: f32,
    pub volume: u32,
    pub reserved: u32,
}

impl DayRecord {
    /// Parse a record from exactly [`RECORD_SIZE`] bytes.
    pub fn from_bytes(buf: &[u8; RECORD_SIZE]) -> Self {
        let word = |i: usize| [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]];
        Self {
            date: u32::from_le_bytes(word(0)),
            open: i32::from_le_bytes(word(4)),
            high: i32::from_le_bytes(word(8)),
            low: i32::from_le_bytes(word(12)),
            close: i32::from_le_bytes(word(16)),
            amount: f32::from_le_bytes(word(20)),
            volume: u32::from_le_bytes(word(24)),
            reserved: u32::from_le_bytes(word(28)),
        }
    }

    /// Serialize the record in file layout.
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        out[0..4].copy_from_slice(&self.date.to_le_bytes());
        out[4..8].copy_from_slice(&self.open.to_le_bytes());
        out[8..12].copy_from_slice(&self.high.to_le_bytes());
        out[12..16].copy_from_slice(&self.low.to_le_bytes());
        out[16..20].copy_from_slice(&self.close.to_le_bytes());
        out[20..24].copy_from_slice(&self.amount.to_le_bytes());
        out[24..28].copy_from_slice(&self.volume.to_le_bytes());
        out[28..32].copy_from_slice(&self.reserved.to_le_bytes());
        out
    }

    /// Calendar date of the record, if `date` is a valid `YYYYMMDD`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let year = (self.date / 10_000) as i32;
        let month = (self.date / 100) % 100;
        let day = self.date % 100;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Convert to a bar with an already validated date.
    fn to_bar(self, date: NaiveDate) -> Bar {
        Bar {
            date,
            open: scaled_price(self.open),
            high: scaled_price(self.high),
            low: scaled_price(self.low),
            close: scaled_price(self.close),
            amount: whole_amount(self.amount),
            volume: u64::from(self.volume),
        }
    }
}

/// `raw / 1000.0` as a double, rounded to two decimals half to even.
///
/// Rounding works on the exact value of the double quotient, so `12_345`
/// (stored as 12.3450000000000006...) gives 12.35 while the exact tie
/// `10_125` gives 10.12.
pub(crate) fn price_decimal(raw: i32) -> Decimal {
    // Finite for every i32 input.
    let quotient = Decimal::from_f64_retain(f64::from(raw) / 1000.0).unwrap_or(Decimal::ZERO);
    let mut price = quotient.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    price.rescale(2);
    price
}

fn scaled_price(raw: i32) -> f64 {
    // Exact integer hundredths divided once, so the result is the closest f64.
    price_decimal(raw).mantissa() as f64 / 100.0
}

/// Traded value rounded to a whole unit, half to even.
fn whole_amount(amount: f32) -> f64 {
    let value = f64::from(amount);
    // Values beyond the Decimal range are already integral.
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Counters from one decode pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Records in the buffer
    pub records: usize,
    /// Records turned into bars
    pub decoded: usize,
    /// Records dropped for an out-of-range or invalid date
    pub skipped: usize,
}

/// Decoder for `.day` buffers.
#[derive(Debug, Clone)]
pub struct DayDecoder {
    min_date: u32,
    max_date: u32,
}

impl Default for DayDecoder {
    fn default() -> Self {
        Self {
            min_date: MIN_DATE,
            max_date: MAX_DATE,
        }
    }
}

impl DayDecoder {
    /// Create a decoder with the standard 1990..=2100 date bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a buffer into bars, in buffer order.
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<Bar>, DecodeError> {
        self.decode_with_stats(bytes).map(|(bars, _)| bars)
    }

    /// Decode a buffer and report how many records were skipped.
    pub fn decode_with_stats(&self, bytes: &[u8]) -> Result<(Vec<Bar>, DecodeStats), DecodeError> {
        if bytes.len() % RECORD_SIZE != 0 {
            return Err(DecodeError::MalformedLength {
                len: bytes.len(),
                record_size: RECORD_SIZE,
            });
        }

        let records = bytes.len() / RECORD_SIZE;
        let mut bars = Vec::with_capacity(records);

        for chunk in bytes.chunks_exact(RECORD_SIZE) {
            let buf: &[u8; RECORD_SIZE] = chunk
                .try_into()
                .expect("chunks_exact yields RECORD_SIZE slices");
            let record = DayRecord::from_bytes(buf);
            if record.date < self.min_date || record.date > self.max_date {
                continue;
            }
            let Some(date) = record.calendar_date() else {
                continue;
            };
            bars.push(record.to_bar(date));
        }

        let stats = DecodeStats {
            records,
            decoded: bars.len(),
            skipped: records - bars.len(),
        };
        debug!(
            records = stats.records,
            decoded = stats.decoded,
            skipped = stats.skipped,
            "Decoded .day buffer"
        );

        Ok((bars, stats))
    }
}

/// Decode a `.day` buffer with the default decoder.
pub fn decode(bytes: &[u8]) -> Result<Vec<Bar>, DecodeError> {
    DayDecoder::new().decode(bytes)
}

/// Read and decode a `.day` file.
pub fn read_day_file(path: impl AsRef<Path>) -> Result<Vec<Bar>, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| DecodeError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&bytes)
}
