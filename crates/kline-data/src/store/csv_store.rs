//! CSV-file bar store.
//!
//! Layout under the store directory:
//! - `instruments.csv`: code, source, updated_at
//! - `bars/<code>.csv`: date, open, high, low, close, amount, volume

use chrono::Utc;
use csv::{ReaderBuilder, Writer};
use kline_core::error::StoreError;
use kline_core::traits::BarStore;
use kline_core::types::{Bar, KnownInstrument};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{upsert_bars, validate_code};

const INDEX_FILE: &str = "instruments.csv";
const BARS_DIR: &str = "bars";

/// Bar store persisted as CSV files in a directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    root: PathBuf,
}

impl CsvStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(root.join(BARS_DIR))?;
        debug!(root = %root.display(), "Opened CSV bar store");
        Ok(Self { root })
    }

    /// Store directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn bars_path(&self, code: &str) -> PathBuf {
        self.root.join(BARS_DIR).join(format!("{}.csv", code))
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    fn read_index(&self) -> Result<Vec<KnownInstrument>, StoreError> {
        let path = self.index_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        read_rows(&path).map_err(|e| corrupt(INDEX_FILE, e))
    }
}

impl BarStore for CsvStore {
    fn load(&self, code: &str) -> Result<Option<Vec<Bar>>, StoreError> {
        validate_code(code)?;
        let path = self.bars_path(code);
        if !path.exists() {
            return Ok(None);
        }

        let mut bars: Vec<Bar> = read_rows(&path).map_err(|e| corrupt(code, e))?;
        if bars.is_empty() {
            return Ok(None);
        }
        bars.sort_by_key(|b| b.date);

        debug!(code, bars = bars.len(), "Loaded bars from CSV store");
        Ok(Some(bars))
    }

    fn save(&mut self, code: &str, bars: &[Bar], source: &str) -> Result<(), StoreError> {
        validate_code(code)?;

        let existing = self.load(code)?.unwrap_or_default();
        let merged = upsert_bars(existing, bars);
        write_rows(&self.bars_path(code), &merged)?;

        let mut index = self.read_index()?;
        index.retain(|k| k.code != code);
        index.push(KnownInstrument {
            code: code.to_string(),
            source: source.to_string(),
            updated_at: Utc::now(),
        });
        write_rows(&self.index_path(), &index)?;

        info!(code, saved = bars.len(), total = merged.len(), "Saved bars");
        Ok(())
    }

    fn list_known_codes(&self) -> Result<Vec<KnownInstrument>, StoreError> {
        let mut known = self.read_index()?;
        known.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.code.cmp(&b.code)));
        Ok(known)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

fn corrupt(code: &str, e: csv::Error) -> StoreError {
    StoreError::Corrupt {
        code: code.to_string(),
        reason: e.to_string(),
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, csv::Error> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    reader.deserialize().collect()
}

/// Write rows to a sibling temp file, then rename over `path`.
fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), StoreError> {
    let tmp = path.with_extension("csv.tmp");
    {
        let mut writer = Writer::from_path(&tmp).map_err(|e| StoreError::Csv(e.to_string()))?;
        for row in rows {
            writer
                .serialize(row)
                .map_err(|e| StoreError::Csv(e.to_string()))?;
        }
        writer.flush()?;
    }
    std::fs::rename(&tmp, path)?;
    Ok(())
}
