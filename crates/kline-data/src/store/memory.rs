//! In-memory bar store.

use chrono::Utc;
use kline_core::error::StoreError;
use kline_core::traits::BarStore;
use kline_core::types::{Bar, KnownInstrument};
use std::collections::HashMap;

use super::upsert_bars;

/// Simple in-memory bar store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    bars: HashMap<String, Vec<Bar>>,
    instruments: HashMap<String, KnownInstrument>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything stored for a code.
    pub fn clear(&mut self, code: &str) {
        self.bars.remove(code);
        self.instruments.remove(code);
    }

    /// Drop all stored data.
    pub fn clear_all(&mut self) {
        self.bars.clear();
        self.instruments.clear();
    }
}

impl BarStore for MemoryStore {
    fn load(&self, code: &str) -> Result<Option<Vec<Bar>>, StoreError> {
        Ok(self
            .bars
            .get(code)
            .filter(|bars| !bars.is_empty())
            .cloned())
    }

    fn save(&mut self, code: &str, bars: &[Bar], source: &str) -> Result<(), StoreError> {
        let existing = self.bars.remove(code).unwrap_or_default();
        self.bars.insert(code.to_string(), upsert_bars(existing, bars));
        self.instruments.insert(
            code.to_string(),
            KnownInstrument {
                code: code.to_string(),
                source: source.to_string(),
                updated_at: Utc::now(),
            },
        );
        Ok(())
    }

    fn list_known_codes(&self) -> Result<Vec<KnownInstrument>, StoreError> {
        let mut known: Vec<KnownInstrument> = self.instruments.values().cloned().collect();
        known.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.code.cmp(&b.code)));
        Ok(known)
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(d: u32) -> Bar {
        let date = NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        Bar::new(date, 1.0, 1.0, 1.0, 1.0, 0.0, d as u64)
    }

    #[test]
    fn test_load_missing() {
        let store = MemoryStore::new();
        assert!(store.load("sz000001").unwrap().is_none());
        assert!(store.list_known_codes().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        store.save("sz000001", &[bar(5), bar(4)], "a.day").unwrap();
        store.save("sz000001", &[bar(6)], "b.day").unwrap();

        let bars = store.load("sz000001").unwrap().unwrap();
        let volumes: Vec<u64> = bars.iter().map(|b| b.volume).collect();
        assert_eq!(volumes, vec![4, 5, 6]);

        let known = store.list_known_codes().unwrap();
        assert_eq!(known.len(), 1);
        assert_eq!(known[0].source, "b.day");
    }

    #[test]
    fn test_clear() {
        let mut store = MemoryStore::new();
        store.save("sz000001", &[bar(4)], "").unwrap();
        store.save("sh600000", &[bar(4)], "").unwrap();

        store.clear("sz000001");
        assert!(store.load("sz000001").unwrap().is_none());
        assert!(store.load("sh600000").unwrap().is_some());

        store.clear_all();
        assert!(store.list_known_codes().unwrap().is_empty());
    }
}
