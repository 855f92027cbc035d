//! Aligned moving-average columns keyed by window length.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Window length → one optional value per input index.
///
/// A value is `None` at index `i` when fewer than `window` observations
/// exist up to and including `i`. Windows iterate in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovingAverageTable {
    columns: BTreeMap<usize, Vec<Option<f64>>>,
}

impl MovingAverageTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the column for `window`.
    pub fn insert(&mut self, window: usize, values: Vec<Option<f64>>) {
        self.columns.insert(window, values);
    }

    /// Column for `window`, if computed.
    pub fn get(&self, window: usize) -> Option<&[Option<f64>]> {
        self.columns.get(&window).map(Vec::as_slice)
    }

    /// Value at the last index of the column for `window`.
    pub fn latest(&self, window: usize) -> Option<f64> {
        self.columns
            .get(&window)
            .and_then(|col| col.last().copied().flatten())
    }

    /// Window lengths present, ascending.
    pub fn windows(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns.keys().copied()
    }

    /// Iterate over `(window, column)` pairs, ascending by window.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Option<f64>])> {
        self.columns.iter().map(|(w, col)| (*w, col.as_slice()))
    }

    /// Number of windows.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no windows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
