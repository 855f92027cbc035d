//! Memoized views per (instrument code, period).

use kline_core::types::{Bar, Period, View};
use std::collections::HashMap;
use tracing::debug;

use crate::pipeline::SeriesPipeline;

/// Holds each code's daily series and the views built from it.
///
/// Views are pure functions of (series, period, windows), so a cached view
/// stays valid until a new series is installed for the code.
#[derive(Debug, Default)]
pub struct ViewCache {
    pipeline: SeriesPipeline,
    series: HashMap<String, Vec<Bar>>,
    views: HashMap<(String, Period), View>,
}

impl ViewCache {
    /// Create a cache that builds views with `pipeline`.
    pub fn new(pipeline: SeriesPipeline) -> Self {
        Self {
            pipeline,
            series: HashMap::new(),
            views: HashMap::new(),
        }
    }

    /// Replace the daily series for `code`, dropping its cached views.
    pub fn install(&mut self, code: &str, daily: Vec<Bar>) {
        self.invalidate(code);
        self.series.insert(code.to_string(), daily);
    }

    /// Daily series installed for `code`.
    pub fn series(&self, code: &str) -> Option<&[Bar]> {
        self.series.get(code).map(Vec::as_slice)
    }

    /// View of `code` at `period`, built on first request.
    ///
    /// Returns `None` if no series is installed for `code`.
    pub fn view(&mut self, code: &str, period: Period) -> Option<&View> {
        let daily = self.series.get(code)?;
        let key = (code.to_string(), period);
        if !self.views.contains_key(&key) {
            debug!(code, %period, "Building view");
            let view = self.pipeline.run(daily, period);
            self.views.insert(key.clone(), view);
        }
        self.views.get(&key)
    }

    /// Drop cached views for `code`, keeping its series.
    pub fn invalidate(&mut self, code: &str) {
        self.views.retain(|(c, _), _| c != code);
    }

    /// Drop everything.
    pub fn clear_all(&mut self) {
        self.series.clear();
        self.views.clear();
    }

    /// Number of cached views.
    pub fn cached_views(&self) -> usize {
        self.views.len()
    }
}
