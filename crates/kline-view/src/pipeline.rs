//! Resample-then-average composition.

use kline_core::types::{closes, volumes, Bar, Period, View};
use kline_data::resample;
use kline_indicators::moving_averages;
use serde::{Deserialize, Serialize};

/// Price moving-average windows shown by default.
pub const DEFAULT_PRICE_MA_PERIODS: [usize; 10] = [5, 10, 20, 30, 40, 50, 60, 90, 120, 240];

/// Volume moving-average windows shown by default.
pub const DEFAULT_VOLUME_MA_PERIODS: [usize; 6] = [5, 10, 20, 30, 60, 90];

/// Build the view of `raw_daily` for `period`.
///
/// `raw_daily` must be ascending by date. An empty input yields
/// [`View::empty`], which callers treat as "nothing to display".
///
/// # Panics
/// Panics if any window is zero.
pub fn build_view(
    raw_daily: &[Bar],
    period: Period,
    price_windows: &[usize],
    volume_windows: &[usize],
) -> View {
    if raw_daily.is_empty() {
        return View::empty();
    }

    let bars = resample(raw_daily, period);
    let price_ma = moving_averages(&closes(&bars), price_windows);
    let volume_ma = moving_averages(&volumes(&bars), volume_windows);

    View {
        bars,
        price_ma,
        volume_ma,
    }
}

/// Window sets applied on every view build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPipeline {
    price_windows: Vec<usize>,
    volume_windows: Vec<usize>,
}

impl Default for SeriesPipeline {
    fn default() -> Self {
        Self::new(
            DEFAULT_PRICE_MA_PERIODS.to_vec(),
            DEFAULT_VOLUME_MA_PERIODS.to_vec(),
        )
    }
}

impl SeriesPipeline {
    /// Create a pipeline with the given window sets.
    ///
    /// # Panics
    /// Panics if any window is zero.
    pub fn new(price_windows: Vec<usize>, volume_windows: Vec<usize>) -> Self {
        assert!(
            price_windows.iter().chain(&volume_windows).all(|&w| w > 0),
            "Period must be greater than 0"
        );
        Self {
            price_windows,
            volume_windows,
        }
    }

    /// Price windows.
    pub fn price_windows(&self) -> &[usize] {
        &self.price_windows
    }

    /// Volume windows.
    pub fn volume_windows(&self) -> &[usize] {
        &self.volume_windows
    }

    /// Build the view of `raw_daily` for `period`.
    pub fn run(&self, raw_daily: &[Bar], period: Period) -> View {
        build_view(raw_daily, period, &self.price_windows, &self.volume_windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn daily(n: u64) -> Vec<Bar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..n)
            .map(|i| {
                let close = 10.0 + i as f64;
                Bar::new(start + Days::new(i), close, close + 1.0, close - 1.0, close, 0.0, (i + 1) * 100)
            })
            .collect()
    }

    #[test]
    fn test_empty_view() {
        for period in Period::all() {
            let view = build_view(&[], *period, &[5, 10], &[5]);
            assert!(view.is_empty());
            assert!(view.price_ma.is_empty());
            assert!(view.volume_ma.is_empty());
            assert_eq!(view, View::empty());
        }
    }

    #[test]
    fn test_daily_view() {
        let bars = daily(5);
        let view = build_view(&bars, Period::Daily, &[3, 6], &[5]);

        assert_eq!(view.bars, bars);
        assert_eq!(
            view.price_ma.get(3).unwrap(),
            &[None, None, Some(11.0), Some(12.0), Some(13.0)]
        );
        assert!(view.price_ma.get(6).unwrap().iter().all(Option::is_none));
        assert_eq!(view.volume_ma.latest(5), Some(300.0));
    }

    #[test]
    fn test_weekly_view_aligned() {
        // 2024-01-01 is a Monday: 21 days span three ISO weeks.
        let view = build_view(&daily(21), Period::Weekly, &[2], &[2]);

        assert_eq!(view.bars.len(), 3);
        for (_, column) in view.price_ma.iter().chain(view.volume_ma.iter()) {
            assert_eq!(column.len(), view.bars.len());
        }
        // Weekly closes are 16, 23, 30
        assert_eq!(view.price_ma.get(2).unwrap(), &[None, Some(19.5), Some(26.5)]);
        // Weekly volumes: 2800, 7700, 12600
        assert_eq!(view.volume_ma.latest(2), Some(10150.0));
    }

    #[test]
    fn test_pipeline_defaults() {
        let pipeline = SeriesPipeline::default();
        let view = pipeline.run(&daily(30), Period::Daily);

        assert_eq!(view.price_ma.len(), DEFAULT_PRICE_MA_PERIODS.len());
        assert_eq!(view.volume_ma.len(), DEFAULT_VOLUME_MA_PERIODS.len());
        assert!(view.price_ma.latest(30).is_some());
        assert!(view.price_ma.latest(40).is_none());
    }

    #[test]
    #[should_panic(expected = "Period must be greater than 0")]
    fn test_zero_window_rejected() {
        SeriesPipeline::new(vec![5, 0], vec![5]);
    }

    #[test]
    fn test_deterministic() {
        let bars = daily(200);
        let pipeline = SeriesPipeline::default();
        assert_eq!(
            pipeline.run(&bars, Period::Monthly),
            pipeline.run(&bars, Period::Monthly)
        );
    }
}
