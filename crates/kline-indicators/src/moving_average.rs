//! Simple moving averages.

use kline_core::traits::Indicator;
use kline_core::types::MovingAverageTable;
use num_traits::ToPrimitive;

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    ///
    /// # Panics
    /// A zero period is a caller contract violation.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Sma {
    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() < self.period {
            return result;
        }

        let period_f64 = self.period as f64;

        // Initial sum
        let mut sum: f64 = data[..self.period].iter().sum();
        result[self.period - 1] = Some(sum / period_f64);

        // Sliding window
        for i in self.period..data.len() {
            sum = sum - data[i - self.period] + data[i];
            result[i] = Some(sum / period_f64);
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Compute one SMA column per distinct window over `series`.
///
/// Values are converted to `f64` before averaging; callers must supply
/// finite inputs. Windows longer than the series yield all-`None` columns.
///
/// # Panics
/// Panics if any window is zero.
pub fn moving_averages<T>(series: &[T], windows: &[usize]) -> MovingAverageTable
where
    T: ToPrimitive + Copy,
{
    let data: Vec<f64> = series
        .iter()
        .map(|v| v.to_f64().unwrap_or(f64::NAN))
        .collect();

    let mut table = MovingAverageTable::new();
    for &window in windows {
        if table.get(window).is_some() {
            continue;
        }
        table.insert(window, Sma::new(window).calculate(&data));
    }
    table
}

/// Reference windowed mean, recomputing each window from scratch.
///
/// O(n·w); used to cross-check [`Sma`] in tests and benchmarks.
pub fn naive_moving_average(data: &[f64], window: usize) -> Vec<Option<f64>> {
    assert!(window > 0, "Period must be greater than 0");
    (0..data.len())
        .map(|i| {
            (i + 1 >= window)
                .then(|| data[i + 1 - window..=i].iter().sum::<f64>() / window as f64)
        })
        .collect()
}
