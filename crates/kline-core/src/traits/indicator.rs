//! Indicator trait definitions.

/// Trait for technical indicators over a numeric series.
///
/// Output is aligned with the input: one value per input index, `None`
/// until the indicator has enough history.
pub trait Indicator: Send + Sync {
    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically close prices or volumes)
    ///
    /// # Returns
    /// A vector with the same length as `data`
    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>>;

    /// Get the number of observations needed for the first value.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestIndicator {
        period: usize,
    }

    impl Indicator for TestIndicator {
        fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
            // Trailing sum, for testing
            (0..data.len())
                .map(|i| {
                    (i + 1 >= self.period)
                        .then(|| data[i + 1 - self.period..=i].iter().sum::<f64>())
                })
                .collect()
        }

        fn period(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_indicator_calculate() {
        let indicator = TestIndicator { period: 3 };
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = indicator.calculate(&data);

        assert_eq!(result.len(), 5);
        assert!(result[0].is_none() && result[1].is_none());
        assert_eq!(result[2], Some(6.0)); // 1+2+3
        assert_eq!(result[4], Some(12.0)); // 3+4+5
        assert_eq!(indicator.period(), 3);
    }
}
