//! Presentation-ready bundle of bars and derived averages.

use serde::{Deserialize, Serialize};

use super::{Bar, MovingAverageTable};

/// Bars for one period plus price and volume moving averages.
///
/// Every column of both tables has exactly `bars.len()` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub bars: Vec<Bar>,
    pub price_ma: MovingAverageTable,
    pub volume_ma: MovingAverageTable,
}

impl View {
    /// A view with nothing to display.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if there are no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Last bar, if any.
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }
}
