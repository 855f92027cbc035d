//! Text and JSON rendering of a view.

use chrono::NaiveDate;
use kline_core::types::{Bar, MovingAverageTable, Period, View};
use serde::{Deserialize, Serialize};

/// Latest value of one moving-average window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestAverage {
    pub window: usize,
    pub value: Option<f64>,
}

/// Snapshot of a view for one instrument and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewReport {
    pub code: String,
    pub period: Period,
    pub bar_count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub last_bar: Option<Bar>,
    pub price_ma: Vec<LatestAverage>,
    pub volume_ma: Vec<LatestAverage>,
    /// Trailing bars included for display
    pub tail: Vec<Bar>,
}

fn latest_values(table: &MovingAverageTable) -> Vec<LatestAverage> {
    table
        .windows()
        .map(|window| LatestAverage {
            window,
            value: table.latest(window),
        })
        .collect()
}

impl ViewReport {
    /// Summarize `view`, keeping the last `tail` bars.
    pub fn new(code: &str, period: Period, view: &View, tail: usize) -> Self {
        let start = view.bars.len().saturating_sub(tail);
        Self {
            code: code.to_string(),
            period,
            bar_count: view.bars.len(),
            first_date: view.bars.first().map(|b| b.date),
            last_date: view.bars.last().map(|b| b.date),
            last_bar: view.last().copied(),
            price_ma: latest_values(&view.price_ma),
            volume_ma: latest_values(&view.volume_ma),
            tail: view.bars[start..].to_vec(),
        }
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str(&format!("  {} - {} K-line\n", self.code, self.period.label()));
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        let Some(last) = &self.last_bar else {
            s.push_str("  No data\n");
            return s;
        };

        s.push_str("SERIES\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Bars:                {}\n", self.bar_count));
        if let (Some(first), Some(last_date)) = (self.first_date, self.last_date) {
            s.push_str(&format!("  Range:               {} .. {}\n", first, last_date));
        }
        s.push('\n');

        s.push_str("LAST BAR\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Date:                {}\n", last.date));
        s.push_str(&format!("  Open:                {:.2}\n", last.open));
        s.push_str(&format!("  High:                {:.2}\n", last.high));
        s.push_str(&format!("  Low:                 {:.2}\n", last.low));
        s.push_str(&format!("  Close:               {:.2}\n", last.close));
        s.push_str(&format!("  Amount:              {:.0}\n", last.amount));
        s.push('\n');

        s.push_str("PRICE MA\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        for ma in &self.price_ma {
            let label = format!("Ma{}:", ma.window);
            let value = ma.value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v));
            s.push_str(&format!("  {:<21}{}\n", label, value));
        }
        s.push('\n');

        s.push_str("VOLUME\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  {:<21}{}\n", "VOL:", last.volume));
        for ma in &self.volume_ma {
            let label = format!("Ma{}:", ma.window);
            let value = ma
                .value
                .map_or_else(|| "-".to_string(), |v| format!("{}", v.trunc() as u64));
            s.push_str(&format!("  {:<21}{}\n", label, value));
        }

        if !self.tail.is_empty() {
            s.push('\n');
            s.push_str("RECENT BARS\n");
            s.push_str("───────────────────────────────────────────────────────────\n");
            s.push_str("  date            open      high       low     close        volume\n");
            for bar in &self.tail {
                s.push_str(&format!(
                    "  {}  {:>8.2}  {:>8.2}  {:>8.2}  {:>8.2}  {:>12}\n",
                    bar.date, bar.open, bar.high, bar.low, bar.close, bar.volume
                ));
            }
        }

        s
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
