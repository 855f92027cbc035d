//! K-line period definitions.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bar aggregation granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Period {
    /// Daily bars
    #[serde(rename = "1d", alias = "daily")]
    #[default]
    Daily,
    /// Weekly bars, grouped by ISO-8601 week
    #[serde(rename = "1w", alias = "weekly")]
    Weekly,
    /// Monthly bars, grouped by calendar month
    #[serde(rename = "1M", alias = "monthly")]
    Monthly,
}

/// Grouping key of a date within a period.
///
/// Ordering follows the calendar: ISO (year, week) for weekly groups,
/// (year, month) for monthly groups and the date itself for daily ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodKey {
    Day(NaiveDate),
    IsoWeek { year: i32, week: u32 },
    Month { year: i32, month: u32 },
}

impl Period {
    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
        }
    }

    /// Group key of `date` for this period.
    ///
    /// Weekly keys use ISO week numbering: a week belongs to the year
    /// containing its Thursday, so 2024-12-30 is in 2025-W01.
    pub fn group_key(&self, date: NaiveDate) -> PeriodKey {
        match self {
            Period::Daily => PeriodKey::Day(date),
            Period::Weekly => {
                let iso = date.iso_week();
                PeriodKey::IsoWeek {
                    year: iso.year(),
                    week: iso.week(),
                }
            }
            Period::Monthly => PeriodKey::Month {
                year: date.year(),
                month: date.month(),
            },
        }
    }

    /// Get all available periods.
    pub fn all() -> &'static [Period] {
        &[Period::Daily, Period::Weekly, Period::Monthly]
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::Daily => "1d",
            Period::Weekly => "1w",
            Period::Monthly => "1M",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only "1M" means month; "1m" is rejected.
        if s == "1M" {
            return Ok(Period::Monthly);
        }
        match s.to_lowercase().as_str() {
            "1d" | "d" | "day" | "daily" => Ok(Period::Daily),
            "1w" | "w" | "week" | "weekly" => Ok(Period::Weekly),
            "month" | "monthly" => Ok(Period::Monthly),
            _ => Err(format!("Invalid period: {}", s)),
        }
    }
}
