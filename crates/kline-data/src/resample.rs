//! Daily → weekly/monthly bar aggregation.

use kline_core::types::{Bar, Period, PeriodKey};
use std::collections::BTreeMap;

/// Aggregate a date-ascending daily series into `period` bars.
///
/// Within a group the result takes the first member's open, the last
/// member's close and date, the extreme high/low and summed amount and
/// volume. Groups come out in ascending key order.
///
/// The input must already be sorted by date; unsorted input still groups
/// but open/close selection then follows encounter order.
pub fn resample(daily: &[Bar], period: Period) -> Vec<Bar> {
    if period == Period::Daily {
        return daily.to_vec();
    }

    let mut groups: BTreeMap<PeriodKey, Bar> = BTreeMap::new();
    for bar in daily {
        groups
            .entry(period.group_key(bar.date))
            .and_modify(|agg| merge(agg, bar))
            .or_insert(*bar);
    }

    groups.into_values().collect()
}

fn merge(agg: &mut Bar, bar: &Bar) {
    agg.date = bar.date;
    agg.high = agg.high.max(bar.high);
    agg.low = agg.low.min(bar.low);
    agg.close = bar.close;
    agg.amount += bar.amount;
    agg.volume += bar.volume;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bar(date: NaiveDate, o: f64, h: f64, l: f64, c: f64, volume: u64) -> Bar {
        Bar::new(date, o, h, l, c, volume as f64 * 10.0, volume)
    }

    #[test]
    fn test_daily_is_identity() {
        let bars = vec![
            bar(date(2024, 1, 2), 10.0, 11.0, 9.0, 10.5, 100),
            bar(date(2024, 1, 3), 11.0, 12.0, 10.0, 11.5, 200),
        ];
        assert_eq!(resample(&bars, Period::Daily), bars);
    }

    #[test]
    fn test_weekly_aggregation() {
        // 2024-01-02..04 are all in ISO week 2024-W01.
        let bars = vec![
            bar(date(2024, 1, 2), 10.0, 11.0, 9.0, 10.5, 100),
            bar(date(2024, 1, 3), 11.0, 12.0, 10.0, 11.5, 200),
            bar(date(2024, 1, 4), 12.0, 13.0, 8.0, 9.0, 300),
        ];

        let weekly = resample(&bars, Period::Weekly);
        assert_eq!(weekly.len(), 1);

        let w = weekly[0];
        assert_eq!(w.date, date(2024, 1, 4));
        assert_eq!(w.open, 10.0);
        assert_eq!(w.close, 9.0);
        assert_eq!(w.high, 13.0);
        assert_eq!(w.low, 8.0);
        assert_eq!(w.volume, 600);
        assert_eq!(w.amount, 6000.0);
    }

    #[test]
    fn test_weekly_iso_year_boundary() {
        let bars = vec![
            bar(date(2024, 12, 27), 1.0, 1.0, 1.0, 1.0, 1), // 2024-W52
            bar(date(2024, 12, 30), 2.0, 2.0, 2.0, 2.0, 2), // 2025-W01
            bar(date(2024, 12, 31), 3.0, 3.0, 3.0, 3.0, 3), // 2025-W01
            bar(date(2025, 1, 2), 4.0, 4.0, 4.0, 4.0, 4),   // 2025-W01
            bar(date(2025, 1, 6), 5.0, 5.0, 5.0, 5.0, 5),   // 2025-W02
        ];

        let weekly = resample(&bars, Period::Weekly);
        let summary: Vec<(NaiveDate, f64, f64, u64)> = weekly
            .iter()
            .map(|b| (b.date, b.open, b.close, b.volume))
            .collect();

        assert_eq!(
            summary,
            vec![
                (date(2024, 12, 27), 1.0, 1.0, 1),
                (date(2025, 1, 2), 2.0, 4.0, 9),
                (date(2025, 1, 6), 5.0, 5.0, 5),
            ]
        );
    }

    #[test]
    fn test_monthly_aggregation() {
        let bars = vec![
            bar(date(2023, 12, 28), 9.0, 9.5, 8.5, 9.2, 10),
            bar(date(2023, 12, 29), 9.2, 9.9, 9.1, 9.8, 20),
            bar(date(2024, 1, 2), 9.8, 10.5, 9.7, 10.1, 30),
            bar(date(2024, 1, 31), 10.1, 10.2, 7.5, 8.0, 40),
            bar(date(2024, 2, 1), 8.0, 8.1, 7.9, 8.05, 50),
        ];

        let monthly = resample(&bars, Period::Monthly);
        assert_eq!(monthly.len(), 3);

        assert_eq!(monthly[0].date, date(2023, 12, 29));
        assert_eq!(monthly[0].volume, 30);

        let jan = monthly[1];
        assert_eq!(jan.date, date(2024, 1, 31));
        assert_eq!(jan.open, 9.8);
        assert_eq!(jan.close, 8.0);
        assert_eq!(jan.high, 10.5);
        assert_eq!(jan.low, 7.5);
        assert_eq!(jan.volume, 70);

        assert_eq!(monthly[2].date, date(2024, 2, 1));
    }

    #[test]
    fn test_groups_emitted_in_key_order() {
        // Encounter order Feb, Jan; output must still be Jan, Feb.
        let bars = vec![
            bar(date(2024, 2, 5), 2.0, 2.0, 2.0, 2.0, 2),
            bar(date(2024, 1, 5), 1.0, 1.0, 1.0, 1.0, 1),
        ];

        let monthly = resample(&bars, Period::Monthly);
        assert_eq!(monthly[0].date, date(2024, 1, 5));
        assert_eq!(monthly[1].date, date(2024, 2, 5));
    }

    #[test]
    fn test_empty_input() {
        for period in Period::all() {
            assert!(resample(&[], *period).is_empty());
        }
    }

    #[test]
    fn test_deterministic() {
        let bars: Vec<Bar> = (0..60)
            .map(|i| {
                let d = date(2024, 1, 1) + chrono::Days::new(i);
                bar(d, 10.0 + i as f64, 11.0 + i as f64, 9.0, 10.5, i + 1)
            })
            .collect();

        assert_eq!(
            resample(&bars, Period::Weekly),
            resample(&bars, Period::Weekly)
        );
    }
}
