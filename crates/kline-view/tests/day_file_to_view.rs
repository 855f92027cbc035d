//! `.day` file → store → weekly view, end to end.

use chrono::{Datelike, Days, NaiveDate};
use kline_core::traits::BarStore;
use kline_core::types::Period;
use kline_data::{import_day_file, load_instrument, CsvStore, DayDirectory, DayRecord};
use kline_view::{build_view, ViewReport};

/// Weekdays from 2024-01-01 (a Monday), four weeks.
fn weekday_dates() -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..28)
        .map(|i| start + Days::new(i))
        .filter(|d| d.weekday().number_from_monday() <= 5)
        .collect()
}

fn day_bytes(dates: &[NaiveDate]) -> Vec<u8> {
    let mut bytes: Vec<u8> = dates
        .iter()
        .enumerate()
        .flat_map(|(i, d)| {
            let price = 10_000 + i as i32 * 100;
            DayRecord {
                date: d.year() as u32 * 10_000 + d.month() * 100 + d.day(),
                open: price,
                high: price + 500,
                low: price - 500,
                close: price + 50,
                amount: 1_000_000.0,
                volume: 1_000,
                reserved: 0,
            }
            .to_bytes()
        })
        .collect();
    // Trailing padding record, skipped by the decoder
    bytes.extend_from_slice(&[0u8; 32]);
    bytes
}

#[test]
fn weekly_view_from_imported_file() {
    let source = tempfile::tempdir().unwrap();
    let store_dir = tempfile::tempdir().unwrap();
    let path = source.path().join("sz000001.day");
    std::fs::write(&path, day_bytes(&weekday_dates())).unwrap();

    let mut store = CsvStore::open(store_dir.path()).unwrap();
    let summary = import_day_file(&mut store, &path).unwrap();
    assert_eq!(summary.bars, 20);

    let daily = store.load("sz000001").unwrap().unwrap();
    let view = build_view(&daily, Period::Weekly, &[2, 5], &[2]);

    assert_eq!(view.bars.len(), 4);
    let first = view.bars[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    assert_eq!(first.open, 10.0);
    assert_eq!(first.close, 10.45);
    assert_eq!(first.high, 10.9);
    assert_eq!(first.low, 9.5);
    assert_eq!(first.volume, 5_000);
    assert_eq!(first.amount, 5_000_000.0);

    assert!(view.price_ma.get(5).unwrap().iter().all(Option::is_none));
    assert_eq!(view.volume_ma.latest(2), Some(5_000.0));

    let report = ViewReport::new("sz000001", Period::Weekly, &view, 4);
    assert_eq!(report.tail.len(), 4);
    assert!(report.summary().contains("Weekly"));
}

#[test]
fn load_instrument_from_source_directory() {
    let source = tempfile::tempdir().unwrap();
    let store_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        source.path().join("sh600000.day"),
        day_bytes(&weekday_dates()),
    )
    .unwrap();

    let mut store = CsvStore::open(store_dir.path()).unwrap();
    let dir = DayDirectory::new(source.path());
    let daily = load_instrument(&mut store, "sh600000", None, Some(&dir))
        .unwrap()
        .unwrap();
    assert_eq!(daily.len(), 20);

    let known = store.list_known_codes().unwrap();
    assert_eq!(known[0].code, "sh600000");

    let monthly = build_view(&daily, Period::Monthly, &[1], &[1]);
    assert_eq!(monthly.bars.len(), 1);
    assert_eq!(monthly.bars[0].volume, 20_000);
    assert_eq!(monthly.price_ma.latest(1), Some(monthly.bars[0].close));
}
