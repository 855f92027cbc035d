//! List stored instruments.

use anyhow::Result;
use kline_core::traits::BarStore;
use std::path::Path;

use super::{app_config, open_store};

pub fn run(config_path: &Path) -> Result<()> {
    let config = app_config(config_path)?;
    let store = open_store(&config)?;
    let known = store.list_known_codes()?;

    if known.is_empty() {
        println!("No instruments stored yet. Use 'kline import <file.day>' first.");
        return Ok(());
    }

    println!("{:<12} {:<26} {}", "CODE", "UPDATED", "SOURCE");
    for instrument in known {
        println!(
            "{:<12} {:<26} {}",
            instrument.code,
            instrument.updated_at.format("%Y-%m-%d %H:%M:%S"),
            instrument.source
        );
    }

    Ok(())
}
