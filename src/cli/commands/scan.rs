//! Scan a source directory for .day files.

use anyhow::{Context, Result};
use kline_data::DayDirectory;
use std::path::Path;

use super::app_config;
use crate::cli::ScanArgs;

pub fn run(args: ScanArgs, config_path: &Path) -> Result<()> {
    let dir = match args.dir {
        Some(dir) => dir,
        None => app_config(config_path)?
            .data
            .day_dir
            .context("No directory given and data.day_dir is not configured")?,
    };

    let entries = DayDirectory::new(&dir).scan()?;
    if entries.is_empty() {
        println!("No .day files in {}", dir.display());
        return Ok(());
    }

    for entry in &entries {
        println!("{:<12} {}", entry.code, entry.path.display());
    }
    println!("\n{} files", entries.len());

    Ok(())
}
