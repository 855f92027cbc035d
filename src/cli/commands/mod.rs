//! CLI command implementations.

pub mod decode;
pub mod import;
pub mod init;
pub mod list;
pub mod scan;
pub mod show;
pub mod validate;

use anyhow::{Context, Result};
use kline_config::{load_config, AppConfig};
use kline_data::CsvStore;
use std::path::Path;

/// Load and validate configuration for a command.
fn app_config(config_path: &Path) -> Result<AppConfig> {
    load_config(config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))
}

/// Open the CSV bar store configured in `data.store_dir`.
fn open_store(config: &AppConfig) -> Result<CsvStore> {
    CsvStore::open(&config.data.store_dir)
        .with_context(|| format!("Failed to open bar store at {:?}", config.data.store_dir))
}
