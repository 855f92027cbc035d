//! Validate configuration command.

use anyhow::Result;
use kline_config::load_config;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    if !config_path.exists() {
        println!("(file not found, checking defaults and environment)");
    }

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            match &config.data.day_dir {
                Some(dir) => println!("Source directory: {}", dir.display()),
                None => println!("Source directory: (not set)"),
            }
            println!("Store directory: {}", config.data.store_dir.display());
            println!("Default code: {}", config.data.default_code);
            println!("Default period: {}", config.chart.default_period.label());
            println!("Price MA periods: {:?}", config.chart.price_ma_periods);
            println!("Volume MA periods: {:?}", config.chart.volume_ma_periods);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
