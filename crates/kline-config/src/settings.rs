//! Configuration structures.

use config::ConfigError;
use kline_core::types::Period;
use kline_view::{DEFAULT_PRICE_MA_PERIODS, DEFAULT_VOLUME_MA_PERIODS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub chart: ChartSettings,
}

impl AppConfig {
    /// Check values the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = [
            ("chart.price_ma_periods", &self.chart.price_ma_periods),
            ("chart.volume_ma_periods", &self.chart.volume_ma_periods),
        ];
        for (key, periods) in windows {
            if periods.is_empty() {
                return Err(ConfigError::Message(format!("{} must not be empty", key)));
            }
            if periods.contains(&0) {
                return Err(ConfigError::Message(format!(
                    "{} must contain only positive periods",
                    key
                )));
            }
        }
        if self.data.default_code.trim().is_empty() {
            return Err(ConfigError::Message(
                "data.default_code must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "kline".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Where bars come from and where they are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory of `<code>.day` source files
    pub day_dir: Option<PathBuf>,
    /// Directory of the CSV bar store
    pub store_dir: PathBuf,
    /// Code shown when nothing else is selected
    pub default_code: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            day_dir: None,
            store_dir: PathBuf::from("data/store"),
            default_code: "sz000001".to_string(),
        }
    }
}

/// Period and moving-average windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub default_period: Period,
    pub price_ma_periods: Vec<usize>,
    pub volume_ma_periods: Vec<usize>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            default_period: Period::Daily,
            price_ma_periods: DEFAULT_PRICE_MA_PERIODS.to_vec(),
            volume_ma_periods: DEFAULT_VOLUME_MA_PERIODS.to_vec(),
        }
    }
}
