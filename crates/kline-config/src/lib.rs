//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, ChartSettings, DataSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Environment variable prefix, e.g. `KLINE__DATA__DAY_DIR`.
pub const ENV_PREFIX: &str = "KLINE";

/// Load configuration from file and environment.
///
/// A missing file is not an error: defaults plus environment overrides
/// apply. The result is validated before it is returned.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("chart.price_ma_periods")
                .with_list_parse_key("chart.volume_ma_periods")
                .try_parsing(true),
        )
        .build()?;

    let app: AppConfig = config.try_deserialize()?;
    app.validate()?;
    Ok(app)
}
