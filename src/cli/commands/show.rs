//! Show command implementation.

use anyhow::{Context, Result};
use kline_core::traits::BarStore;
use kline_data::{load_instrument, DayDirectory};
use kline_view::{SeriesPipeline, ViewCache, ViewReport};
use std::path::{Path, PathBuf};
use tracing::info;

use super::{app_config, open_store};
use crate::cli::{OutputFormat, ShowArgs};

pub fn run(args: ShowArgs, config_path: &Path) -> Result<()> {
    let config = app_config(config_path)?;
    let mut store = open_store(&config)?;
    let known = store.list_known_codes()?;

    // Explicit code, else the most recently imported one, else the configured default
    let code = args
        .code
        .clone()
        .or_else(|| known.first().map(|k| k.code.clone()))
        .unwrap_or_else(|| config.data.default_code.clone());

    let hint: Option<PathBuf> = args.file.clone().or_else(|| {
        known
            .iter()
            .find(|k| k.code == code && !k.source.is_empty())
            .map(|k| PathBuf::from(&k.source))
    });
    let source_dir = config.data.day_dir.as_ref().map(DayDirectory::new);

    let daily = load_instrument(&mut store, &code, hint.as_deref(), source_dir.as_ref())
        .with_context(|| format!("Failed to load {}", code))?
        .with_context(|| {
            format!(
                "No bars for {}: import a .day file or set data.day_dir",
                code
            )
        })?;

    let periods = if args.period.is_empty() {
        vec![config.chart.default_period]
    } else {
        args.period.clone()
    };
    let daily_len = daily.len();
    let mut cache = ViewCache::new(SeriesPipeline::new(
        config.chart.price_ma_periods.clone(),
        config.chart.volume_ma_periods.clone(),
    ));
    cache.install(&code, daily);

    let mut reports = Vec::with_capacity(periods.len());
    for period in periods {
        let view = cache
            .view(&code, period)
            .with_context(|| format!("No series installed for {}", code))?;
        info!(code = %code, %period, daily = daily_len, bars = view.bars.len(), "Built view");
        reports.push(ViewReport::new(&code, period, view, args.tail));
    }

    match args.output {
        OutputFormat::Json if reports.len() == 1 => println!("{}", reports[0].to_json()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report.summary());
            }
        }
    }

    Ok(())
}
