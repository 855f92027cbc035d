//! Import command implementation.

use anyhow::Result;
use kline_data::import_day_file;
use std::path::Path;
use tracing::{info, warn};

use super::{app_config, open_store};
use crate::cli::ImportArgs;

pub fn run(args: ImportArgs, config_path: &Path) -> Result<()> {
    let config = app_config(config_path)?;
    let mut store = open_store(&config)?;

    let mut failed = 0;
    for path in &args.paths {
        match import_day_file(&mut store, path) {
            Ok(summary) => {
                println!("Imported {} daily bars for {}", summary.bars, summary.code);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Import failed");
                println!("Failed to import {}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    info!(
        imported = args.paths.len() - failed,
        failed, "Import finished"
    );
    if failed > 0 {
        anyhow::bail!("{} of {} imports failed", failed, args.paths.len());
    }
    Ok(())
}
