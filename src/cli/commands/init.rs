//! Write a default configuration file.

use anyhow::{Context, Result};
use kline_config::AppConfig;
use std::path::Path;

use crate::cli::InitArgs;

pub fn run(args: InitArgs, config_path: &Path) -> Result<()> {
    let path = args.path.as_deref().unwrap_or(config_path);
    if path.exists() && !args.force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let text = AppConfig::default().to_toml()?;
    std::fs::write(path, text).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Wrote default configuration to {}", path.display());

    Ok(())
}
