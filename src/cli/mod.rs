//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use kline_config::AppConfig;
use kline_core::types::Period;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kline")]
#[command(author, version, about = "Offline daily-bar analysis: .day import, K-line periods and moving averages")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/kline.toml", env = "KLINE_CONFIG")]
    pub config: PathBuf,

    /// Log level (defaults to logging.level from the configuration)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Filter level for logging: the flag, else `logging.level`, else `info`.
pub fn resolve_log_level(flag: Option<LogLevel>, config: Option<&AppConfig>) -> String {
    match (flag, config) {
        (Some(level), _) => level.as_str().to_string(),
        (None, Some(config)) => config.logging.level.clone(),
        (None, None) => LogLevel::Info.as_str().to_string(),
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode .day files and save their bars into the store
    Import(ImportArgs),
    /// List instrument codes known to the store
    List,
    /// List .day files in the source directory
    Scan(ScanArgs),
    /// Show bars and moving averages for an instrument
    Show(ShowArgs),
    /// Decode a .day file without storing it
    Decode(DecodeArgs),
    /// Validate configuration
    ValidateConfig,
    /// Write a configuration file with default values
    InitConfig(InitArgs),
}

#[derive(clap::Args)]
pub struct ImportArgs {
    /// .day files to import; the file stem is the instrument code
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Source directory (defaults to data.day_dir)
    pub dir: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Instrument code (defaults to the most recently imported one)
    pub code: Option<String>,

    /// K-line periods: 1d, 1w, 1M; repeat to show several (defaults to chart.default_period)
    #[arg(short, long)]
    pub period: Vec<Period>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Number of trailing bars to include
    #[arg(long, default_value = "10")]
    pub tail: usize,

    /// Source .day file to fall back to when the store has no bars
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct DecodeArgs {
    /// .day file to decode
    pub path: PathBuf,

    /// K-line period to resample to
    #[arg(short, long, default_value = "1d")]
    pub period: Period,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Number of trailing bars to include
    #[arg(long, default_value = "10")]
    pub tail: usize,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Destination (defaults to the --config path)
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
