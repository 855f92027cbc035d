//! K-line analysis CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use kline_config::load_config;
use kline_monitor::{setup_logging, LogFormat};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI flags win; level, format and file target fall back to config
    let config = load_config(&cli.config).ok();
    let log_level = cli::resolve_log_level(cli.log_level, config.as_ref());
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        config
            .as_ref()
            .map_or(LogFormat::Pretty, |c| LogFormat::from_config(&c.logging.format))
    };
    let log_file = config.as_ref().and_then(|c| c.logging.file.as_deref()).map(Path::new);
    let _guard = setup_logging(&log_level, format, log_file);

    // Execute command
    match cli.command {
        Commands::Import(args) => cli::commands::import::run(args, &cli.config),
        Commands::List => cli::commands::list::run(&cli.config),
        Commands::Scan(args) => cli::commands::scan::run(args, &cli.config),
        Commands::Show(args) => cli::commands::show::run(args, &cli.config),
        Commands::Decode(args) => cli::commands::decode::run(args),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config),
        Commands::InitConfig(args) => cli::commands::init::run(args, &cli.config),
    }
}
