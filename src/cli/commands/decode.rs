//! Decode command implementation.

use anyhow::{Context, Result};
use kline_data::{code_from_path, DayDecoder};
use kline_view::{SeriesPipeline, ViewReport};

use crate::cli::{DecodeArgs, OutputFormat};

pub fn run(args: DecodeArgs) -> Result<()> {
    let bytes = std::fs::read(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    let (daily, stats) = DayDecoder::new().decode_with_stats(&bytes)?;

    let code = code_from_path(&args.path).unwrap_or_else(|| "-".to_string());
    let view = SeriesPipeline::default().run(&daily, args.period);
    let report = ViewReport::new(&code, args.period, &view, args.tail);

    match args.output {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => {
            println!(
                "{} records, {} decoded, {} skipped",
                stats.records, stats.decoded, stats.skipped
            );
            println!("{}", report.summary());
        }
    }

    Ok(())
}
