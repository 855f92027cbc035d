//! Series pipeline.
//!
//! Turns a daily series into the bars and moving-average tables the
//! presentation layer draws for a selected period.

mod cache;
mod pipeline;
mod report;

pub use cache::ViewCache;
pub use pipeline::{
    build_view, SeriesPipeline, DEFAULT_PRICE_MA_PERIODS, DEFAULT_VOLUME_MA_PERIODS,
};
pub use report::ViewReport;
