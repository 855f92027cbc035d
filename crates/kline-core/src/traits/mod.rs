//! Core traits for K-line analysis.

mod indicator;
mod store;

pub use indicator::Indicator;
pub use store::BarStore;
