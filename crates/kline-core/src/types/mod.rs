//! Core data types for K-line analysis.

mod bar;
mod instrument;
mod ma_table;
mod period;
mod view;

pub use bar::{closes, volumes, Bar};
pub use instrument::KnownInstrument;
pub use ma_table::MovingAverageTable;
pub use period::{Period, PeriodKey};
pub use view::View;
