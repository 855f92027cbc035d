//! Data layer: `.day` decoding, period resampling and bar storage.

mod day_file;
mod loader;
mod resample;
mod source_dir;
mod store;

pub use day_file::{
    decode, read_day_file, DayDecoder, DayRecord, DecodeStats, MAX_DATE, MIN_DATE, RECORD_SIZE,
};
pub use loader::{import_day_file, load_instrument, ImportSummary};
pub use resample::resample;
pub use source_dir::{code_from_path, DayDirectory, DayFileEntry};
pub use store::{CsvStore, MemoryStore};
