//! Storage collaborator trait.

use crate::error::StoreError;
use crate::types::{Bar, KnownInstrument};

/// Persistence for decoded daily history, keyed by instrument code.
///
/// Bars are unique per (code, date): saving a bar for a date that is
/// already stored replaces it.
pub trait BarStore {
    /// Load the stored daily bars for `code`, ascending by date.
    ///
    /// Returns `None` when nothing is stored for the code.
    fn load(&self, code: &str) -> Result<Option<Vec<Bar>>, StoreError>;

    /// Upsert `bars` for `code` and record where they came from.
    fn save(&mut self, code: &str, bars: &[Bar], source: &str) -> Result<(), StoreError>;

    /// Known codes, most recently updated first.
    fn list_known_codes(&self) -> Result<Vec<KnownInstrument>, StoreError>;

    /// Get the store name.
    fn name(&self) -> &str;
}
