//! Instrument identity as known to a bar store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An instrument code with the source its bars were decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownInstrument {
    /// Exchange-qualified code, e.g. `sz000001`
    pub code: String,
    /// Source descriptor (usually the `.day` path), empty if unknown
    pub source: String,
    /// Last time bars were saved for this code
    pub updated_at: DateTime<Utc>,
}
