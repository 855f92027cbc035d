//! Directory of `.day` source files, one file per instrument code.

use kline_core::error::DecodeError;
use std::path::{Path, PathBuf};

/// Extension of daily-bar source files.
const DAY_EXTENSION: &str = "day";

/// A `.day` file found in a source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayFileEntry {
    pub code: String,
    pub path: PathBuf,
}

/// Instrument code for a source file: its file stem.
///
/// `/vipdoc/sz/lday/sz000001.day` → `sz000001`.
pub fn code_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A source directory laid out as `<dir>/<code>.day`.
#[derive(Debug, Clone)]
pub struct DayDirectory {
    dir: PathBuf,
}

impl DayDirectory {
    /// Create a handle on `dir`; nothing is read until used.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Conventional path of the source file for `code`.
    pub fn path_for(&self, code: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", code, DAY_EXTENSION))
    }

    /// List `.day` files, sorted by code.
    pub fn scan(&self) -> Result<Vec<DayFileEntry>, DecodeError> {
        let unavailable = |source| DecodeError::SourceUnavailable {
            path: self.dir.clone(),
            source,
        };

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(unavailable)? {
            let path = entry.map_err(unavailable)?.path();
            let is_day = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(DAY_EXTENSION));
            if !is_day || !path.is_file() {
                continue;
            }
            if let Some(code) = code_from_path(&path) {
                entries.push(DayFileEntry { code, path });
            }
        }

        entries.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(entries)
    }
}
