//! Loading instruments through the store with source-file fallback.

use kline_core::error::LoadError;
use kline_core::traits::BarStore;
use kline_core::types::Bar;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::day_file::read_day_file;
use crate::source_dir::{code_from_path, DayDirectory};

/// Outcome of importing one `.day` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub code: String,
    pub path: PathBuf,
    pub bars: usize,
}

/// Decode a `.day` file and save its bars under the file's code.
///
/// A file that decodes to zero bars is rejected with [`LoadError::NoBars`]
/// so an empty import never shadows real history.
pub fn import_day_file<S: BarStore + ?Sized>(
    store: &mut S,
    path: &Path,
) -> Result<ImportSummary, LoadError> {
    let code = code_from_path(path).ok_or_else(|| LoadError::InvalidPath {
        path: path.to_path_buf(),
    })?;

    let bars = read_day_file(path)?;
    if bars.is_empty() {
        return Err(LoadError::NoBars {
            path: path.to_path_buf(),
        });
    }

    store.save(&code, &bars, &path.to_string_lossy())?;
    info!(code = %code, bars = bars.len(), path = %path.display(), "Imported .day file");

    Ok(ImportSummary {
        code,
        path: path.to_path_buf(),
        bars: bars.len(),
    })
}

/// Load daily bars for `code`.
///
/// Order of attempts: the store, then `hint` if it names an existing file,
/// then `<source_dir>/<code>.day`. Bars decoded from a file are saved back
/// into the store. Returns `Ok(None)` when no attempt yields bars.
pub fn load_instrument<S: BarStore + ?Sized>(
    store: &mut S,
    code: &str,
    hint: Option<&Path>,
    source_dir: Option<&DayDirectory>,
) -> Result<Option<Vec<Bar>>, LoadError> {
    if let Some(bars) = store.load(code)? {
        debug!(code, bars = bars.len(), store = store.name(), "Loaded from store");
        return Ok(Some(bars));
    }

    let candidates = hint
        .map(Path::to_path_buf)
        .into_iter()
        .chain(source_dir.map(|d| d.path_for(code)));

    for path in candidates {
        if !path.is_file() {
            continue;
        }
        let bars = match read_day_file(&path) {
            Ok(bars) => bars,
            Err(e) => {
                warn!(code, path = %path.display(), error = %e, "Skipping unreadable source");
                continue;
            }
        };
        if bars.is_empty() {
            continue;
        }

        store.save(code, &bars, &path.to_string_lossy())?;
        info!(code, bars = bars.len(), path = %path.display(), "Loaded from source file");
        return Ok(Some(bars));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_file::tests::{encode, record};
    use crate::store::MemoryStore;

    fn write_day(dir: &Path, name: &str, dates: &[u32]) -> PathBuf {
        let records: Vec<_> = dates
            .iter()
            .map(|&d| record(d, [10_000, 10_500, 9_500, 10_200], 1_000.0, 10))
            .collect();
        let path = dir.join(name);
        std::fs::write(&path, encode(&records)).unwrap();
        path
    }

    #[test]
    fn test_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_day(dir.path(), "sz000001.day", &[20240102, 20240103]);

        let mut store = MemoryStore::new();
        let summary = import_day_file(&mut store, &path).unwrap();

        assert_eq!(summary.code, "sz000001");
        assert_eq!(summary.bars, 2);
        assert_eq!(store.load("sz000001").unwrap().unwrap().len(), 2);
        assert_eq!(
            store.list_known_codes().unwrap()[0].source,
            path.to_string_lossy()
        );
    }

    #[test]
    fn test_import_rejects_empty_and_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let padding = write_day(dir.path(), "sz000002.day", &[0, 0]);
        let malformed = dir.path().join("sz000003.day");
        std::fs::write(&malformed, [0u8; 40]).unwrap();

        let mut store = MemoryStore::new();
        assert!(matches!(
            import_day_file(&mut store, &padding),
            Err(LoadError::NoBars { .. })
        ));
        assert!(matches!(
            import_day_file(&mut store, &malformed),
            Err(LoadError::Decode(_))
        ));
        assert!(matches!(
            import_day_file(&mut store, &dir.path().join("missing.day")),
            Err(LoadError::Decode(_))
        ));
        assert!(store.list_known_codes().unwrap().is_empty());
    }

    #[test]
    fn test_import_rejects_path_without_code() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            import_day_file(&mut store, Path::new("/")),
            Err(LoadError::InvalidPath { .. })
        ));
        assert!(matches!(
            import_day_file(&mut store, Path::new("..")),
            Err(LoadError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_load_prefers_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_day(dir.path(), "sz000001.day", &[20240102, 20240103, 20240104]);

        let mut store = MemoryStore::new();
        let stored = read_day_file(&path).unwrap();
        store.save("sz000001", &stored[..1], "").unwrap();

        let bars = load_instrument(&mut store, "sz000001", Some(&path), None)
            .unwrap()
            .unwrap();
        assert_eq!(bars.len(), 1);
    }

    #[test]
    fn test_load_falls_back_to_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_day(dir.path(), "sz000001.day", &[20240102, 20240103]);
        let source = DayDirectory::new(dir.path());

        let mut store = MemoryStore::new();
        let stale_hint = dir.path().join("moved.day");
        let bars = load_instrument(&mut store, "sz000001", Some(&stale_hint), Some(&source))
            .unwrap()
            .unwrap();

        assert_eq!(bars.len(), 2);
        // Saved back for the next load
        assert_eq!(store.load("sz000001").unwrap().unwrap(), bars);
    }

    #[test]
    fn test_load_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = DayDirectory::new(dir.path());
        let mut store = MemoryStore::new();

        assert!(load_instrument(&mut store, "sz000009", None, Some(&source))
            .unwrap()
            .is_none());
    }
}
