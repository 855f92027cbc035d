//! Error types for K-line analysis.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning `.day` bytes into bars.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The binary source could not be read.
    #[error("source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Buffer length is not a whole number of records.
    #[error("malformed length: {len} bytes is not a multiple of {record_size}")]
    MalformedLength { len: usize, record_size: usize },
}

impl DecodeError {
    /// True when the underlying source file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DecodeError::SourceUnavailable { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Storage collaborator errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Invalid instrument code: {0:?}")]
    InvalidCode(String),

    #[error("Corrupt data for {code}: {reason}")]
    Corrupt { code: String, reason: String },
}

/// Errors from loading an instrument through store and source files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("no valid bars in {}", path.display())]
    NoBars { path: PathBuf },

    #[error("cannot derive an instrument code from {}", path.display())]
    InvalidPath { path: PathBuf },
}
