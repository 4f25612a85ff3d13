//! Error types for the submission store

use std::path::PathBuf;

/// Errors opening or writing the submission store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error reading or writing the data file
    #[error("io error on {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Data file exists but does not parse
    #[error("corrupt data file {path}: {source}")]
    Corrupt {
        /// Data file
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// Record stored under a key that differs from its own id
    #[error("record keyed {key} carries id {id}")]
    InconsistentRecord {
        /// Key in the data file
        key: String,
        /// Id inside the record
        id: String,
    },

    /// In-memory mapping could not be serialized
    #[error("failed to serialize submissions: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error happened while reading existing data at startup
    #[inline]
    #[must_use]
    pub fn is_startup_data_error(&self) -> bool {
        matches!(self, Self::Corrupt { .. } | Self::InconsistentRecord { .. })
    }
}
