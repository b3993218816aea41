//! Error types for the contact book.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the storage layer.
///
/// Every variant carries the backing engine's own message so the command
/// loop can surface it verbatim.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to open database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
