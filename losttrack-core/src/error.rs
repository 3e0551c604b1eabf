/// Structured error types for losttrack-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (losttrack-tui) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for item store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Another item already holds this barcode
    #[error("an item with barcode '{barcode}' already exists")]
    DuplicateBarcode { barcode: String },

    /// A draft field was empty after trimming
    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// The backing database file could not be created or opened
    #[error("storage unavailable at {path:?}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    /// Underlying database operation failed
    #[error("database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Configuration file could not be parsed
    #[error("configuration error at {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },
}

/// Result type alias for losttrack-core operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Create a duplicate barcode error
    pub fn duplicate_barcode(barcode: impl Into<String>) -> Self {
        Self::DuplicateBarcode {
            barcode: barcode.into(),
        }
    }

    /// Create an empty field error
    pub fn empty_field(field: &'static str) -> Self {
        Self::EmptyField { field }
    }

    /// Create a storage unavailable error
    pub fn storage_unavailable(path: impl Into<PathBuf>, source: sqlx::Error) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
