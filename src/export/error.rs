//! Error types for the export pipeline

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::storage::StorageError;

/// Errors that can occur during a column metadata export
///
/// Any single failure aborts the whole pass: there is no partial export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Catalog search or asset fetch failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Blob upload failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// CSV serialization failed
    #[error("CSV serialization error: {0}")]
    Csv(String),
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err.to_string())
    }
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
