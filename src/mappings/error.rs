//! Error types for the mapping pipeline

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::storage::StorageError;

/// Errors that can occur during mapping ingest and transposition
///
/// Term resolution failures are not caught per-term: one unresolvable term
/// aborts the whole pass with no partial output.
#[derive(Error, Debug)]
pub enum MappingError {
    /// Blob download failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Term resolution or assignment failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Input CSV could not be parsed
    #[error("Mapping CSV parse error: {0}")]
    Csv(String),
}

impl From<csv::Error> for MappingError {
    fn from(err: csv::Error) -> Self {
        MappingError::Csv(err.to_string())
    }
}

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;
