//! Error types for catalog operations

use thiserror::Error;

/// Errors that can occur against the data catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Glossary term does not exist in the catalog
    #[error("Glossary term not found: {0}")]
    TermNotFound(String),

    /// A catalog payload is missing a field this crate consumes
    #[error("Malformed catalog response: {context} - {reason}")]
    MalformedResponse { context: String, reason: String },

    /// Transport failure against the catalog endpoint
    #[error("Catalog transport error: {context} - {reason}")]
    Transport { context: String, reason: String },

    /// Required credentials are missing from the environment
    #[error("Missing catalog credentials: {0}")]
    MissingCredentials(String),
}

impl CatalogError {
    /// Build a malformed-response error for a payload field
    pub fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::MalformedResponse {
            context: context.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
