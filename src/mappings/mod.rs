//! Column-to-glossary-term mappings
//!
//! This module provides:
//! - Parsing of mapping CSVs from blob storage
//! - Transposition into one row per distinct glossary term
//! - The write path associating terms with columns in the catalog

mod error;
mod transpose;
mod types;
mod writer;

pub use error::{MappingError, MappingResult};
pub use transpose::{parse_mapping_csv, transpose_mappings};
pub use types::{MappingRow, TermMappingRow};
pub use writer::{MappingFailure, MappingReport, write_mappings};
