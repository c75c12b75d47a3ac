//! Purview Functions - HTTP-triggered catalog/storage integration
//!
//! Provides two function pipelines and their HTTP triggers:
//! - Export: search the data catalog for table assets and export their
//!   column metadata as a CSV blob
//! - Mappings: read a column-to-glossary-term CSV from blob storage and
//!   write term associations back to the catalog
//!
//! The catalog and the blob store are collaborator boundaries, abstracted
//! behind the [`CatalogClient`] and [`BlobStore`] traits with REST-backed
//! implementations.

pub mod catalog;
pub mod export;
pub mod functions;
pub mod mappings;
pub mod storage;

// Re-export commonly used types
pub use catalog::{
    AssetDetail, CatalogClient, CatalogError, GlossaryTerm, PurviewCatalogClient, RelatedEntity,
    SearchFilter, SearchResult,
};
pub use export::{ColumnExportRecord, CsvExporter, EXPORT_COLUMNS, ExportError};
pub use mappings::{
    MappingError, MappingReport, MappingRow, TermMappingRow, parse_mapping_csv,
    transpose_mappings, write_mappings,
};
pub use storage::{AzureBlobClient, BlobAddress, BlobStore, StorageError};
