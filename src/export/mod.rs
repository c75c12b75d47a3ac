//! Column metadata export
//!
//! This module provides:
//! - Flattening of matched table assets into per-column records
//! - CSV serialization with the fixed export header
//! - The [`CsvExporter`] pipeline driving search, flatten, and upload

mod error;
mod exporter;
mod flatten;
mod types;

pub use error::{ExportError, ExportResult};
pub use exporter::CsvExporter;
pub use flatten::flatten_columns;
pub use types::{ColumnExportRecord, EXPORT_COLUMNS};
