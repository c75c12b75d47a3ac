//! CSV export pipeline
//!
//! Drives a catalog search, flattens every matched asset into per-column
//! records, serializes them to CSV, and uploads the result to blob storage.

use chrono::Local;

use crate::catalog::{CatalogClient, SearchFilter};
use crate::storage::{BlobAddress, BlobStore};

use super::error::{ExportError, ExportResult};
use super::flatten::flatten_columns;
use super::types::{ColumnExportRecord, EXPORT_COLUMNS};

/// Exporter of column metadata CSVs
///
/// Holds borrowed collaborators only; one exporter is built per request and
/// dropped with it.
pub struct CsvExporter<'a> {
    catalog: &'a dyn CatalogClient,
    blobs: &'a dyn BlobStore,
}

impl<'a> CsvExporter<'a> {
    /// Create an exporter over a catalog and a blob store
    pub fn new(catalog: &'a dyn CatalogClient, blobs: &'a dyn BlobStore) -> Self {
        Self { catalog, blobs }
    }

    /// Run the full export pass and return the generated filename.
    ///
    /// Empty or absent keywords fall back to `"*"` (match all). Matched
    /// assets are fetched and flattened sequentially in search order. The
    /// CSV lands at `<container>/<folder>/purview_assets_<YYYYMMDD_HHMMSS>.csv`,
    /// overwriting any blob already at that path.
    pub async fn export(
        &self,
        keywords: Option<&str>,
        asset_type: Option<&str>,
        destination: &BlobAddress,
    ) -> ExportResult<String> {
        let keywords = match keywords {
            Some(k) if !k.is_empty() => k,
            _ => "*",
        };
        let filter = SearchFilter::for_tables(asset_type);

        let results = self.catalog.search(keywords, &filter).await?;
        tracing::info!(keywords, matches = results.len(), "catalog search complete");

        let mut records = Vec::new();
        for result in &results {
            let asset = self.catalog.get_asset(&result.id).await?;
            records.extend(flatten_columns(result, &asset)?);
        }

        let csv = serialize_records(&records)?;

        let filename = format!(
            "purview_assets_{}.csv",
            Local::now().format("%Y%m%d_%H%M%S")
        );
        let blob_path = if destination.path.is_empty() {
            filename.clone()
        } else {
            format!("{}/{}", destination.path, filename)
        };

        self.blobs
            .upload(&destination.container, &blob_path, csv)
            .await?;

        tracing::info!(
            container = %destination.container,
            path = %blob_path,
            records = records.len(),
            "export uploaded"
        );

        Ok(filename)
    }
}

/// Serialize records to CSV with the fixed export header.
///
/// The header row is written even when there are no records.
fn serialize_records(records: &[ColumnExportRecord]) -> ExportResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))
}
