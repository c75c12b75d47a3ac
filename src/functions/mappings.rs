//! Mapping ingest trigger

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

use crate::catalog::PurviewCatalogClient;
use crate::mappings::{parse_mapping_csv, transpose_mappings, write_mappings};
use crate::storage::{AzureBlobClient, BlobAddress, BlobStore};

use super::{internal_error, require_param};

/// Query parameters of the mapping ingest trigger
#[derive(Debug, Deserialize)]
pub struct MappingParams {
    pub purview_account: Option<String>,
    pub storage_blob: Option<String>,
}

/// HTTP trigger: read a mapping CSV from blob storage and write term
/// associations to the catalog
#[get("/api/pvmappings")]
pub async fn pvmappings(params: web::Query<MappingParams>) -> HttpResponse {
    tracing::info!("mapping trigger received a request");

    let account = match require_param("purview_account", &params.purview_account) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let storage_blob = match require_param("storage_blob", &params.storage_blob) {
        Ok(value) => value,
        Err(response) => return response,
    };

    match run_mappings(account, storage_blob).await {
        Ok(()) => HttpResponse::Ok().body("This HTTP triggered function executed successfully."),
        Err(e) => internal_error(&e),
    }
}

async fn run_mappings(account: &str, storage_blob: &str) -> anyhow::Result<()> {
    let address = BlobAddress::parse(storage_blob)?;

    // Clients are scoped to this request; nothing is shared across invocations
    let catalog = PurviewCatalogClient::from_env(account)?;
    let blobs = AzureBlobClient::from_env(address.account_url.clone())?;

    let bytes = blobs.download(&address.container, &address.path).await?;
    let rows = parse_mapping_csv(&bytes)?;
    let transposed = transpose_mappings(&catalog, &rows).await?;

    let report = write_mappings(&catalog, &transposed).await;
    tracing::info!(
        assigned = report.assigned,
        skipped = report.skipped,
        failed = report.failures.len(),
        "mapping write complete"
    );

    Ok(())
}
