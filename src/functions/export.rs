//! Column metadata export trigger

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

use crate::catalog::PurviewCatalogClient;
use crate::export::CsvExporter;
use crate::storage::{AzureBlobClient, BlobAddress};

use super::{internal_error, require_param};

/// Query parameters of the export trigger
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub purview_account: Option<String>,
    pub keywords: Option<String>,
    pub asset_type: Option<String>,
    pub storage_account_url: Option<String>,
}

/// HTTP trigger: search the catalog and export column metadata to a CSV blob
#[get("/api/pvexport")]
pub async fn pvexport(params: web::Query<ExportParams>) -> HttpResponse {
    tracing::info!("export trigger received a request");

    let account = match require_param("purview_account", &params.purview_account) {
        Ok(value) => value,
        Err(response) => return response,
    };
    let storage_account_url =
        match require_param("storage_account_url", &params.storage_account_url) {
            Ok(value) => value,
            Err(response) => return response,
        };

    match run_export(
        account,
        params.keywords.as_deref(),
        params.asset_type.as_deref(),
        storage_account_url,
    )
    .await
    {
        Ok(filename) => {
            tracing::info!(%filename, "file exported successfully");
            HttpResponse::Ok().body("This HTTP triggered function executed successfully.")
        }
        Err(e) => internal_error(&e),
    }
}

async fn run_export(
    account: &str,
    keywords: Option<&str>,
    asset_type: Option<&str>,
    storage_account_url: &str,
) -> anyhow::Result<String> {
    let destination = BlobAddress::parse(storage_account_url)?;

    // Clients are scoped to this request; nothing is shared across invocations
    let catalog = PurviewCatalogClient::from_env(account)?;
    let blobs = AzureBlobClient::from_env(destination.account_url.clone())?;

    let exporter = CsvExporter::new(&catalog, &blobs);
    let filename = exporter.export(keywords, asset_type, &destination).await?;

    Ok(filename)
}
