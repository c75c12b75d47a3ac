//! Blob store client
//!
//! Defines the [`BlobStore`] trait consumed by the export and mapping
//! pipelines, and the [`AzureBlobClient`] implementation against the blob
//! REST surface.

use async_trait::async_trait;

use super::error::StorageError;

/// Blob REST API version sent with every request
const BLOB_API_VERSION: &str = "2021-08-06";

/// Trait for blob storage backends
///
/// Abstracts the two primitives the pipelines need: downloading a blob and
/// uploading (overwriting) a blob.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Download a blob's full contents
    async fn download(&self, container: &str, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Upload a blob, overwriting any existing blob at the same path
    async fn upload(&self, container: &str, path: &str, body: Vec<u8>) -> Result<(), StorageError>;
}

/// Blob storage client backed by the Azure blob REST API
pub struct AzureBlobClient {
    account_url: String,
    token: String,
    client: reqwest::Client,
}

impl AzureBlobClient {
    /// Create a new blob client for a storage account
    ///
    /// # Arguments
    ///
    /// * `account_url` - Account URL including scheme (e.g. `https://acct.blob.core.windows.net`)
    /// * `token` - Bearer token; stored but never logged
    pub fn new(account_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            account_url: account_url.into(),
            token: token.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a blob client with the token from the environment
    ///
    /// Reads `AZURE_STORAGE_TOKEN`. Clients are intentionally short-lived:
    /// one is constructed per request and dropped with it.
    pub fn from_env(account_url: impl Into<String>) -> Result<Self, StorageError> {
        let token = std::env::var("AZURE_STORAGE_TOKEN").map_err(|_| {
            StorageError::MissingCredentials("AZURE_STORAGE_TOKEN".to_string())
        })?;

        Ok(Self::new(account_url, token))
    }

    fn blob_url(&self, container: &str, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.account_url.trim_end_matches('/'),
            container,
            path.trim_start_matches('/')
        )
    }

    fn build_request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("x-ms-version", BLOB_API_VERSION)
    }
}

#[async_trait]
impl BlobStore for AzureBlobClient {
    async fn download(&self, container: &str, path: &str) -> Result<Vec<u8>, StorageError> {
        let url = self.blob_url(container, path);

        let response = self
            .build_request(reqwest::Method::GET, &url)
            .send()
            .await
            .map_err(|e| StorageError::Transport {
                path: format!("{container}/{path}"),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Transport {
                path: format!("{container}/{path}"),
                reason: format!("HTTP {status}: {body}"),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StorageError::Io(std::io::Error::other(e.to_string())))?;

        Ok(bytes.to_vec())
    }

    async fn upload(&self, container: &str, path: &str, body: Vec<u8>) -> Result<(), StorageError> {
        let url = self.blob_url(container, path);

        // PUT with no preconditions, so an existing blob is overwritten
        let response = self
            .build_request(reqwest::Method::PUT, &url)
            .header("x-ms-blob-type", "BlockBlob")
            .header("Content-Type", "text/csv")
            .body(body)
            .send()
            .await
            .map_err(|e| StorageError::Transport {
                path: format!("{container}/{path}"),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Transport {
                path: format!("{container}/{path}"),
                reason: format!("HTTP {status}: {body}"),
            });
        }

        Ok(())
    }
}
