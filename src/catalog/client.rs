//! Catalog client
//!
//! Defines the [`CatalogClient`] trait consumed by the export and mapping
//! pipelines, and the [`PurviewCatalogClient`] implementation against the
//! Purview REST API.

use async_trait::async_trait;
use serde::Deserialize;

use super::error::{CatalogError, CatalogResult};
use super::filter::{SearchFilter, search_body};
use super::types::{AssetDetail, GlossaryTerm, SearchResult};

/// Discovery API version sent with search requests
const SEARCH_API_VERSION: &str = "2022-08-01-preview";

/// Trait for catalog backends
///
/// Abstracts the four catalog operations the pipelines need: keyword search,
/// asset detail fetch, glossary term resolution, and term assignment.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Execute a keyword search with a structured filter.
    ///
    /// Returns results in catalog order. No pagination: only the first page
    /// the catalog returns is consumed.
    async fn search(
        &self,
        keywords: &str,
        filter: &SearchFilter,
    ) -> CatalogResult<Vec<SearchResult>>;

    /// Fetch the full detail of an asset, including its referred entities
    async fn get_asset(&self, guid: &str) -> CatalogResult<AssetDetail>;

    /// Resolve a glossary term by its exact name.
    ///
    /// Fails with [`CatalogError::TermNotFound`] if the catalog has no such
    /// term.
    async fn get_term_by_name(&self, name: &str) -> CatalogResult<GlossaryTerm>;

    /// Associate a glossary term with a set of entities.
    ///
    /// Assigning a term that is already assigned to an entity is treated as
    /// success, so repeated runs converge on the same end state.
    async fn assign_term(&self, term_guid: &str, entity_guids: &[String]) -> CatalogResult<()>;
}

/// Catalog client backed by the Purview REST API
pub struct PurviewCatalogClient {
    endpoint: String,
    token: String,
    client: reqwest::Client,
}

impl PurviewCatalogClient {
    /// Create a new catalog client for a Purview account
    ///
    /// # Arguments
    ///
    /// * `account` - Purview account name (becomes `https://{account}.purview.azure.com`)
    /// * `token` - Bearer token; stored but never logged
    pub fn new(account: &str, token: impl Into<String>) -> Self {
        Self {
            endpoint: format!("https://{account}.purview.azure.com"),
            token: token.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a catalog client with the token from the environment
    ///
    /// Reads `PURVIEW_TOKEN`. Clients are intentionally short-lived: one is
    /// constructed per request and dropped with it.
    pub fn from_env(account: &str) -> CatalogResult<Self> {
        let token = std::env::var("PURVIEW_TOKEN")
            .map_err(|_| CatalogError::MissingCredentials("PURVIEW_TOKEN".to_string()))?;

        Ok(Self::new(account, token))
    }

    fn build_request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.endpoint, path);
        self.client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.token))
    }

    /// Send a request and deserialize a successful JSON response
    async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> CatalogResult<T> {
        let response = request.send().await.map_err(|e| CatalogError::Transport {
            context: context.to_string(),
            reason: e.to_string(),
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Transport {
                context: context.to_string(),
                reason: format!("HTTP {status}: {body}"),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::malformed(context, e.to_string()))
    }
}

/// Envelope of a discovery query response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    value: Vec<SearchResult>,
}

#[async_trait]
impl CatalogClient for PurviewCatalogClient {
    async fn search(
        &self,
        keywords: &str,
        filter: &SearchFilter,
    ) -> CatalogResult<Vec<SearchResult>> {
        let path = format!("/catalog/api/search/query?api-version={SEARCH_API_VERSION}");
        let body = search_body(keywords, filter);

        tracing::debug!(keywords, "catalog search");

        let response: SearchResponse = self
            .send_json(
                self.build_request(reqwest::Method::POST, &path).json(&body),
                "search query",
            )
            .await?;

        Ok(response.value)
    }

    async fn get_asset(&self, guid: &str) -> CatalogResult<AssetDetail> {
        let path = format!("/catalog/api/atlas/v2/entity/guid/{guid}");

        self.send_json(
            self.build_request(reqwest::Method::GET, &path),
            &format!("entity {guid}"),
        )
        .await
    }

    async fn get_term_by_name(&self, name: &str) -> CatalogResult<GlossaryTerm> {
        let path = format!(
            "/catalog/api/atlas/v2/glossary/terms/name/{}",
            urlencoding::encode(name)
        );

        let response = self
            .build_request(reqwest::Method::GET, &path)
            .send()
            .await
            .map_err(|e| CatalogError::Transport {
                context: format!("term {name}"),
                reason: e.to_string(),
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::TermNotFound(name.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Transport {
                context: format!("term {name}"),
                reason: format!("HTTP {status}: {body}"),
            });
        }

        response
            .json::<GlossaryTerm>()
            .await
            .map_err(|e| CatalogError::malformed(format!("term {name}"), e.to_string()))
    }

    async fn assign_term(&self, term_guid: &str, entity_guids: &[String]) -> CatalogResult<()> {
        let path = format!("/catalog/api/atlas/v2/glossary/terms/{term_guid}/assignedEntities");
        let body: Vec<serde_json::Value> = entity_guids
            .iter()
            .map(|guid| serde_json::json!({"guid": guid}))
            .collect();

        let response = self
            .build_request(reqwest::Method::POST, &path)
            .json(&body)
            .send()
            .await
            .map_err(|e| CatalogError::Transport {
                context: format!("assign term {term_guid}"),
                reason: e.to_string(),
            })?;

        // 409 means some entities already carry the term; the end state is
        // what we asked for, so treat it as success
        if response.status() == reqwest::StatusCode::CONFLICT {
            return Ok(());
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Transport {
                context: format!("assign term {term_guid}"),
                reason: format!("HTTP {status}: {body}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_account_name() {
        let client = PurviewCatalogClient::new("contoso", "token");
        assert_eq!(client.endpoint, "https://contoso.purview.azure.com");
    }

    #[test]
    fn test_search_response_envelope() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"@search.count": 1, "value": [{"id": "g1", "name": "orders", "assetType": ["Tables"]}]}"#,
        )
        .unwrap();
        assert_eq!(response.value.len(), 1);
        assert_eq!(response.value[0].name, "orders");

        let empty: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.value.is_empty());
    }
}
