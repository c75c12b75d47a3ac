//! Search filter and request body construction

use serde_json::{Value, json};

/// A structured search filter for catalog queries
///
/// Always a boolean AND of the table object-type constraint and an asset-type
/// constraint. The asset type passes through unvalidated; `None` serializes
/// as JSON null, which the catalog treats as "no type restriction".
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter(Value);

impl SearchFilter {
    /// Build a filter constraining results to table assets of the given type
    pub fn for_tables(asset_type: Option<&str>) -> Self {
        Self(json!({
            "and": [
                {"objectType": "Tables"},
                {"assetType": asset_type}
            ]
        }))
    }

    /// The filter as a JSON value
    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

/// Build the search request body sent to the catalog discovery endpoint
pub fn search_body(keywords: &str, filter: &SearchFilter) -> Value {
    json!({
        "keywords": keywords,
        "facets": null,
        "filter": filter.as_json(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_with_asset_type() {
        let filter = SearchFilter::for_tables(Some("Azure SQL Database"));
        assert_eq!(
            filter.as_json()["and"][1]["assetType"],
            json!("Azure SQL Database")
        );
        assert_eq!(filter.as_json()["and"][0]["objectType"], json!("Tables"));
    }

    #[test]
    fn test_filter_without_asset_type_is_null() {
        let filter = SearchFilter::for_tables(None);
        assert_eq!(filter.as_json()["and"][1]["assetType"], Value::Null);
    }

    #[test]
    fn test_search_body_shape() {
        let filter = SearchFilter::for_tables(None);
        let body = search_body("*", &filter);

        assert_eq!(body["keywords"], json!("*"));
        assert_eq!(body["facets"], Value::Null);
        assert_eq!(body["filter"], *filter.as_json());
    }
}
