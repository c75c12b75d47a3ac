//! Flattening of asset detail responses into per-column records

use crate::catalog::{AssetDetail, CatalogError, SearchResult};

use super::types::ColumnExportRecord;

/// Flatten one search result plus its full asset detail into column records.
///
/// Every referred entity whose type name contains "column" yields exactly one
/// record; other entity types (schemas, keys, ...) yield nothing. A missing
/// dbSchema relationship leaves `schema_name` empty and is never an error,
/// but a column entity without a qualified name or name is a malformed
/// catalog response.
pub fn flatten_columns(
    result: &SearchResult,
    asset: &AssetDetail,
) -> Result<Vec<ColumnExportRecord>, CatalogError> {
    let schema_name = asset.entity.schema_name().map(str::to_string);
    let mut records = Vec::new();

    for entity in asset.referred_entities.values() {
        if !entity.is_column() {
            continue;
        }

        let context = format!("entity {}", entity.guid);
        let qualified_name = entity
            .attributes
            .qualified_name
            .clone()
            .ok_or_else(|| CatalogError::malformed(&context, "qualifiedName missing"))?;
        let column_name = entity
            .attributes
            .name
            .clone()
            .ok_or_else(|| CatalogError::malformed(&context, "name missing"))?;
        let asset_type = result
            .asset_type
            .first()
            .cloned()
            .ok_or_else(|| {
                CatalogError::malformed(format!("asset {}", result.id), "assetType empty")
            })?;

        records.push(ColumnExportRecord {
            table_guid: result.id.clone(),
            column_guid: entity.guid.clone(),
            qualified_name,
            asset_type,
            schema_name: schema_name.clone(),
            table_name: result.name.clone(),
            column_name,
            column_description: entity.attributes.user_description.clone(),
        });
    }

    Ok(records)
}
