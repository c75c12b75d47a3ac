//! Types for column metadata export

use serde::{Deserialize, Serialize};

/// CSV header of the export file, in output order
pub const EXPORT_COLUMNS: [&str; 8] = [
    "table_guid",
    "column_guid",
    "qualifiedName",
    "assetType",
    "schemaName",
    "tableName",
    "columnName",
    "columnDescription",
];

/// One flattened column of a matched table asset
///
/// One record is emitted per column-type related entity per matched table, in
/// discovery order. No dedup: a column appearing under two matched assets
/// appears twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnExportRecord {
    /// GUID of the owning table asset
    pub table_guid: String,
    /// GUID of the column entity
    pub column_guid: String,
    /// Fully qualified column name
    #[serde(rename = "qualifiedName")]
    pub qualified_name: String,
    /// First asset-type label of the owning table
    #[serde(rename = "assetType")]
    pub asset_type: String,
    /// Schema display name, when the asset has a dbSchema relationship
    #[serde(rename = "schemaName")]
    pub schema_name: Option<String>,
    /// Table display name
    #[serde(rename = "tableName")]
    pub table_name: String,
    /// Column display name
    #[serde(rename = "columnName")]
    pub column_name: String,
    /// Column user description, when set
    #[serde(rename = "columnDescription")]
    pub column_description: Option<String>,
}
