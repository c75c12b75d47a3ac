//! Catalog payload types
//!
//! These mirror only the fields this crate consumes; everything else in the
//! catalog responses is ignored during deserialization.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A single row of a catalog search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Asset GUID
    pub id: String,
    /// Asset display name (used as the table name on export)
    pub name: String,
    /// Asset type labels; the first entry is exported
    #[serde(default, rename = "assetType")]
    pub asset_type: Vec<String>,
}

/// Full asset detail response: the entity itself plus its referred entities
#[derive(Debug, Clone, Deserialize)]
pub struct AssetDetail {
    /// The asset entity
    pub entity: AssetEntity,
    /// Nested entities keyed by GUID (columns, schemas, ...)
    ///
    /// A BTreeMap keeps iteration deterministic; the wire format is an
    /// unordered JSON object.
    #[serde(default, rename = "referredEntities")]
    pub referred_entities: BTreeMap<String, RelatedEntity>,
}

/// The entity portion of an asset detail response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetEntity {
    #[serde(default, rename = "relationshipAttributes")]
    pub relationship_attributes: RelationshipAttributes,
}

impl AssetEntity {
    /// Schema name from the dbSchema relationship, if the asset has one.
    ///
    /// Absence is normal (not every source system has schemas) and never an
    /// error.
    pub fn schema_name(&self) -> Option<&str> {
        self.relationship_attributes
            .db_schema
            .as_ref()
            .and_then(|s| s.display_text.as_deref())
    }
}

/// Relationship attributes of an asset; only dbSchema is consumed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelationshipAttributes {
    #[serde(default, rename = "dbSchema")]
    pub db_schema: Option<DisplayRef>,
}

/// A relationship reference carrying a display name
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayRef {
    #[serde(default, rename = "displayText")]
    pub display_text: Option<String>,
}

/// A nested entity referred to by an asset
#[derive(Debug, Clone, Deserialize)]
pub struct RelatedEntity {
    /// Entity type name; entities with "column" in the type are exported
    #[serde(rename = "typeName")]
    pub type_name: String,
    /// Entity GUID
    pub guid: String,
    /// Entity attributes
    #[serde(default)]
    pub attributes: EntityAttributes,
}

impl RelatedEntity {
    /// Whether this entity represents a column of some source system.
    ///
    /// Matches on the substring "column" so that source-specific types like
    /// `azure_sql_column` or `hive_column` all qualify.
    pub fn is_column(&self) -> bool {
        self.type_name.contains("column")
    }
}

/// Attributes of a related entity; only the exported fields are declared
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityAttributes {
    #[serde(default, rename = "qualifiedName")]
    pub qualified_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "userDescription")]
    pub user_description: Option<String>,
}

/// A glossary term resolved by name
#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryTerm {
    /// Term GUID
    pub guid: String,
    /// Term display name
    #[serde(default)]
    pub name: Option<String>,
}
