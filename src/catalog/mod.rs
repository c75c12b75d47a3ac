//! Data catalog integration
//!
//! This module provides:
//! - Search filter and request body construction
//! - Payload types declaring only the fields this crate consumes
//! - The [`CatalogClient`] trait and its Purview REST implementation

mod client;
mod error;
mod filter;
mod types;

pub use client::{CatalogClient, PurviewCatalogClient};
pub use error::{CatalogError, CatalogResult};
pub use filter::{SearchFilter, search_body};
pub use types::{
    AssetDetail, AssetEntity, DisplayRef, EntityAttributes, GlossaryTerm, RelatedEntity,
    RelationshipAttributes, SearchResult,
};
