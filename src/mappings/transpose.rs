//! Transposition of column-to-terms rows into term-to-columns rows

use crate::catalog::CatalogClient;

use super::error::MappingResult;
use super::types::{MappingRow, TermMappingRow};

/// Parse mapping rows from CSV bytes.
///
/// The CSV must carry `column_guid` and `glossaryTerms` columns; additional
/// columns are ignored. No schema validation beyond what deserialization
/// needs.
pub fn parse_mapping_csv(bytes: &[u8]) -> MappingResult<Vec<MappingRow>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let rows = reader.deserialize().collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Transpose mapping rows into one output row per distinct glossary term.
///
/// Terms are collected by splitting every non-empty `glossaryTerms` cell on
/// commas, in row order, then deduplicated keeping the first occurrence.
/// Each distinct term is resolved against the catalog; a single unresolvable
/// term aborts the whole pass. The `columns` of an output row are the column
/// GUIDs of every input row referencing that exact term, in input order.
pub async fn transpose_mappings(
    catalog: &dyn CatalogClient,
    rows: &[MappingRow],
) -> MappingResult<Vec<TermMappingRow>> {
    let terms = distinct_terms(rows);

    let mut transposed = Vec::with_capacity(terms.len());
    for term in terms {
        let resolved = catalog.get_term_by_name(&term).await?;

        let columns: Vec<String> = rows
            .iter()
            .filter(|row| row.references(&term))
            .map(|row| row.column_guid.clone())
            .collect();

        transposed.push(TermMappingRow {
            glossary_term: term,
            term_guid: resolved.guid,
            columns,
        });
    }

    tracing::info!(terms = transposed.len(), "mapping transpose complete");

    Ok(transposed)
}

/// Distinct term names across all rows, in first-seen order
fn distinct_terms(rows: &[MappingRow]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for row in rows {
        for term in row.terms() {
            if !terms.iter().any(|t| t == term) {
                terms.push(term.to_string());
            }
        }
    }
    terms
}
