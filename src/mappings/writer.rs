//! Mapping write path
//!
//! Persists term-to-column associations back to the catalog. Unlike the
//! transpose pass, per-row failures here are recorded and do not abort the
//! remaining rows: each term row is an independent write.

use crate::catalog::CatalogClient;

use super::types::TermMappingRow;

/// Outcome of a mapping write pass
#[derive(Debug, Default)]
pub struct MappingReport {
    /// Term rows whose columns were all assigned
    pub assigned: usize,
    /// Term rows with no columns to assign
    pub skipped: usize,
    /// Term rows that failed, with the failure reason
    pub failures: Vec<MappingFailure>,
}

impl MappingReport {
    /// Whether every non-empty row was assigned
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A failed term row in a mapping write pass
#[derive(Debug)]
pub struct MappingFailure {
    /// Term name of the failed row
    pub glossary_term: String,
    /// Failure reason
    pub reason: String,
}

/// Associate every term with its referencing columns.
///
/// Assignment is idempotent at the catalog boundary (re-assigning an already
/// assigned term reports success), so re-running a pass converges on the
/// same end state.
pub async fn write_mappings(
    catalog: &dyn CatalogClient,
    rows: &[TermMappingRow],
) -> MappingReport {
    let mut report = MappingReport::default();

    for row in rows {
        if row.columns.is_empty() {
            report.skipped += 1;
            continue;
        }

        match catalog.assign_term(&row.term_guid, &row.columns).await {
            Ok(()) => {
                tracing::debug!(
                    term = %row.glossary_term,
                    columns = row.columns.len(),
                    "term assigned"
                );
                report.assigned += 1;
            }
            Err(e) => {
                tracing::warn!(
                    term = %row.glossary_term,
                    error = %e,
                    "term assignment failed"
                );
                report.failures.push(MappingFailure {
                    glossary_term: row.glossary_term.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}
