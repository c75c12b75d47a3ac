//! Types for column-to-glossary-term mappings

use serde::{Deserialize, Serialize};

/// One row of the input mapping CSV
///
/// `glossaryTerms` holds zero or more comma-joined term names. An empty or
/// absent cell means the column maps to no terms.
#[derive(Debug, Clone, Deserialize)]
pub struct MappingRow {
    /// Column GUID
    pub column_guid: String,
    /// Comma-joined glossary term names, if any
    #[serde(default, rename = "glossaryTerms")]
    pub glossary_terms: Option<String>,
}

impl MappingRow {
    /// Iterate the non-empty term names of this row
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.glossary_terms
            .as_deref()
            .unwrap_or("")
            .split(',')
            .filter(|t| !t.is_empty())
    }

    /// Whether this row references the given term
    pub fn references(&self, term: &str) -> bool {
        self.terms().any(|t| t == term)
    }
}

/// One row of the transposed output: a term and every column referencing it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermMappingRow {
    /// Term name as it appeared in the input
    #[serde(rename = "glossaryTerm")]
    pub glossary_term: String,
    /// Term GUID resolved from the catalog
    pub term_guid: String,
    /// GUIDs of every column whose input row references this term
    pub columns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(guid: &str, terms: Option<&str>) -> MappingRow {
        MappingRow {
            column_guid: guid.to_string(),
            glossary_terms: terms.map(str::to_string),
        }
    }

    #[test]
    fn test_terms_splits_on_commas() {
        let r = row("c1", Some("PII,Finance"));
        let terms: Vec<&str> = r.terms().collect();
        assert_eq!(terms, vec!["PII", "Finance"]);
    }

    #[test]
    fn test_terms_skips_empty_pieces() {
        assert_eq!(row("c1", None).terms().count(), 0);
        assert_eq!(row("c1", Some("")).terms().count(), 0);

        let r = row("c1", Some("PII,,Finance,"));
        let terms: Vec<&str> = r.terms().collect();
        assert_eq!(terms, vec!["PII", "Finance"]);
    }

    #[test]
    fn test_references_requires_exact_term() {
        let r = row("c1", Some("PII,Finance"));
        assert!(r.references("PII"));
        assert!(r.references("Finance"));
        // a term that is a prefix or suffix of another must not match
        assert!(!r.references("Fin"));
        assert!(!r.references("nance"));
        assert!(!r.references("PII,Finance"));
    }
}
