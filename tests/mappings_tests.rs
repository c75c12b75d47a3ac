//! Mapping transpose and write-path tests against an in-memory catalog

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::runtime::Runtime;

use purview_functions::catalog::{
    AssetDetail, CatalogClient, CatalogError, CatalogResult, GlossaryTerm, SearchFilter,
    SearchResult,
};
use purview_functions::mappings::{
    MappingRow, parse_mapping_csv, transpose_mappings, write_mappings,
};

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

/// Catalog fake with a fixed glossary and recorded term assignments
struct FakeGlossary {
    terms: HashMap<String, String>,
    assignments: Mutex<Vec<(String, Vec<String>)>>,
    failing_terms: Vec<String>,
}

impl FakeGlossary {
    fn new(terms: &[(&str, &str)]) -> Self {
        Self {
            terms: terms
                .iter()
                .map(|(name, guid)| (name.to_string(), guid.to_string()))
                .collect(),
            assignments: Mutex::new(Vec::new()),
            failing_terms: Vec::new(),
        }
    }

    fn with_failing_term(mut self, guid: &str) -> Self {
        self.failing_terms.push(guid.to_string());
        self
    }
}

#[async_trait]
impl CatalogClient for FakeGlossary {
    async fn search(
        &self,
        _keywords: &str,
        _filter: &SearchFilter,
    ) -> CatalogResult<Vec<SearchResult>> {
        Ok(Vec::new())
    }

    async fn get_asset(&self, guid: &str) -> CatalogResult<AssetDetail> {
        Err(CatalogError::Transport {
            context: format!("entity {guid}"),
            reason: "not served by this fake".to_string(),
        })
    }

    async fn get_term_by_name(&self, name: &str) -> CatalogResult<GlossaryTerm> {
        match self.terms.get(name) {
            Some(guid) => Ok(GlossaryTerm {
                guid: guid.clone(),
                name: Some(name.to_string()),
            }),
            None => Err(CatalogError::TermNotFound(name.to_string())),
        }
    }

    async fn assign_term(&self, term_guid: &str, entity_guids: &[String]) -> CatalogResult<()> {
        if self.failing_terms.iter().any(|t| t == term_guid) {
            return Err(CatalogError::Transport {
                context: format!("assign term {term_guid}"),
                reason: "HTTP 500".to_string(),
            });
        }
        self.assignments
            .lock()
            .unwrap()
            .push((term_guid.to_string(), entity_guids.to_vec()));
        Ok(())
    }
}

fn row(guid: &str, terms: Option<&str>) -> MappingRow {
    MappingRow {
        column_guid: guid.to_string(),
        glossary_terms: terms.map(str::to_string),
    }
}

#[test]
fn test_transpose_one_row_per_distinct_term() {
    let rt = runtime();
    rt.block_on(async {
        let catalog = FakeGlossary::new(&[("PII", "term-pii"), ("Finance", "term-fin")]);
        let rows = vec![row("c1", Some("PII,Finance")), row("c2", Some("Finance"))];

        let transposed = transpose_mappings(&catalog, &rows).await.unwrap();

        assert_eq!(transposed.len(), 2);
        assert_eq!(transposed[0].glossary_term, "PII");
        assert_eq!(transposed[0].term_guid, "term-pii");
        assert_eq!(transposed[0].columns, vec!["c1"]);
        assert_eq!(transposed[1].glossary_term, "Finance");
        assert_eq!(transposed[1].columns, vec!["c1", "c2"]);
    });
}

#[test]
fn test_transpose_exact_term_matching() {
    let rt = runtime();
    rt.block_on(async {
        // "Finance" is a prefix of "FinanceOps"; rows must not cross-match
        let catalog =
            FakeGlossary::new(&[("Finance", "term-fin"), ("FinanceOps", "term-finops")]);
        let rows = vec![row("c1", Some("Finance")), row("c2", Some("FinanceOps"))];

        let transposed = transpose_mappings(&catalog, &rows).await.unwrap();

        assert_eq!(transposed[0].columns, vec!["c1"]);
        assert_eq!(transposed[1].columns, vec!["c2"]);
    });
}

#[test]
fn test_transpose_empty_terms_yield_empty_output() {
    let rt = runtime();
    rt.block_on(async {
        let catalog = FakeGlossary::new(&[]);
        let rows = vec![row("c1", None), row("c2", Some(""))];

        let transposed = transpose_mappings(&catalog, &rows).await.unwrap();
        assert!(transposed.is_empty());
    });
}

#[test]
fn test_unknown_term_aborts_whole_transpose() {
    let rt = runtime();
    rt.block_on(async {
        // "Mystery" is not in the glossary; nothing is returned for "PII" either
        let catalog = FakeGlossary::new(&[("PII", "term-pii")]);
        let rows = vec![row("c1", Some("PII")), row("c2", Some("Mystery"))];

        let result = transpose_mappings(&catalog, &rows).await;
        assert!(result.is_err());
    });
}

#[test]
fn test_write_mappings_continues_past_failures() {
    let rt = runtime();
    rt.block_on(async {
        let catalog = FakeGlossary::new(&[("PII", "term-pii"), ("Finance", "term-fin")])
            .with_failing_term("term-pii");
        let rows = vec![row("c1", Some("PII,Finance")), row("c2", Some("Finance"))];

        let transposed = transpose_mappings(&catalog, &rows).await.unwrap();
        let report = write_mappings(&catalog, &transposed).await;

        assert_eq!(report.assigned, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].glossary_term, "PII");
        assert!(!report.is_clean());

        // the Finance row was still written despite the PII failure
        let assignments = catalog.assignments.lock().unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].0, "term-fin");
        assert_eq!(assignments[0].1, vec!["c1", "c2"]);
    });
}

#[test]
fn test_write_mappings_rerun_converges() {
    let rt = runtime();
    rt.block_on(async {
        let catalog = FakeGlossary::new(&[("PII", "term-pii")]);
        let rows = vec![row("c1", Some("PII"))];
        let transposed = transpose_mappings(&catalog, &rows).await.unwrap();

        let first = write_mappings(&catalog, &transposed).await;
        let second = write_mappings(&catalog, &transposed).await;

        assert_eq!(first.assigned, 1);
        assert_eq!(second.assigned, 1);
        assert!(first.is_clean() && second.is_clean());
    });
}

#[test]
fn test_blob_csv_to_transposed_rows() {
    let rt = runtime();
    rt.block_on(async {
        let catalog = FakeGlossary::new(&[("PII", "term-pii"), ("GDPR", "term-gdpr")]);
        let csv = b"column_guid,glossaryTerms\nc1,\"PII,GDPR\"\nc2,PII\nc3,\n";

        let rows = parse_mapping_csv(csv).unwrap();
        let transposed = transpose_mappings(&catalog, &rows).await.unwrap();

        assert_eq!(transposed.len(), 2);
        assert_eq!(transposed[0].glossary_term, "PII");
        assert_eq!(transposed[0].columns, vec!["c1", "c2"]);
        assert_eq!(transposed[1].glossary_term, "GDPR");
        assert_eq!(transposed[1].columns, vec!["c1"]);
    });
}
