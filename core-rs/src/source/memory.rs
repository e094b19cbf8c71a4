//! In-memory graph adapter backed by an oxigraph [`Store`].

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use oxigraph::io::RdfFormat;
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;

use crate::errors::{DlxError, Result};
use crate::predicates::Predicate;
use crate::source::KnowledgeSource;

/// An ontology materialized in process memory. Deterministic; has no
/// connectivity failure mode.
pub struct MemoryGraphSource {
    store: Store,
}

impl MemoryGraphSource {
    /// Wraps a store that is already loaded.
    pub fn from_store(store: Store) -> Self {
        Self { store }
    }

    /// Parses an ontology from Turtle text.
    pub fn from_turtle(text: &str) -> Result<Self> {
        Self::from_reader(RdfFormat::Turtle, text.as_bytes())
    }

    /// Loads an ontology document, picking the format from the file
    /// extension: `.ttl`/`.turtle` Turtle, `.nt` N-Triples,
    /// `.rdf`/`.owl`/`.xml` RDF/XML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let format = match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("ttl") | Some("turtle") => RdfFormat::Turtle,
            Some("nt") => RdfFormat::NTriples,
            Some("rdf") | Some("owl") | Some("xml") => RdfFormat::RdfXml,
            _ => {
                return Err(DlxError::Parse(format!(
                    "cannot guess RDF format of {}",
                    path.display()
                )))
            }
        };
        let data = fs::read(path)?;
        Self::from_reader(format, data.as_slice())
    }

    fn from_reader(format: RdfFormat, data: &[u8]) -> Result<Self> {
        let store = Store::new().map_err(|e| DlxError::Store(e.to_string()))?;
        store
            .load_from_reader(format, data)
            .map_err(|e| DlxError::Parse(e.to_string()))?;
        Ok(Self { store })
    }

    /// Runs an ASK query against the store.
    pub fn ask(&self, query: &str) -> Result<bool> {
        let results = self
            .store
            .query(query)
            .map_err(|e| DlxError::Query(e.to_string()))?;

        match results {
            QueryResults::Boolean(answer) => Ok(answer),
            _ => Err(DlxError::Query(
                "expected a boolean ASK result".to_string(),
            )),
        }
    }
}

#[async_trait]
impl KnowledgeSource for MemoryGraphSource {
    async fn evaluate(&self, predicate: &Predicate) -> Result<bool> {
        self.ask(&predicate.ask_query(None))
    }

    fn describe(&self) -> String {
        "in-memory graph".to_string()
    }
}
