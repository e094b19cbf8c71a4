//! Remote SPARQL endpoint adapter.
//!
//! Speaks the SPARQL 1.1 Protocol: the ASK query goes out as a form-encoded
//! POST and the answer comes back as a
//! `application/sparql-results+json` document with a top-level `boolean`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::{DlxError, Result};
use crate::predicates::Predicate;
use crate::source::KnowledgeSource;

/// Applied per predicate evaluation unless the caller supplies its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Boolean results document. SELECT-shaped answers leave `boolean` empty,
/// which we treat as an endpoint fault.
#[derive(Debug, Deserialize)]
struct AskResponse {
    boolean: Option<bool>,
}

/// An ontology behind a SPARQL query service, optionally scoped to one named
/// graph of the endpoint's dataset.
pub struct SparqlEndpointSource {
    endpoint: String,
    graph: Option<String>,
    client: Client,
}

impl SparqlEndpointSource {
    pub fn new(endpoint: &str, graph: Option<String>) -> Result<Self> {
        Self::with_timeout(endpoint, graph, DEFAULT_TIMEOUT)
    }

    /// `timeout` bounds every single predicate evaluation; expiry surfaces as
    /// a connectivity error, never as "pattern absent".
    pub fn with_timeout(endpoint: &str, graph: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DlxError::Connectivity(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.trim().to_string(),
            graph: graph
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty()),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn graph(&self) -> Option<&str> {
        self.graph.as_deref()
    }

    async fn ask(&self, query: &str) -> Result<bool> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .form(&[("query", query)])
            .send()
            .await
            .map_err(|e| DlxError::Connectivity(format!("{}: {}", self.endpoint, e)))?;

        let status = response.status();
        if status.is_client_error() {
            // The endpoint understood us and said no: that is a broken query,
            // not a broken connection.
            return Err(DlxError::Query(format!(
                "{} rejected the query with {}",
                self.endpoint, status
            )));
        }
        if !status.is_success() {
            return Err(DlxError::Connectivity(format!(
                "{} answered {}",
                self.endpoint, status
            )));
        }

        let body: AskResponse = response
            .json()
            .await
            .map_err(|e| DlxError::Query(format!("unreadable results document: {}", e)))?;

        body.boolean.ok_or_else(|| {
            DlxError::Query("results document carries no boolean".to_string())
        })
    }
}

#[async_trait]
impl KnowledgeSource for SparqlEndpointSource {
    async fn evaluate(&self, predicate: &Predicate) -> Result<bool> {
        self.ask(&predicate.ask_query(self.graph.as_deref())).await
    }

    fn describe(&self) -> String {
        match &self.graph {
            Some(graph) => format!("{} (graph <{}>)", self.endpoint, graph),
            None => self.endpoint.clone(),
        }
    }
}
