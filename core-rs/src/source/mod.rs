//! Knowledge-source adapters.
//!
//! A knowledge source answers one question: does the ontology's statement
//! graph contain at least one match for a predicate's pattern? The two
//! backends (an in-memory graph and a remote SPARQL endpoint) sit behind
//! the same capability trait and are selected by configuration.

pub mod memory;
pub mod remote;

use async_trait::async_trait;

use crate::errors::Result;
use crate::predicates::Predicate;

/// A queryable ontology backend.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// Evaluates the predicate against this ontology. A `false` answer means
    /// the pattern has no match; failures are reported as errors, never as
    /// `false`.
    async fn evaluate(&self, predicate: &Predicate) -> Result<bool>;

    /// Human-readable identity for logs.
    fn describe(&self) -> String;
}

pub use memory::MemoryGraphSource;
pub use remote::SparqlEndpointSource;
