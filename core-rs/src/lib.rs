//! # dlx-core: DL expressivity detection for ontologies
//!
//! Classifies the logical expressivity of an ontology (a graph of typed
//! statements) by detecting which Description Logic constructs it uses, then
//! reports the canonical DL name and the minimal standard DL languages able
//! to express it. Detection is purely syntactic (a fixed table of ASK
//! patterns per construct), so the checker can size up an unknown ontology
//! (e.g. to pick a compatible reasoner) without doing any reasoning itself.
//!
//! ## Pipeline
//!
//! ```text
//! ontology ──▶ knowledge source ──▶ construct accumulator ──▶ canonicalizer ──▶ languages + DL name
//!              (in-memory graph      (predicate table,          (subsumption
//!               or SPARQL endpoint)   merge rule)                trimming)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use dlx_core::{ExpressivityChecker, MemoryGraphSource};
//!
//! # async fn example() -> dlx_core::Result<()> {
//! let turtle = "@prefix owl: <http://www.w3.org/2002/07/owl#>.
//!               <http://example.com/p> owl:inverseOf <http://example.com/q>.";
//! let source = MemoryGraphSource::from_turtle(turtle)?;
//! let result = ExpressivityChecker::new(source).classify().await?;
//! assert_eq!(result.description_logic_name(), "I");
//! # Ok(())
//! # }
//! ```

pub mod canonical;
pub mod checker;
pub mod construct;
pub mod errors;
pub mod languages;
pub mod predicates;
pub mod source;

pub use canonical::{ConstructCanonicalizer, SubsumptionTable};
pub use checker::{CheckerOptions, ExpressivityChecker, ExpressivityResult};
pub use construct::{Construct, ConstructSet};
pub use errors::{DlxError, Result};
pub use languages::{by_name, languages, Language};
pub use predicates::{Predicate, PredicateTable, SPARQL_PREFIXES};
pub use source::{KnowledgeSource, MemoryGraphSource, SparqlEndpointSource};
