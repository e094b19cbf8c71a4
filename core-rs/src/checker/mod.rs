//! The construct accumulator and the classification API.
//!
//! One classification run checks every construct in the predicate table
//! against one knowledge source. Constructs are checked on independent
//! worker tasks (bounded by a semaphore, sized to what the backend can
//! take), but every detection funnels through the single consumer loop that
//! owns the construct set, so the merge rule always sees a serialized stream.
//! Any adapter error abandons the run; a partially accumulated set is never
//! returned.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::canonical::{ConstructCanonicalizer, SubsumptionTable};
use crate::construct::{Construct, ConstructSet};
use crate::errors::{DlxError, Result};
use crate::languages::{self, Language};
use crate::predicates::{Predicate, PredicateTable};
use crate::source::KnowledgeSource;

/// Tuning knobs for one checker instance.
#[derive(Debug, Clone)]
pub struct CheckerOptions {
    /// Upper bound on concurrently evaluated constructs. Size this to the
    /// backend: a remote endpoint usually wants a small pool.
    pub max_concurrent: usize,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self { max_concurrent: 4 }
    }
}

/// Classifies the DL expressivity of one ontology.
pub struct ExpressivityChecker {
    source: Arc<dyn KnowledgeSource>,
    canonicalizer: Arc<dyn ConstructCanonicalizer>,
    table: &'static PredicateTable,
    options: CheckerOptions,
}

impl ExpressivityChecker {
    pub fn new(source: impl KnowledgeSource + 'static) -> Self {
        Self::from_arc(Arc::new(source))
    }

    pub fn from_arc(source: Arc<dyn KnowledgeSource>) -> Self {
        Self {
            source,
            canonicalizer: Arc::new(SubsumptionTable::standard()),
            table: PredicateTable::standard(),
            options: CheckerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CheckerOptions) -> Self {
        self.options = options;
        self
    }

    /// Swaps the subsumption oracle. Useful when a different table version
    /// should decide which constructs imply which.
    pub fn with_canonicalizer(mut self, canonicalizer: impl ConstructCanonicalizer + 'static) -> Self {
        self.canonicalizer = Arc::new(canonicalizer);
        self
    }

    /// Runs the full pipeline: table self-check, accumulation,
    /// canonicalization. Either returns a complete result or fails; there is
    /// no partial-success mode. Dropping the returned future cancels any
    /// in-flight predicate evaluations.
    pub async fn classify(&self) -> Result<ExpressivityResult> {
        self.table.self_check()?;

        info!(source = %self.source.describe(), "classifying ontology expressivity");
        let detected = self.accumulate().await?;
        let canonical = self.canonicalizer.canonicalize(detected);
        info!(
            name = %canonical.description_logic_name(),
            constructs = canonical.len(),
            "classification complete"
        );
        Ok(ExpressivityResult::new(canonical))
    }

    async fn accumulate(&self) -> Result<ConstructSet> {
        let permits = self.options.max_concurrent.max(1);
        let semaphore = Arc::new(Semaphore::new(permits));
        let mut workers = JoinSet::new();

        let table: &'static PredicateTable = self.table;
        for (construct, predicates) in table.iter() {
            let source = Arc::clone(&self.source);
            let semaphore = Arc::clone(&semaphore);
            workers.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|_| DlxError::Internal("worker pool closed".to_string()))?;
                check_construct(source.as_ref(), construct, predicates).await
            });
        }

        // Single consumer: detections land here one at a time, so the merge
        // rule's read-modify-write on the set is serialized. The first error
        // aborts the run and drops the remaining workers.
        let mut set = ConstructSet::new();
        while let Some(joined) = workers.join_next().await {
            let outcome = joined
                .map_err(|e| DlxError::Internal(format!("construct worker failed: {}", e)))?;
            if let Some(construct) = outcome? {
                set.insert(construct);
            }
        }
        Ok(set)
    }
}

/// Evaluates one construct's predicates in declared order, stopping at the
/// first hit. Absence means every predicate was evaluated and answered
/// `false`.
async fn check_construct(
    source: &dyn KnowledgeSource,
    construct: Construct,
    predicates: &[Predicate],
) -> Result<Option<Construct>> {
    info!(%construct, "checking construct");
    for predicate in predicates {
        if source.evaluate(predicate).await? {
            info!(%construct, pattern = predicate.pattern(), "construct present");
            return Ok(Some(construct));
        }
        debug!(%construct, pattern = predicate.pattern(), "no match");
    }
    Ok(None)
}

/// The outcome of one classification: the canonical construct set plus the
/// derived views on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressivityResult {
    constructs: ConstructSet,
}

impl ExpressivityResult {
    pub(crate) fn new(constructs: ConstructSet) -> Self {
        Self { constructs }
    }

    /// The canonical (subsumption-minimal) construct set.
    pub fn constructs(&self) -> &ConstructSet {
        &self.constructs
    }

    pub fn has(&self, construct: Construct) -> bool {
        self.constructs.contains(construct)
    }

    /// The conventional DL acronym for the detected constructs.
    pub fn description_logic_name(&self) -> String {
        self.constructs.description_logic_name()
    }

    /// True iff `language` can express every detected construct.
    pub fn is_within(&self, language: &Language) -> bool {
        language.covers(&self.constructs)
    }

    /// The minimal covering languages: each can express the ontology and no
    /// sub-language of it can. Never empty.
    pub fn expressible_in_languages(&self) -> Vec<&'static Language> {
        languages::minimal_covering(&self.constructs)
    }
}
