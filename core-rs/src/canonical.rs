//! Construct-set canonicalization.
//!
//! A detected construct set may contain members that a stronger member
//! already implies (full existential covers the limited form, complex role
//! axioms cover chains, and so on). The canonicalizer reduces the set to its
//! subsumption-minimal equivalent. It is modeled as an injected capability so
//! a different subsumption table can be swapped in without touching the
//! detection engine.

use std::collections::BTreeSet;

use crate::construct::{Construct, ConstructSet};

/// Reduces a construct set to its subsumption-minimal equivalent.
///
/// Implementations must be pure and deterministic; the checker calls this
/// exactly once per classification, between accumulation and language
/// computation.
pub trait ConstructCanonicalizer: Send + Sync {
    fn canonicalize(&self, set: ConstructSet) -> ConstructSet;
}

/// Constructs implied by a stronger construct, per the standard DL naming
/// conventions. A member of the set is dropped when another member implies it.
const STANDARD_IMPLICATIONS: &[(Construct, &[Construct])] = &[
    (
        Construct::FullExistential,
        &[Construct::LimitedExistential],
    ),
    (
        Construct::ConceptComplexNegation,
        &[Construct::AtomicNegation],
    ),
    (
        Construct::RoleComplex,
        &[
            Construct::RoleReflexivityChains,
            Construct::RoleHierarchy,
            Construct::RoleTransitive,
        ],
    ),
    (
        Construct::RoleReflexivityChains,
        &[Construct::RoleTransitive],
    ),
    (
        Construct::QualifiedNumberRestriction,
        &[Construct::NumberRestriction, Construct::Functionality],
    ),
    (
        Construct::NumberRestriction,
        &[Construct::Functionality],
    ),
];

/// The default canonicalizer: a static implied-constructs table.
#[derive(Debug, Clone)]
pub struct SubsumptionTable {
    implications: &'static [(Construct, &'static [Construct])],
}

impl SubsumptionTable {
    /// Table derived from the standard DL naming literature.
    pub fn standard() -> Self {
        Self {
            implications: STANDARD_IMPLICATIONS,
        }
    }

    /// Constructs implied by `construct` under this table.
    pub fn implied_by(&self, construct: Construct) -> &'static [Construct] {
        self.implications
            .iter()
            .find(|(c, _)| *c == construct)
            .map(|(_, implied)| *implied)
            .unwrap_or(&[])
    }
}

impl Default for SubsumptionTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConstructCanonicalizer for SubsumptionTable {
    fn canonicalize(&self, set: ConstructSet) -> ConstructSet {
        let implied: BTreeSet<Construct> = set
            .iter()
            .flat_map(|c| self.implied_by(c).iter().copied())
            .collect();
        set.iter().filter(|c| !implied.contains(c)).collect()
    }
}
