//! The DL construct alphabet and the per-ontology construct set.
//!
//! `Construct` is a closed enumeration of the syntactic expressivity features
//! the checker can detect. The declaration order is the canonical total order:
//! it drives deterministic iteration, the ordering of reported constructs and
//! the letter order of the rendered DL name.

use std::collections::BTreeSet;
use std::fmt;

/// A syntactic DL expressivity feature.
///
/// The four AL-base constructs come first and share the `AL` display token;
/// the rest carry the conventional single letter of DL naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Construct {
    /// Atomic negation of concept names (AL base).
    AtomicNegation,
    /// Concept intersection (AL base).
    ConceptIntersection,
    /// Universal restriction (AL base).
    UniversalRestriction,
    /// Existential quantification limited to `owl:Thing` (AL base).
    LimitedExistential,
    /// Full existential quantification (E).
    FullExistential,
    /// Complex concept negation (C).
    ConceptComplexNegation,
    /// Concept union (U).
    ConceptUnion,
    /// Role hierarchy (H).
    RoleHierarchy,
    /// Role reflexivity and role chains (Rr).
    RoleReflexivityChains,
    /// Complex role axioms (R).
    RoleComplex,
    /// Nominals (O).
    Nominals,
    /// Inverse roles (I).
    RoleInverse,
    /// Role functionality (F).
    Functionality,
    /// Unqualified number restriction (N).
    NumberRestriction,
    /// Qualified number restriction (Q).
    QualifiedNumberRestriction,
    /// Role transitivity.
    RoleTransitive,
    /// Role domain and range axioms.
    RoleDomainRange,
    /// Datatypes and data ranges ((D)).
    Datatypes,
}

impl Construct {
    /// Every construct, in canonical order.
    pub const ALL: [Construct; 18] = [
        Construct::AtomicNegation,
        Construct::ConceptIntersection,
        Construct::UniversalRestriction,
        Construct::LimitedExistential,
        Construct::FullExistential,
        Construct::ConceptComplexNegation,
        Construct::ConceptUnion,
        Construct::RoleHierarchy,
        Construct::RoleReflexivityChains,
        Construct::RoleComplex,
        Construct::Nominals,
        Construct::RoleInverse,
        Construct::Functionality,
        Construct::NumberRestriction,
        Construct::QualifiedNumberRestriction,
        Construct::RoleTransitive,
        Construct::RoleDomainRange,
        Construct::Datatypes,
    ];

    /// The token this construct contributes to a DL name.
    ///
    /// Domain/range axioms contribute nothing: conventional DL acronyms never
    /// surface them.
    pub fn token(self) -> &'static str {
        match self {
            Construct::AtomicNegation
            | Construct::ConceptIntersection
            | Construct::UniversalRestriction
            | Construct::LimitedExistential => "AL",
            Construct::FullExistential => "E",
            Construct::ConceptComplexNegation => "C",
            Construct::ConceptUnion => "U",
            Construct::RoleHierarchy => "H",
            Construct::RoleReflexivityChains => "Rr",
            Construct::RoleComplex => "R",
            Construct::Nominals => "O",
            Construct::RoleInverse => "I",
            Construct::Functionality => "F",
            Construct::NumberRestriction => "N",
            Construct::QualifiedNumberRestriction => "Q",
            Construct::RoleTransitive => "+",
            Construct::RoleDomainRange => "",
            Construct::Datatypes => "(D)",
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The constructs accumulated for one ontology.
///
/// Iteration follows the canonical construct order. All mutation goes through
/// [`ConstructSet::insert`], which keeps the role alphabet reduced at every
/// intermediate step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructSet {
    inner: BTreeSet<Construct>,
}

impl ConstructSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a construct, applying the role reduction Rr + I = R + I: the
    /// moment reflexivity/chains and inverse roles would both be members, the
    /// set holds inverse roles plus complex role axioms instead, whichever of
    /// the pair landed first.
    pub fn insert(&mut self, construct: Construct) {
        match construct {
            Construct::RoleInverse if self.inner.contains(&Construct::RoleReflexivityChains) => {
                self.inner.remove(&Construct::RoleReflexivityChains);
                self.inner.insert(Construct::RoleInverse);
                self.inner.insert(Construct::RoleComplex);
            }
            Construct::RoleReflexivityChains if self.inner.contains(&Construct::RoleInverse) => {
                self.inner.insert(Construct::RoleComplex);
            }
            c => {
                self.inner.insert(c);
            }
        }
    }

    pub fn contains(&self, construct: Construct) -> bool {
        self.inner.contains(&construct)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Constructs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Construct> + '_ {
        self.inner.iter().copied()
    }

    /// Renders the DL name: the in-order concatenation of member tokens.
    /// Adjacent equal tokens collapse, so the AL base renders once.
    pub fn description_logic_name(&self) -> String {
        let mut name = String::new();
        let mut last = "";
        for construct in &self.inner {
            let token = construct.token();
            if token.is_empty() || token == last {
                continue;
            }
            name.push_str(token);
            last = token;
        }
        name
    }
}

impl FromIterator<Construct> for ConstructSet {
    fn from_iter<T: IntoIterator<Item = Construct>>(iter: T) -> Self {
        let mut set = ConstructSet::new();
        for construct in iter {
            set.insert(construct);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ConstructSet {
    type Item = Construct;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, Construct>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter().copied()
    }
}
