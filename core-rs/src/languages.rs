//! Static reference table of standard DL languages.
//!
//! Each language is defined by the set of constructs it can express;
//! component sets are closed under expressibility (a language carrying
//! complex role axioms also lists chains, hierarchy and transitivity, and
//! every AL descendant lists domain/range axioms, since `∃r.⊤ ⊑ C` and
//! `⊤ ⊑ ∀r.C` express them). The sub-language relation is the strict
//! proper-subset order on component sets. The table is loaded once and never
//! mutated.

use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;

use crate::construct::{Construct, ConstructSet};

/// A named standard DL language.
pub struct Language {
    name: &'static str,
    components: BTreeSet<Construct>,
}

impl Language {
    fn new(name: &'static str, components: BTreeSet<Construct>) -> Self {
        Self { name, components }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The constructs this language can express, in canonical order.
    pub fn components(&self) -> impl Iterator<Item = Construct> + '_ {
        self.components.iter().copied()
    }

    pub fn has_component(&self, construct: Construct) -> bool {
        self.components.contains(&construct)
    }

    /// True iff every construct in `set` is a component of this language.
    pub fn covers(&self, set: &ConstructSet) -> bool {
        set.iter().all(|c| self.components.contains(&c))
    }

    /// Strict sub-language test: proper inclusion of component sets.
    pub fn is_sub_language_of(&self, other: &Language) -> bool {
        self.components.len() < other.components.len()
            && self.components.is_subset(&other.components)
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Language {}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// All known languages, weakest families first.
pub fn languages() -> &'static [Language] {
    LANGUAGES.as_slice()
}

/// Looks a language up by its conventional name (e.g. `"SHIQ"`).
pub fn by_name(name: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.name == name)
}

/// True iff `language` covers `set` and no strict sub-language does too:
/// the languages for which this holds form the antichain of minimal covers.
pub fn minimal_for(language: &Language, set: &ConstructSet) -> bool {
    if !language.covers(set) {
        return false;
    }
    LANGUAGES
        .iter()
        .filter(|p| p.is_sub_language_of(language))
        .all(|p| !minimal_for(p, set))
}

/// Every language that covers `set` with no redundant generality. Non-empty
/// for every set: the table's top element carries the full alphabet.
pub fn minimal_covering(set: &ConstructSet) -> Vec<&'static Language> {
    LANGUAGES.iter().filter(|l| minimal_for(l, set)).collect()
}

static LANGUAGES: Lazy<Vec<Language>> = Lazy::new(build_language_table);

fn build_language_table() -> Vec<Language> {
    use crate::construct::Construct::*;

    fn set(constructs: &[Construct]) -> BTreeSet<Construct> {
        constructs.iter().copied().collect()
    }

    fn with(base: &BTreeSet<Construct>, extra: &[Construct]) -> BTreeSet<Construct> {
        let mut combined = base.clone();
        combined.extend(extra.iter().copied());
        combined
    }

    let fl0 = set(&[ConceptIntersection, UniversalRestriction]);
    let flminus = with(&fl0, &[LimitedExistential]);
    let fl = with(&flminus, &[RoleDomainRange]);
    let al = set(&[
        AtomicNegation,
        ConceptIntersection,
        UniversalRestriction,
        LimitedExistential,
        RoleDomainRange,
    ]);
    let el = set(&[ConceptIntersection, FullExistential, LimitedExistential]);
    let elpp = with(
        &el,
        &[
            Nominals,
            RoleReflexivityChains,
            RoleHierarchy,
            RoleTransitive,
            RoleDomainRange,
            Datatypes,
        ],
    );
    let alc = with(
        &al,
        &[ConceptComplexNegation, ConceptUnion, FullExistential],
    );
    let s = with(&alc, &[RoleTransitive]);
    let sh = with(&s, &[RoleHierarchy]);
    let shoin = with(&sh, &[Nominals, RoleInverse, NumberRestriction, Functionality]);
    let shoiq = with(
        &sh,
        &[
            Nominals,
            RoleInverse,
            QualifiedNumberRestriction,
            NumberRestriction,
            Functionality,
        ],
    );
    let sroiq = with(&shoiq, &[RoleComplex, RoleReflexivityChains]);

    vec![
        Language::new("FL0", fl0),
        Language::new("FL-", flminus),
        Language::new("FL", fl),
        Language::new("AL", al.clone()),
        Language::new("EL", el),
        Language::new("EL++", elpp),
        Language::new("ALE", with(&al, &[FullExistential])),
        Language::new("ALU", with(&al, &[ConceptUnion])),
        Language::new("ALC", alc.clone()),
        Language::new("ALC(D)", with(&alc, &[Datatypes])),
        Language::new("ALCF", with(&alc, &[Functionality])),
        Language::new("ALCN", with(&alc, &[NumberRestriction, Functionality])),
        Language::new(
            "ALCQ",
            with(
                &alc,
                &[QualifiedNumberRestriction, NumberRestriction, Functionality],
            ),
        ),
        Language::new("ALCI", with(&alc, &[RoleInverse])),
        Language::new("ALCO", with(&alc, &[Nominals])),
        Language::new("ALCH", with(&alc, &[RoleHierarchy])),
        Language::new("S", s.clone()),
        Language::new("SH", sh.clone()),
        Language::new("SHF", with(&sh, &[Functionality])),
        Language::new("SHN", with(&sh, &[NumberRestriction, Functionality])),
        Language::new("SHI", with(&sh, &[RoleInverse])),
        Language::new("SHIF", with(&sh, &[RoleInverse, Functionality])),
        Language::new(
            "SHIF(D)",
            with(&sh, &[RoleInverse, Functionality, Datatypes]),
        ),
        Language::new(
            "SHIN",
            with(
                &sh,
                &[RoleInverse, NumberRestriction, Functionality],
            ),
        ),
        Language::new(
            "SHIQ",
            with(
                &sh,
                &[
                    RoleInverse,
                    QualifiedNumberRestriction,
                    NumberRestriction,
                    Functionality,
                ],
            ),
        ),
        Language::new("SHO", with(&sh, &[Nominals])),
        Language::new("SHOIN", shoin.clone()),
        Language::new("SHOIN(D)", with(&shoin, &[Datatypes])),
        Language::new("SHOIQ", shoiq.clone()),
        Language::new("SHOIQ(D)", with(&shoiq, &[Datatypes])),
        Language::new("SROIQ", sroiq.clone()),
        Language::new("SROIQ(D)", with(&sroiq, &[Datatypes])),
    ]
}
