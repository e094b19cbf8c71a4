/**
 * predicates/mod.rs
 * The construct detection table: one ordered list of SPARQL graph patterns
 * per construct, following the OWL 2 mapping to RDF graphs
 * (https://www.w3.org/TR/owl2-mapping-to-rdf/).
 */

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use oxigraph::sparql::Query;

use crate::construct::Construct;
use crate::errors::{DlxError, Result};

/// Prefix block shared by every generated ASK query.
pub const SPARQL_PREFIXES: &str = "PREFIX owl:<http://www.w3.org/2002/07/owl#> PREFIX rdfs:<http://www.w3.org/2000/01/rdf-schema#> PREFIX rdf:<http://www.w3.org/1999/02/22-rdf-syntax-ns#>";

/// One way a construct can show up in the statement graph: the body of an
/// ASK query. A predicate belongs to exactly one construct; its position in
/// that construct's list is the short-circuit priority, nothing more, since
/// any true predicate is sufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicate {
    construct: Construct,
    pattern: &'static str,
}

impl Predicate {
    pub fn construct(&self) -> Construct {
        self.construct
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// The full ASK query for this pattern, optionally scoped to a named
    /// graph.
    pub fn ask_query(&self, graph: Option<&str>) -> String {
        match graph {
            Some(graph) => format!(
                "{} ASK FROM <{}> WHERE {{ {} }}",
                SPARQL_PREFIXES, graph, self.pattern
            ),
            None => format!("{} ASK WHERE {{ {} }}", SPARQL_PREFIXES, self.pattern),
        }
    }
}

/// Construct → ordered predicates, built once at startup and immutable
/// afterwards.
pub struct PredicateTable {
    entries: BTreeMap<Construct, Vec<Predicate>>,
}

impl PredicateTable {
    /// The process-wide detection table.
    pub fn standard() -> &'static PredicateTable {
        static TABLE: Lazy<PredicateTable> = Lazy::new(PredicateTable::build_standard);
        &TABLE
    }

    /// Registers the patterns for one construct. Keying a construct twice is
    /// a table-authoring bug, not a runtime condition.
    fn add(&mut self, construct: Construct, patterns: &[&'static str]) {
        let predicates = patterns
            .iter()
            .map(|pattern| Predicate { construct, pattern })
            .collect();
        if self.entries.insert(construct, predicates).is_some() {
            panic!("construct {:?} is already in the predicate table", construct);
        }
    }

    /// The predicates registered for `construct`, in declared order.
    pub fn predicates(&self, construct: Construct) -> &[Predicate] {
        self.entries
            .get(&construct)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Entries in canonical construct order.
    pub fn iter(&self) -> impl Iterator<Item = (Construct, &[Predicate])> {
        self.entries.iter().map(|(c, p)| (*c, p.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses every pattern once. A failure here is a bug in this table and
    /// must abort before any detection work starts.
    pub fn self_check(&self) -> Result<()> {
        for (construct, predicates) in self.iter() {
            for predicate in predicates {
                Query::parse(&predicate.ask_query(None), None).map_err(|e| {
                    DlxError::MalformedPredicate(format!(
                        "{:?}: {} ({})",
                        construct,
                        e,
                        predicate.pattern()
                    ))
                })?;
            }
        }
        Ok(())
    }

    fn build_standard() -> PredicateTable {
        let mut table = PredicateTable {
            entries: BTreeMap::new(),
        };

        table.add(
            Construct::RoleInverse,
            &[
                "?x owl:inverseOf ?y.",              // ObjectInverseOf
                "?x a owl:SymmetricProperty.",       // SymmetricObjectProperty
                "?x a owl:InverseFunctionalProperty.", // InverseFunctionalObjectProperty
            ],
        );

        table.add(
            Construct::Datatypes,
            &[
                "?x rdf:type owl:DatatypeProperty.", // DataProperty
                "?x owl:datatypeComplementOf ?y.",   // DataComplementOf
                "?x owl:oneOf ?y. ?y rdf:first ?z. FILTER(isLiteral(?z))", // DataOneOf
                "?x owl:onDatatype ?y. ?x owl:withRestrictions ?z.", // DatatypeRestriction
                "?x owl:hasValue ?y. FILTER(isLiteral(?y))", // DataHasValue
            ],
        );

        table.add(
            Construct::ConceptIntersection,
            &[
                "?x owl:intersectionOf ?y.", // ObjectIntersectionOf
            ],
        );

        table.add(
            Construct::ConceptUnion,
            &[
                "?x owl:unionOf ?y.", // ObjectUnionOf
                "?x owl:oneOf ?y. ?y rdf:first ?z. FILTER(isURI(?z))", // ObjectOneOf
                "?x owl:differentFrom ?y.", // DifferentIndividuals
                "?x a owl:AllDifferent. ?x owl:members ?y.", // DifferentIndividuals (n-ary)
                "?x owl:disjointUnionOf ?y.", // DisjointUnion
            ],
        );

        // A complement is always tracked as complex negation, so atomic
        // negation has no pattern of its own.
        table.add(Construct::AtomicNegation, &[]);

        table.add(
            Construct::ConceptComplexNegation,
            &[
                "?x owl:complementOf ?y.",  // ObjectComplementOf
                "?x owl:disjointWith ?y.",  // DisjointClasses
                "?x a owl:AllDisjointClasses. ?x owl:members ?y.", // DisjointClasses (n-ary)
                "?x owl:differentFrom ?y.", // DifferentIndividuals
                "?x a owl:AllDifferent. ?x owl:members ?y.", // DifferentIndividuals (n-ary)
                "?x owl:disjointUnionOf ?y.", // DisjointUnion
            ],
        );

        table.add(
            Construct::FullExistential,
            &[
                "?x owl:someValuesFrom ?y. FILTER(?y != owl:Thing).", // ObjectSomeValuesFrom
                "?x owl:hasValue ?y. FILTER(isURI(?y))",              // ObjectHasValue
            ],
        );

        table.add(
            Construct::LimitedExistential,
            &[
                "?x owl:someValuesFrom owl:Thing.", // ObjectSomeValuesFrom over Thing
            ],
        );

        table.add(
            Construct::UniversalRestriction,
            &[
                "?x owl:allValuesFrom ?y.", // ObjectAllValuesFrom
            ],
        );

        table.add(
            Construct::Nominals,
            &[
                "?x owl:hasValue ?y. FILTER(isURI(?y))", // ObjectHasValue
                "?x owl:oneOf ?y. ?y rdf:first ?z. FILTER(isURI(?z))", // ObjectOneOf
                "?x owl:differentFrom ?y.", // DifferentIndividuals
                "?x a owl:AllDifferent.",   // DifferentIndividuals (n-ary)
                "?x owl:sameAs ?y.",        // SameIndividual
            ],
        );

        table.add(
            Construct::QualifiedNumberRestriction,
            &[
                "?x owl:minQualifiedCardinality ?y; owl:onClass ?z. FILTER(?z != owl:Thing).", // ObjectMinCardinality
                "?x owl:minQualifiedCardinality ?y; owl:onDataRange ?z. FILTER(?z != rdfs:Literal).", // DataMinCardinality
                "?x owl:qualifiedCardinality ?y; owl:onClass ?z. FILTER(?z != owl:Thing).", // ObjectExactCardinality
                "?x owl:qualifiedCardinality ?y; owl:onDataRange ?z. FILTER(?z != rdfs:Literal).", // DataExactCardinality
                "?x owl:maxQualifiedCardinality ?y; owl:onClass ?z. FILTER(?z != owl:Thing).", // ObjectMaxCardinality
                "?x owl:maxQualifiedCardinality ?y; owl:onDataRange ?z. FILTER(?z != rdfs:Literal).", // DataMaxCardinality
            ],
        );

        table.add(
            Construct::NumberRestriction,
            &[
                "?x owl:minCardinality ?y.", // Object/DataMinCardinality
                "?x owl:minQualifiedCardinality ?y; owl:onClass owl:Thing.", // ObjectMinCardinality over Thing
                "?x owl:minQualifiedCardinality ?y; owl:onDataRange rdfs:Literal.", // DataMinCardinality over Literal
                "?x owl:cardinality ?y.", // Object/DataExactCardinality
                "?x owl:qualifiedCardinality ?y; owl:onClass owl:Thing.", // ObjectExactCardinality over Thing
                "?x owl:qualifiedCardinality ?y; owl:onDataRange rdfs:Literal.", // DataExactCardinality over Literal
                "?x owl:maxCardinality ?y.", // Object/DataMaxCardinality
                "?x owl:maxQualifiedCardinality ?y; owl:onClass owl:Thing.", // ObjectMaxCardinality over Thing
                "?x owl:maxQualifiedCardinality ?y; owl:onDataRange rdfs:Literal.", // DataMaxCardinality over Literal
            ],
        );

        table.add(
            Construct::RoleComplex,
            &[
                "?x owl:hasSelf ?y.",           // ObjectHasSelf
                "?x a owl:AsymmetricProperty.", // AsymmetricObjectProperty
                "?x owl:propertyDisjointWith ?y. ?x a owl:ObjectProperty. ?y a owl:ObjectProperty.", // DisjointObjectProperties
                "?x a owl:AllDisjointProperties. ?x owl:members ?y. ?y rdf:first ?z. ?z a owl:ObjectProperty.", // DisjointObjectProperties (n-ary)
                "?x a owl:IrreflexiveProperty.", // IrreflexiveObjectProperty
            ],
        );

        table.add(
            Construct::RoleReflexivityChains,
            &[
                "?x a owl:ReflexiveProperty.",    // ReflexiveObjectProperty
                "?x owl:propertyChainAxiom ?y.",  // SubObjectPropertyOf over a chain
            ],
        );

        table.add(
            Construct::RoleDomainRange,
            &[
                "?x rdfs:domain ?y.", // Object/DataPropertyDomain
                "?x rdfs:range ?y.",  // Object/DataPropertyRange
            ],
        );

        table.add(
            Construct::RoleHierarchy,
            &[
                "?x owl:equivalentProperty ?y.", // EquivalentObjectProperties
                "?x rdfs:subPropertyOf ?y.",     // SubObjectPropertyOf
            ],
        );

        table.add(
            Construct::Functionality,
            &[
                "?x a owl:FunctionalProperty.",        // FunctionalObjectProperty
                "?x a owl:InverseFunctionalProperty.", // InverseFunctionalObjectProperty
            ],
        );

        table.add(
            Construct::RoleTransitive,
            &[
                "?x a owl:TransitiveProperty.", // TransitiveObjectProperty
            ],
        );

        table
    }
}
