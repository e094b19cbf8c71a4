//! End-to-end classification properties: DL names, minimal covering
//! languages, determinism and the documented edge cases.

use dlx_core::{
    by_name, languages, Construct, ExpressivityChecker, ExpressivityResult, MemoryGraphSource,
};

const PREFIXES: &str = "@prefix : <http://example.com/>. \
                        @prefix owl: <http://www.w3.org/2002/07/owl#>. \
                        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#>. \
                        @prefix xsd: <http://www.w3.org/2001/XMLSchema#>.";

async fn classify(turtle: &str) -> ExpressivityResult {
    let source = MemoryGraphSource::from_turtle(&format!("{} {}", PREFIXES, turtle))
        .expect("test fixture must parse");
    ExpressivityChecker::new(source)
        .classify()
        .await
        .expect("classification must succeed")
}

fn minimal_names(result: &ExpressivityResult) -> Vec<&'static str> {
    result
        .expressible_in_languages()
        .iter()
        .map(|l| l.name())
        .collect()
}

#[tokio::test]
async fn empty_ontology_yields_weakest_languages_and_empty_name() {
    let result = classify("").await;

    assert!(result.constructs().is_empty());
    assert_eq!(result.description_logic_name(), "");
    assert_eq!(minimal_names(&result), vec!["FL0", "EL"]);

    // With nothing to express, every language in the table qualifies.
    for language in languages() {
        assert!(result.is_within(language), "{} should cover the empty set", language);
    }
}

#[tokio::test]
async fn inverse_only_ontology() {
    let result = classify(":x owl:inverseOf :y.").await;

    assert_eq!(
        result.constructs().iter().collect::<Vec<_>>(),
        vec![Construct::RoleInverse]
    );
    assert!(result.has(Construct::RoleInverse));
    assert_eq!(result.description_logic_name(), "I");
    assert_eq!(minimal_names(&result), vec!["ALCI"]);
}

#[tokio::test]
async fn transitive_only_ontology() {
    let result = classify(":x a owl:TransitiveProperty.").await;

    assert_eq!(
        result.constructs().iter().collect::<Vec<_>>(),
        vec![Construct::RoleTransitive]
    );
    assert_eq!(result.description_logic_name(), "+");

    let minimal = minimal_names(&result);
    assert_eq!(minimal.len(), 2);
    assert!(minimal.contains(&"S"));
    assert!(minimal.contains(&"EL++"));
}

#[tokio::test]
async fn alc_shaped_ontology_renders_alc() {
    let result = classify(
        ":a owl:intersectionOf (:b :c). \
         :d rdfs:subClassOf [a owl:Restriction; owl:onProperty :p; owl:allValuesFrom :e]. \
         :f owl:complementOf :g.",
    )
    .await;

    assert_eq!(result.description_logic_name(), "ALC");
    assert_eq!(minimal_names(&result), vec!["ALC"]);
}

#[tokio::test]
async fn shoin_d_shaped_ontology() {
    // Symmetric (I), disjointness (C), transitivity, a property hierarchy
    // (H), an unqualified cardinality (N) and a data property ((D)).
    let result = classify(
        ":p a owl:SymmetricProperty. \
         :a owl:disjointWith :b. \
         :t a owl:TransitiveProperty. \
         :q rdfs:subPropertyOf :r. \
         :c rdfs:subClassOf [a owl:Restriction; owl:onProperty :q; \
            owl:minCardinality \"2\"^^xsd:nonNegativeInteger]. \
         :d a owl:DatatypeProperty.",
    )
    .await;

    assert_eq!(result.description_logic_name(), "CHIN+(D)");
    assert_eq!(minimal_names(&result), vec!["SHOIN(D)"]);
}

#[tokio::test]
async fn classification_is_deterministic() {
    let turtle = ":p a owl:TransitiveProperty. :q owl:inverseOf :r. \
                  :a owl:unionOf (:b :c). :d a owl:DatatypeProperty.";
    let first = classify(turtle).await;
    let second = classify(turtle).await;

    assert_eq!(first, second);
    assert_eq!(first.description_logic_name(), second.description_logic_name());
    assert_eq!(minimal_names(&first), minimal_names(&second));
}

#[tokio::test]
async fn merge_rule_survives_canonicalization() {
    let result = classify(":p a owl:ReflexiveProperty. :q owl:inverseOf :r.").await;

    assert!(result.has(Construct::RoleInverse));
    assert!(result.has(Construct::RoleComplex));
    assert!(!result.has(Construct::RoleReflexivityChains));
}

#[tokio::test]
async fn is_within_is_monotonic_in_components() {
    let result = classify(":x owl:inverseOf :y. :a owl:disjointWith :b.").await;

    for weaker in languages() {
        if !result.is_within(weaker) {
            continue;
        }
        for stronger in languages() {
            if weaker.is_sub_language_of(stronger) {
                assert!(
                    result.is_within(stronger),
                    "{} covers the result but its superlanguage {} does not",
                    weaker,
                    stronger
                );
            }
        }
    }
}

#[tokio::test]
async fn minimal_languages_form_an_antichain() {
    let fixtures = [
        "",
        ":x owl:inverseOf :y.",
        ":x a owl:TransitiveProperty. :y owl:sameAs :z.",
        ":x owl:oneOf (:y :z). :p a owl:DatatypeProperty.",
        ":p a owl:ReflexiveProperty. :q owl:inverseOf :r. :s rdfs:domain :t.",
    ];

    for fixture in fixtures {
        let result = classify(fixture).await;
        let minimal = result.expressible_in_languages();
        assert!(!minimal.is_empty(), "no cover found for: {}", fixture);

        for a in &minimal {
            assert!(result.is_within(a));
            for b in &minimal {
                assert!(
                    !a.is_sub_language_of(b),
                    "{} ⊂ {} breaks the antichain for: {}",
                    a,
                    b,
                    fixture
                );
            }
        }
    }
}

#[tokio::test]
async fn every_result_is_within_the_top_language() {
    let top = by_name("SROIQ(D)").expect("top language exists");
    let fixtures = [
        "",
        ":x owl:inverseOf :y.",
        ":p a owl:ReflexiveProperty. :q owl:inverseOf :r.",
        ":x owl:differentFrom :y. :z owl:hasSelf \"true\"^^xsd:boolean.",
    ];
    for fixture in fixtures {
        let result = classify(fixture).await;
        assert!(result.is_within(top), "SROIQ(D) must cover: {}", fixture);
    }
}
