// tests/tagging.rs
// Controlled-vocabulary tagging: collect-all, case-insensitive, monotonic.

use nsf_scrape::extract::engine::collect_tags;
use nsf_scrape::extract::rules;
use nsf_scrape::extract::tags;

#[test]
fn tag_fields_are_multi_valued() {
    let text = "This solicitation spans machine learning, quantum devices, \
                and chemistry education.";
    let domains = collect_tags(rules::research_domain_tags(), text);
    assert!(domains.contains("Machine Learning"));
    assert!(domains.contains("Quantum Science"));
    assert!(domains.contains("Chemistry"));
}

#[test]
fn tagging_is_case_insensitive() {
    let upper = collect_tags(rules::research_domain_tags(), "MOLECULAR BIOLOGY");
    let lower = collect_tags(rules::research_domain_tags(), "molecular biology");
    assert_eq!(upper, lower);
    assert!(upper.contains("Molecular and Cellular Biosciences"));
}

#[test]
fn adding_a_keyword_only_adds_tags() {
    let base = "We fund experimental studies of epigenetic regulation.";
    let extended = format!("{base} Proposals may include machine learning components.");

    let tags_base = tags::apply(base);
    let tags_ext = tags::apply(&extended);

    // everything tagged before is still tagged
    assert!(tags_base.research_domains.is_subset(&tags_ext.research_domains));
    assert!(tags_base.methods_approaches.is_subset(&tags_ext.methods_approaches));
    assert!(tags_ext.research_domains.contains("Machine Learning"));
    assert!(tags_ext.methods_approaches.contains("Machine Learning"));
}

#[test]
fn exact_phrase_matching_only() {
    // Paraphrase does not tag: a documented false-negative source.
    let tags = collect_tags(rules::research_domain_tags(), "the study of heredity in organisms");
    assert!(!tags.contains("Genetics"));

    // Word boundaries keep substrings from tagging.
    let tags = collect_tags(rules::research_domain_tags(), "the aide said nothing");
    assert!(!tags.contains("Artificial Intelligence"));
}

#[test]
fn negated_context_still_tags() {
    // No negation handling, by design.
    let tags = collect_tags(rules::research_domain_tags(), "proposals must not involve quantum computing");
    assert!(tags.contains("Quantum Science"));
}

#[test]
fn eligibility_vocabulary_tags_submitter_types() {
    let text = "Who May Submit Proposals: Institutions of Higher Education, \
                non-profit organizations, and Tribal Nations.";
    let elig = collect_tags(rules::eligibility_tags(), text);
    assert!(elig.contains("Institutions of Higher Education"));
    assert!(elig.contains("Non-profit Organizations"));
    assert!(elig.contains("Tribal Nations"));
    assert!(!elig.contains("Small Businesses"));
}

#[test]
fn population_and_theme_vocabularies() {
    let text = "The program supports EPSCoR jurisdictions, graduate students, \
                and early-career faculty, with a focus on broadening participation.";
    let t = tags::apply(text);
    assert!(t.populations.contains("EPSCoR"));
    assert!(t.populations.contains("Graduate Students"));
    assert!(t.populations.contains("Early-career"));
    assert!(t.sponsor_themes.contains("Broadening Participation"));
}
