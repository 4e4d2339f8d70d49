// src/extract/tags.rs
// Tag fields: collect-all keyword matching against the controlled
// vocabularies, applied to the whole page text.

use crate::extract::engine::collect_tags;
use crate::extract::rules;
use crate::record::SemanticTags;

pub fn apply(text: &str) -> SemanticTags {
    SemanticTags {
        research_domains: collect_tags(rules::research_domain_tags(), text),
        methods_approaches: collect_tags(rules::method_tags(), text),
        eligibility: collect_tags(rules::eligibility_tags(), text),
        populations: collect_tags(rules::population_tags(), text),
        sponsor_themes: collect_tags(rules::sponsor_theme_tags(), text),
    }
}
