// src/record.rs

use std::collections::BTreeSet;

use serde::Serialize;

/// Multi-valued tag fields, one set per vocabulary. `BTreeSet` keeps the
/// serialized order stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SemanticTags {
    pub research_domains: BTreeSet<String>,
    pub methods_approaches: BTreeSet<String>,
    pub eligibility: BTreeSet<String>,
    pub populations: BTreeSet<String>,
    pub sponsor_themes: BTreeSet<String>,
}

/// One extracted record per processed URL. Every field except `source_url`
/// is independently optional: absence means "not found", never an error.
/// Immutable once built; the writer serializes it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoaRecord {
    pub source_url: String,
    pub foa_id: Option<String>,
    pub title: Option<String>,
    pub agency: Option<String>,
    pub posted_date: Option<String>,
    /// Deadline as worded on the page, e.g. "March 15, 2025" or
    /// "Proposals Accepted Anytime".
    pub deadline: Option<String>,
    /// ISO form of `deadline`; absent for accepted-anytime solicitations.
    pub close_date: Option<String>,
    pub award_amount: Option<String>,
    pub award_range: Option<String>,
    pub eligibility_text: Option<String>,
    pub program_description: Option<String>,
    pub tags: SemanticTags,
}

impl FoaRecord {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            foa_id: None,
            title: None,
            agency: None,
            posted_date: None,
            deadline: None,
            close_date: None,
            award_amount: None,
            award_range: None,
            eligibility_text: None,
            program_description: None,
            tags: SemanticTags::default(),
        }
    }

    /// Column order for the flattened CSV export.
    pub fn csv_header() -> Vec<String> {
        [
            "source_url",
            "foa_id",
            "title",
            "agency",
            "posted_date",
            "deadline",
            "close_date",
            "award_amount",
            "award_range",
            "eligibility_text",
            "program_description",
            "tags_research_domains",
            "tags_methods_approaches",
            "tags_eligibility",
            "tags_populations",
            "tags_sponsor_themes",
        ]
        .iter()
        .map(|h| s!(*h))
        .collect()
    }

    /// Flatten for CSV: absent fields become empty cells, tag sets join
    /// with "; ".
    pub fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.source_url.clone(),
            cell(&self.foa_id),
            cell(&self.title),
            cell(&self.agency),
            cell(&self.posted_date),
            cell(&self.deadline),
            cell(&self.close_date),
            cell(&self.award_amount),
            cell(&self.award_range),
            cell(&self.eligibility_text),
            cell(&self.program_description),
            join_tags(&self.tags.research_domains),
            join_tags(&self.tags.methods_approaches),
            join_tags(&self.tags.eligibility),
            join_tags(&self.tags.populations),
            join_tags(&self.tags.sponsor_themes),
        ]
    }
}

fn cell(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

fn join_tags(tags: &BTreeSet<String>) -> String {
    tags.iter().cloned().collect::<Vec<_>>().join("; ")
}
