// src/extract/mod.rs
//! # Field extraction
//!
//! This module turns one fetched solicitation page into a structured
//! [`FoaRecord`](crate::record::FoaRecord). It encodes *where the ground
//! truth lives on the page* and *how to pull it out robustly*.
//!
//! ## What lives here
//! - **Pure text extraction**: the whole module is a function of the page
//!   content plus the static rule tables in [`rules`]. No I/O, no state
//!   across pages.
//! - **Two evaluation strategies**, deliberately kept apart:
//!   - *Pattern fields* (deadline, award amount/range, posted date) run an
//!     ordered list of patterns; the first match wins. Earlier patterns are
//!     the more specific/reliable ones.
//!   - *Tag fields* (research domains, eligibility, …) scan the full page
//!     text against a controlled vocabulary and collect every label that
//!     matches. Multi-valued by design.
//! - **Section slicing** for the narrative fields (eligibility text, program
//!   description, award information), bounded by the roman-numeral headings
//!   NSF solicitations use.
//!
//! ## What does **not** live here
//! - Fetching and URL discovery (`net`, `index`).
//! - Output formatting and file writing (`record`, `file`).
//!
//! ## Conventions & invariants
//! - Matching is case-insensitive over whitespace-normalized text. Exact
//!   phrase matching only; paraphrased text is a known false negative.
//! - A rule that matches nothing yields an absent field, never an error.
//!   Arbitrary non-solicitation text produces a mostly-empty record.
//! - Extraction is per-field independent: no field's result feeds another.

pub mod engine;
pub mod fields;
pub mod rules;
pub mod tags;

use crate::core::html;
use crate::record::FoaRecord;

/// Raw content of one fetched page. Consumed once by [`extract`].
#[derive(Debug, Clone)]
pub struct SolicitationPage {
    pub url: String,
    pub html: String,
}

impl SolicitationPage {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self { url: url.into(), html: html.into() }
    }
}

/// Extract every field from one page. Pure function: same page in, same
/// record out. Always returns a record; unmatched rules leave fields absent.
pub fn extract(page: &SolicitationPage) -> FoaRecord {
    let text = html::page_text(&page.html);

    let mut rec = FoaRecord::new(&page.url);
    (rec.foa_id, rec.title) = fields::title_and_foa_id(&page.html, &page.url);
    rec.agency = fields::agency(&text);
    rec.posted_date = fields::posted_date(&text);
    (rec.deadline, rec.close_date) = fields::due_dates(&text);
    (rec.award_amount, rec.award_range) = fields::awards(&text);
    rec.eligibility_text = fields::eligibility_text(&text);
    rec.program_description = fields::program_description(&text);
    rec.tags = tags::apply(&text);
    rec
}
