// src/extract/rules.rs
// The versioned rule tables. Every pattern and vocabulary entry the
// extractor uses lives here so rule changes are reviewable in one place.
//
// Pattern lists are ordered: earlier entries are more specific/reliable and
// win ties. Vocabulary patterns are word-bounded phrases; all matching is
// case-insensitive (compiled that way in `engine`).

use std::sync::OnceLock;

use regex::Regex;

use super::engine::{self, PatternRule, TagRule};

/// Month-name alternation shared by the date patterns.
pub const MONTH: &str = "(?:January|February|March|April|May|June|July|August\
|September|October|November|December)";

/// Money token: `$1,000`, `$15M`, `$14,000,000`, `$2.5 million`, …
pub const MONEY: &str = r"\$\s*\d[\d,]*(?:\.\d+)?(?:\s*(?:[KMB]\b|million|billion))?";

fn date_group() -> String {
    format!(r"({MONTH}\s+\d{{1,2}},\s+\d{{4}})")
}

/* ---------------- Pattern fields ---------------- */

/// Deadline rules. "Proposals Accepted Anytime" near the full-proposal label
/// outranks a dated deadline; a bare labeled date is the last resort.
pub fn deadline_rules() -> &'static [PatternRule] {
    static RULES: OnceLock<Vec<PatternRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let date = date_group();
        vec![
            PatternRule::new(
                "full-proposal-anytime",
                r"\bfull proposal (?:deadline|target date)(?:\(s\))?[\s\S]{0,500}?(proposals accepted anytime)",
            ),
            PatternRule::new(
                "full-proposal-date",
                &format!(r"\bfull proposal deadline(?:\(s\))?(?:\s*date)?[\s\S]{{0,500}}?{date}"),
            ),
            PatternRule::new("accepted-anytime", r"\b(proposals accepted anytime)\b"),
            PatternRule::new(
                "labeled-deadline",
                &format!(r"\bdeadline(?:\s+date)?s?\s*:\s*{date}"),
            ),
        ]
    })
}

pub fn posted_date_rules() -> &'static [PatternRule] {
    static RULES: OnceLock<Vec<PatternRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let date = date_group();
        vec![PatternRule::new("posted-label", &format!(r"\bposted\s*:\s*{date}"))]
    })
}

/// Range forms an award section actually spells out. Narrative prose
/// ("awards typically range from approximately …") stays unmatched.
pub fn award_range_rules() -> &'static [PatternRule] {
    static RULES: OnceLock<Vec<PatternRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            PatternRule::new(
                "range-to",
                &format!(r"({MONEY})\s*(?:to|through|[-–])\s*({MONEY})"),
            ),
            PatternRule::new(
                "range-between",
                &format!(r"\bbetween\s*({MONEY})\s*and\s*({MONEY})"),
            ),
        ]
    })
}

pub fn award_amount_rules() -> &'static [PatternRule] {
    static RULES: OnceLock<Vec<PatternRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            PatternRule::new(
                "anticipated-funding",
                &format!(r"\banticipated funding amount[\s\S]{{0,200}}?({MONEY})"),
            ),
            PatternRule::new("up-to", &format!(r"\b(?:up to|totaling|total of)\s*({MONEY})")),
            PatternRule::new("first-money", &format!(r"({MONEY})")),
        ]
    })
}

/* ---------------- Section markers ---------------- */

fn markers(cell: &'static OnceLock<Vec<Regex>>, patterns: &[&str]) -> &'static [Regex] {
    cell.get_or_init(|| engine::compile_markers(patterns))
}

pub fn description_start() -> &'static [Regex] {
    static M: OnceLock<Vec<Regex>> = OnceLock::new();
    markers(&M, &[r"\bII\.\s*Program Description\b\s*:?"])
}

pub fn description_end() -> &'static [Regex] {
    static M: OnceLock<Vec<Regex>> = OnceLock::new();
    markers(&M, &[r"\bOverall Approach\b", r"\bIII\.\s*Award Information\b"])
}

pub fn award_section_start() -> &'static [Regex] {
    static M: OnceLock<Vec<Regex>> = OnceLock::new();
    markers(&M, &[r"\bIII\.\s*Award Information\b"])
}

pub fn award_section_end() -> &'static [Regex] {
    static M: OnceLock<Vec<Regex>> = OnceLock::new();
    markers(
        &M,
        &[
            r"\bIV\.\s*Eligibility Information\b",
            r"\bIV\.\s*Eligibility\b",
            r"\bV\.\s*Proposal Preparation\b",
        ],
    )
}

pub fn eligibility_start() -> &'static [Regex] {
    static M: OnceLock<Vec<Regex>> = OnceLock::new();
    markers(
        &M,
        &[
            r"\bIV\.\s*Eligibility Information\b\s*:?",
            r"\bIV\.\s*Eligibility\b\s*:?",
        ],
    )
}

pub fn eligibility_end() -> &'static [Regex] {
    static M: OnceLock<Vec<Regex>> = OnceLock::new();
    markers(
        &M,
        &[
            r"\bV\.\s*Proposal Preparation and Submission Instructions\b",
            r"\bV\.\s*Proposal Preparation\b",
            r"\bVI\.\s*NSF Proposal Processing\b",
            r"\bVI\.\s*Proposal Review Information\b",
        ],
    )
}

/* ---------------- Single helper patterns ---------------- */

fn single(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        regex::RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("rule table pattern must compile")
    })
}

pub fn who_may_submit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    single(&RE, r"Who May Submit Proposals\s*:?\s*(.+)")
}

/// Global fallback when the eligibility section heading is missing.
pub fn eligibility_fallback_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    single(
        &RE,
        r"Who May Submit Proposals\s*:?\s*(.+?)(?:Proposal Preparation and Submission Instructions|C\.\s*Due Dates|Merit Review Criteria|Award Administration Information)",
    )
}

/// A stray date the section slicer sometimes leaves at the head of the
/// program description.
pub fn leading_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    single(&RE, &format!(r"^{MONTH}\s+\d{{1,2}},\s+\d{{4}}\s*"))
}

pub fn iso_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    single(&RE, &format!(r"\b({MONTH})\s+(\d{{1,2}}),\s*(\d{{4}})\b"))
}

/// `NSF 24-1234` program number inside a title.
pub fn foa_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    single(&RE, r"\bNSF\s*\d{2}-\d+\b")
}

/// Program number embedded in a solicitation URL, e.g. `.../nsf24-569/...`.
pub fn url_foa_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    single(&RE, r"nsf(\d{2})-?(\d{3,})")
}

/// `| NSF - National Science Foundation` tail on `<title>` text.
pub fn title_suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    single(&RE, r"\|\s*NSF.*$")
}

/* ---------------- Controlled vocabularies (tag fields) ---------------- */

pub fn research_domain_tags() -> &'static [TagRule] {
    static TAGS: OnceLock<Vec<TagRule>> = OnceLock::new();
    TAGS.get_or_init(|| {
        vec![
            TagRule::new(
                "Molecular and Cellular Biosciences",
                &[
                    r"\bmolecular and cellular biosciences\b",
                    r"\bmolecular biology\b",
                    r"\bcellular biology\b",
                    r"\bbiomolecules?\b",
                ],
            ),
            TagRule::new("Biophysics", &[r"\bbiophysics\b", r"\bbiophysical\b"]),
            TagRule::new("Genetics", &[r"\bgenetics?\b", r"\bgenomics?\b"]),
            TagRule::new("Epigenetics", &[r"\bepigenetics?\b"]),
            TagRule::new("Synthetic Biology", &[r"\bsynthetic biology\b"]),
            TagRule::new("Systems Biology", &[r"\bsystems biology\b"]),
            TagRule::new("Biotechnology", &[r"\bbiotechnolog(?:y|ies)\b"]),
            TagRule::new("Mathematics", &[r"\bmathematics\b", r"\bmathematical\b"]),
            TagRule::new(
                "Computer Science",
                &[r"\bcomputer science\b", r"\bcomputing\b", r"\bsoftware\b"],
            ),
            TagRule::new("Engineering", &[r"\bengineering\b"]),
            TagRule::new("Physics", &[r"\bphysics\b", r"\bphysical sciences?\b"]),
            TagRule::new("Chemistry", &[r"\bchemistry\b", r"\bchemical\b"]),
            TagRule::new("Quantum Science", &[r"\bquantum\b"]),
            TagRule::new("Nanotechnology", &[r"\bnanotechnology\b", r"\bnanoscale\b"]),
            TagRule::new("Cybersecurity", &[r"\bcybersecurity\b", r"\bsecure systems\b"]),
            TagRule::new(
                "Artificial Intelligence",
                &[r"\bartificial intelligence\b", r"\bai\b"],
            ),
            TagRule::new(
                "Machine Learning",
                &[r"\bmachine learning\b", r"\bdeep learning\b"],
            ),
            TagRule::new("Geosciences", &[r"\bgeosciences?\b", r"\bearth sciences?\b"]),
        ]
    })
}

pub fn method_tags() -> &'static [TagRule] {
    static TAGS: OnceLock<Vec<TagRule>> = OnceLock::new();
    TAGS.get_or_init(|| {
        vec![
            TagRule::new("Experimental", &[r"\bexperimental\b", r"\bexperiments?\b"]),
            TagRule::new("Computational", &[r"\bcomputational\b", r"\bcomputation\b"]),
            TagRule::new("Theoretical", &[r"\btheoretical\b", r"\btheory\b"]),
            TagRule::new("Modeling", &[r"\bmodel(?:ing|ling)\b", r"\bmodels?\b"]),
            TagRule::new("Mechanistic", &[r"\bmechanistic\b"]),
            TagRule::new("Quantitative", &[r"\bquantitative\b"]),
            TagRule::new("Predictive", &[r"\bpredictive\b"]),
            TagRule::new("Integrative", &[r"\bintegrative\b"]),
            TagRule::new("Data Science", &[r"\bdata science\b"]),
            TagRule::new(
                "Machine Learning",
                &[r"\bmachine learning\b", r"\bdeep learning\b"],
            ),
        ]
    })
}

/// Who may submit. Matched against the whole page, so a submitter type
/// mentioned only in passing still tags (documented false-positive source).
pub fn eligibility_tags() -> &'static [TagRule] {
    static TAGS: OnceLock<Vec<TagRule>> = OnceLock::new();
    TAGS.get_or_init(|| {
        vec![
            TagRule::new(
                "Institutions of Higher Education",
                &[r"\binstitutions? of higher education\b", r"\bIHEs?\b"],
            ),
            TagRule::new("Non-profit Organizations", &[r"\bnon-?profits?\b", r"\bnon-?profit organizations?\b"]),
            TagRule::new("For-profit Organizations", &[r"\bfor-?profit organizations?\b"]),
            TagRule::new(
                "State and Local Governments",
                &[r"\bstate and local governments?\b", r"\bstate governments?\b"],
            ),
            TagRule::new("Tribal Nations", &[r"\btribal (?:nations?|governments?)\b"]),
            TagRule::new("Foreign Organizations", &[r"\bforeign organizations?\b"]),
            TagRule::new("Small Businesses", &[r"\bsmall business(?:es)?\b"]),
            TagRule::new(
                "Individuals",
                &[r"\bunaffiliated individuals?\b", r"\bindividual investigators?\b"],
            ),
        ]
    })
}

pub fn population_tags() -> &'static [TagRule] {
    static TAGS: OnceLock<Vec<TagRule>> = OnceLock::new();
    TAGS.get_or_init(|| {
        vec![
            TagRule::new("Underrepresented Groups", &[r"\bunderrepresented\b"]),
            TagRule::new("EPSCoR", &[r"\bepscor\b"]),
            TagRule::new("STEM Workforce", &[r"\bstem workforce\b"]),
            TagRule::new("K-12", &[r"\bk-?12\b"]),
            TagRule::new(
                "Postdoctoral Researchers",
                &[r"\bpostdocs?\b", r"\bpostdoctoral\b"],
            ),
            TagRule::new("Graduate Students", &[r"\bgraduate students?\b"]),
            TagRule::new("Undergraduates", &[r"\bundergraduates?\b"]),
            TagRule::new("Early-career", &[r"\bearly[- ]career\b"]),
            TagRule::new("Mid-career", &[r"\bmid[- ]career\b"]),
        ]
    })
}

pub fn sponsor_theme_tags() -> &'static [TagRule] {
    static TAGS: OnceLock<Vec<TagRule>> = OnceLock::new();
    TAGS.get_or_init(|| {
        vec![
            TagRule::new("Broadening Participation", &[r"\bbroaden(?:ing)? participation\b"]),
            TagRule::new(
                "Workforce Development",
                &[r"\bworkforce\b", r"\btraining\b", r"\bmentoring\b"],
            ),
            TagRule::new("Infrastructure", &[r"\binfrastructure\b"]),
            TagRule::new(
                "Interdisciplinary Research",
                &[r"\binterdisciplinary\b", r"\bcross[- ]disciplinary\b"],
            ),
            TagRule::new(
                "Basic Research",
                &[r"\bbasic research\b", r"\bfoundational research\b"],
            ),
        ]
    })
}
