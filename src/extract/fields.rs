// src/extract/fields.rs
// Per-field extraction. Every function takes the normalized page text (or
// the raw HTML where tag structure still matters) and returns absent on a
// miss. No function looks at another field's result.

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, slice_between_ci, strip_tags, to_lowercase_fast};
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::extract::engine::{first_match, slice_between_markers};
use crate::extract::rules;

const ACCEPTED_ANYTIME: &str = "Proposals Accepted Anytime";

/// `(foa_id, title)` from the page head. Title prefers the solicitation
/// heading over `<title>`; the program number comes from the title text with
/// the URL as fallback.
pub fn title_and_foa_id(html: &str, url: &str) -> (Option<String>, Option<String>) {
    let raw_title = h1_solicitation_title(html)
        .or_else(|| {
            slice_between_ci(html, "<title", "</title>")
                .map(|t| strip_tags(&normalize_entities(t)))
        })
        .unwrap_or_default();

    let mut title = normalize_ws(&raw_title);

    let mut foa_id = rules::foa_id_re()
        .find(&title)
        .map(|m| normalize_ws(m.as_str()));

    // Drop the "| NSF - U.S. National Science Foundation" tail
    title = rules::title_suffix_re().replace(&title, "").trim().to_string();

    // Drop a leading "NSF NN-NNNN:" prefix once the id is captured separately
    if let Some(id) = &foa_id {
        let lc = to_lowercase_fast(&title);
        if lc.starts_with(&to_lowercase_fast(id)) {
            let rest = title[id.len()..].trim_start();
            if let Some(stripped) = rest.strip_prefix(':') {
                title = stripped.trim().to_string();
            }
        }
    }

    if foa_id.is_none() {
        foa_id = rules::url_foa_re()
            .captures(url)
            .map(|caps| format!("NSF {}-{}", &caps[1], &caps[2]));
    }

    (foa_id, (!title.is_empty()).then_some(title))
}

fn h1_solicitation_title(html: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((start, end)) = next_tag_block_ci(html, "<h1", "</h1>", pos) {
        let block = &html[start..end];
        pos = end;

        let open_end = block.find('>').unwrap_or(0);
        if !to_lowercase_fast(&block[..open_end]).contains("solicitation__title") {
            continue;
        }
        let inner = inner_after_open_tag(block);
        let clean = strip_tags(&normalize_entities(&inner));
        if !clean.is_empty() {
            return Some(clean);
        }
    }
    None
}

pub fn agency(text: &str) -> Option<String> {
    to_lowercase_fast(text)
        .contains("national science foundation")
        .then(|| s!("National Science Foundation (NSF)"))
}

/// Posted date, normalized to ISO.
pub fn posted_date(text: &str) -> Option<String> {
    first_match(rules::posted_date_rules(), text)
        .and_then(|raw| normalize_iso_date(&raw))
}

/// `(deadline, close_date)`. The raw deadline keeps the page's wording;
/// `close_date` is its ISO form and stays absent for "accepted anytime"
/// solicitations, which have no due date.
pub fn due_dates(text: &str) -> (Option<String>, Option<String>) {
    match first_match(rules::deadline_rules(), text) {
        Some(raw) if raw.eq_ignore_ascii_case(ACCEPTED_ANYTIME) => {
            (Some(s!(ACCEPTED_ANYTIME)), None)
        }
        Some(raw) => {
            let iso = normalize_iso_date(&raw);
            (Some(raw), iso)
        }
        None => (None, None),
    }
}

/// `(award_amount, award_range)`, both scoped to section III. Award
/// Information. Without that heading both stay absent.
pub fn awards(text: &str) -> (Option<String>, Option<String>) {
    let Some(section) =
        slice_between_markers(text, rules::award_section_start(), rules::award_section_end())
    else {
        return (None, None);
    };

    let amount = first_match(rules::award_amount_rules(), &section);
    let range = first_match(rules::award_range_rules(), &section);
    (amount, range)
}

/// Narrative eligibility text: section IV, preferring the sentence after
/// "Who May Submit Proposals:". Very short fragments are treated as misses.
pub fn eligibility_text(text: &str) -> Option<String> {
    if let Some(section) =
        slice_between_markers(text, rules::eligibility_start(), rules::eligibility_end())
    {
        if let Some(caps) = rules::who_may_submit_re().captures(&section) {
            let candidate = normalize_ws(&caps[1]);
            if candidate.len() > 30 {
                return Some(candidate);
            }
        }
        if section.len() > 30 {
            return Some(section);
        }
    }

    // No usable section heading; fall back to the global label.
    rules::eligibility_fallback_re()
        .captures(text)
        .map(|caps| normalize_ws(&caps[1]))
        .filter(|candidate| candidate.len() > 30)
}

/// Section II. Program Description only; the introduction and synopsis are
/// deliberately not used.
pub fn program_description(text: &str) -> Option<String> {
    let section =
        slice_between_markers(text, rules::description_start(), rules::description_end())?;
    let section = rules::leading_date_re().replace(&section, "");
    let section = normalize_ws(&section);
    (section.len() >= 40).then_some(section)
}

/// "March 15, 2025" → "2025-03-15". Format recognition only, no calendar
/// validation.
pub fn normalize_iso_date(raw: &str) -> Option<String> {
    let caps = rules::iso_date_re().captures(raw)?;
    let month = month_number(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

fn month_number(name: &str) -> Option<u32> {
    Some(match to_lowercase_fast(name).as_str() {
        "january" => 1,
        "february" => 2,
        "march" => 3,
        "april" => 4,
        "may" => 5,
        "june" => 6,
        "july" => 7,
        "august" => 8,
        "september" => 9,
        "october" => 10,
        "november" => 11,
        "december" => 12,
        _ => return None,
    })
}
