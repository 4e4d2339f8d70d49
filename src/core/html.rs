// src/core/html.rs
// Low-level HTML string manipulation helpers.
// Deliberately naive but sufficient for the NSF solicitation pages.
// They operate case-insensitively on ASCII tag/attribute names.

use crate::core::sanitize::{normalize_entities, normalize_ws};

/// Find the section between an opening tag (with attributes) and its matching
/// closing tag, case-insensitive. Returns the HTML *inside* the tags.
///
/// Example: `slice_between_ci(html, "<title", "</title>")`
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lowercase_fast(s);
    let open_lc = to_lowercase_fast(open_pat);
    let close_lc = to_lowercase_fast(close_pat);

    let open_idx = lc.find(&open_lc)?;
    // Jump past the '>' of the opening tag
    let after_open = s[open_idx..].find('>')? + open_idx + 1;
    let close_idx_rel = lc[after_open..].find(&close_lc)?;
    Some(&s[after_open..after_open + close_idx_rel])
}

/// Find the next complete tag block from `from` onwards, case-insensitive.
/// A block spans from the start of the opening tag to the end of the closing tag.
pub fn next_tag_block_ci(s: &str, open_tag: &str, close_tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lowercase_fast(s);
    let open_lc = to_lowercase_fast(open_tag);
    let close_lc = to_lowercase_fast(close_tag);

    let start = lc.get(from..)?.find(&open_lc)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&close_lc)?;
    let end = open_end + end_rel + close_tag.len();
    Some((start, end))
}

/// Given a complete tag block like `<h1 ...>INNER</h1>`,
/// return the INNER text without the wrapping tags (may contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return block[open_end + 1..close_start].to_string();
            }
        }
    }
    String::new()
}

/// Remove all HTML tags `<...>` from the string, then collapse whitespace.
/// A space is inserted where each tag was, so adjacent block elements do not
/// fuse into one word.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Remove every `<tag ...>...</tag>` block (e.g. script/style), case-insensitive.
/// Unclosed blocks are dropped to the end of input.
pub fn strip_blocks_ci(s: &str, tag: &str) -> String {
    let lc = to_lowercase_fast(s);
    let open = format!("<{}", to_lowercase_fast(tag));
    let close = format!("</{}>", to_lowercase_fast(tag));

    let mut out = String::with_capacity(s.len());
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(&open) {
        let start = pos + rel;
        out.push_str(&s[pos..start]);
        match lc[start..].find(&close) {
            Some(end_rel) => pos = start + end_rel + close.len(),
            None => return out, // unterminated block: discard the rest
        }
    }
    out.push_str(&s[pos..]);
    out
}

/// Remove every case-insensitive occurrence of `phrase` from `s`.
pub fn remove_phrase_ci(s: &str, phrase: &str) -> String {
    let lc = to_lowercase_fast(s);
    let needle = to_lowercase_fast(phrase);
    if needle.is_empty() {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(&needle) {
        let start = pos + rel;
        out.push_str(&s[pos..start]);
        out.push(' ');
        pos = start + needle.len();
    }
    out.push_str(&s[pos..]);
    out
}

/// Flatten a full HTML document into normalized visible text.
///
/// Steps: drop script/style/noscript blocks, prefer `<main>` (then `<body>`)
/// content, strip tags, decode common entities, collapse whitespace, and
/// remove NSF site boilerplate that would pollute keyword matching.
pub fn page_text(html: &str) -> String {
    let mut doc = strip_blocks_ci(html, "script");
    doc = strip_blocks_ci(&doc, "style");
    doc = strip_blocks_ci(&doc, "noscript");

    let scope = slice_between_ci(&doc, "<main", "</main>")
        .or_else(|| slice_between_ci(&doc, "<body", "</body>"))
        .unwrap_or(&doc);

    let text = strip_tags(&normalize_entities(scope));
    let text = remove_phrase_ci(&text, "Skip to main content");
    normalize_ws(&text)
}

/// Fast ASCII-only lowercasing for tag/attribute matching.
pub fn to_lowercase_fast(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}
