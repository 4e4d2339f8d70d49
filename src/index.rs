// src/index.rs
// URL discovery from the published NSF opportunities CSV export.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use url::Url;

use crate::csv::parse_rows;
use crate::error::ScrapeError;
use crate::net::Client;
use crate::params::{Dedup, INDEX_CSV_URL, URL_COLUMN};

/// Download (or read) the index and return the first ≤ `n` solicitation
/// URLs in index order. Fewer valid rows than `n` is a shortfall, not an
/// error.
pub fn discover_urls(
    client: &Client,
    local: Option<&Path>,
    n: usize,
    dedup: Dedup,
) -> Result<Vec<String>, ScrapeError> {
    let text = match local {
        Some(path) => fs::read_to_string(path)
            .map_err(|source| ScrapeError::IndexFile { path: path.to_path_buf(), source })?,
        None => client.fetch_page(INDEX_CSV_URL)?,
    };
    parse_index(&text, n, dedup)
}

/// Pure parsing half of discovery, testable offline against fixture text.
/// Malformed rows (missing column, unusable URL) are skipped and counted,
/// never fatal; only a missing header/column is an error.
pub fn parse_index(text: &str, n: usize, dedup: Dedup) -> Result<Vec<String>, ScrapeError> {
    let mut rows = parse_rows(text, ',').into_iter();
    let header = rows.next().ok_or(ScrapeError::EmptyIndex)?;

    let col = header
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(URL_COLUMN))
        .ok_or_else(|| ScrapeError::IndexColumn(s!(URL_COLUMN)))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut urls = Vec::new();
    let mut skipped = 0usize;

    for row in rows {
        if urls.len() == n {
            break;
        }
        let Some(url) = row.get(col).and_then(|raw| normalize_url(raw)) else {
            skipped += 1;
            continue;
        };
        if let Some(key) = dedup_key(&url, dedup) {
            if !seen.insert(key) {
                continue;
            }
        }
        urls.push(url);
    }

    if skipped > 0 {
        debug!("index: skipped {skipped} row(s) with no usable URL");
    }
    Ok(urls)
}

/// Trim quoting/whitespace and default to https when the scheme is missing.
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches(|c| c == '"' || c == '\'').trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(s!(trimmed))
    } else {
        Some(format!("https://{trimmed}"))
    }
}

fn dedup_key(url: &str, dedup: Dedup) -> Option<String> {
    match dedup {
        Dedup::Off => None,
        Dedup::Exact => Some(s!(url)),
        // Same solicitation behind different query strings counts once
        Dedup::Path => Some(match Url::parse(url) {
            Ok(mut parsed) => {
                parsed.set_query(None);
                parsed.set_fragment(None);
                parsed.to_string()
            }
            Err(_) => s!(url),
        }),
    }
}
