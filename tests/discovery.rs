// tests/discovery.rs
// Index parsing: column lookup, malformed rows, dedup modes, shortfall.

use nsf_scrape::error::ScrapeError;
use nsf_scrape::index::{normalize_url, parse_index};
use nsf_scrape::params::Dedup;

const INDEX: &str = "\
Title,NSF/PD Num,Solicitation URL\n\
\"Alpha, a program\",25-501,https://www.nsf.gov/pubs/alpha\n\
Beta,25-502,www.nsf.gov/pubs/beta\n\
Gamma,25-503,\n\
Alpha again,25-501,https://www.nsf.gov/pubs/alpha?page=2\n";

#[test]
fn shortfall_returns_what_exists() {
    // 4 data rows, one unusable; asking for 5 yields exactly 3, no error
    let urls = parse_index(INDEX, 5, Dedup::Exact).unwrap();
    assert_eq!(
        urls,
        vec![
            "https://www.nsf.gov/pubs/alpha",
            "https://www.nsf.gov/pubs/beta",
            "https://www.nsf.gov/pubs/alpha?page=2",
        ]
    );
}

#[test]
fn n_truncates_in_index_order() {
    let urls = parse_index(INDEX, 2, Dedup::Exact).unwrap();
    assert_eq!(
        urls,
        vec!["https://www.nsf.gov/pubs/alpha", "https://www.nsf.gov/pubs/beta"]
    );
}

#[test]
fn path_dedup_ignores_query_strings() {
    let urls = parse_index(INDEX, 5, Dedup::Path).unwrap();
    assert_eq!(
        urls,
        vec!["https://www.nsf.gov/pubs/alpha", "https://www.nsf.gov/pubs/beta"]
    );
}

#[test]
fn exact_dedup_drops_repeated_urls() {
    let with_dup = format!("{INDEX}Alpha dup,25-501,https://www.nsf.gov/pubs/alpha\n");
    let exact = parse_index(&with_dup, 10, Dedup::Exact).unwrap();
    assert_eq!(exact.len(), 3);

    let off = parse_index(&with_dup, 10, Dedup::Off).unwrap();
    assert_eq!(off.len(), 4);
}

#[test]
fn dedup_skips_duplicates_without_ending_the_scan() {
    // A duplicate mid-index must not stop discovery; later distinct URLs
    // still count toward n.
    let index = "\
Title,Solicitation URL\n\
A,https://www.nsf.gov/pubs/a\n\
A dup,https://www.nsf.gov/pubs/a\n\
B,https://www.nsf.gov/pubs/b\n";
    let urls = parse_index(index, 2, Dedup::Exact).unwrap();
    assert_eq!(
        urls,
        vec!["https://www.nsf.gov/pubs/a", "https://www.nsf.gov/pubs/b"]
    );
}

#[test]
fn missing_url_column_is_an_error() {
    let err = parse_index("Title,Synopsis\nA,B\n", 3, Dedup::Exact).unwrap_err();
    assert!(matches!(err, ScrapeError::IndexColumn(_)));
}

#[test]
fn empty_index_is_an_error() {
    let err = parse_index("", 3, Dedup::Exact).unwrap_err();
    assert!(matches!(err, ScrapeError::EmptyIndex));
}

#[test]
fn header_lookup_is_case_insensitive() {
    let urls = parse_index(
        "title,SOLICITATION URL\nA,https://www.nsf.gov/pubs/x\n",
        1,
        Dedup::Exact,
    )
    .unwrap();
    assert_eq!(urls, vec!["https://www.nsf.gov/pubs/x"]);
}

#[test]
fn url_normalization() {
    assert_eq!(
        normalize_url("  \"www.nsf.gov/pubs/x\"  ").as_deref(),
        Some("https://www.nsf.gov/pubs/x")
    );
    assert_eq!(
        normalize_url("https://www.nsf.gov/pubs/x").as_deref(),
        Some("https://www.nsf.gov/pubs/x")
    );
    assert_eq!(normalize_url("   "), None);
    assert_eq!(normalize_url("\"\""), None);
}
