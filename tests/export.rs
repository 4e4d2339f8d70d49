// tests/export.rs
// Output files: CSV flattening/escaping and JSON nulls.

use std::fs;
use std::path::PathBuf;

use nsf_scrape::extract::{self, SolicitationPage};
use nsf_scrape::file::export_records;
use nsf_scrape::params::OutputFormat;
use nsf_scrape::record::FoaRecord;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("nsf_scrape_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn record_with_commas() -> FoaRecord {
    let page = SolicitationPage::new(
        "https://example.org/foa",
        "<html><head><title>NSF 25-001: Alpha, Beta, and Gamma | NSF</title></head>\
         <body><p>Full Proposal Deadline Date: March 15, 2025</p>\
         <p>machine learning and quantum chemistry</p></body></html>",
    );
    extract::extract(&page)
}

#[test]
fn csv_export_escapes_and_blanks() {
    let dir = tmp_dir("csv");
    let path = dir.join("foas.csv");

    let rec = record_with_commas();
    export_records(&path, &[rec], OutputFormat::Csv).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("source_url,foa_id,title,"));

    let row = lines.next().unwrap();
    // cells containing commas must be quoted
    assert!(row.contains("\"Alpha, Beta, and Gamma\""));
    assert!(row.contains("\"March 15, 2025\""));
}

#[test]
fn json_export_uses_null_for_absent_fields() {
    let dir = tmp_dir("json");
    let path = dir.join("foas.json");

    let rec = FoaRecord::new("https://example.org/empty");
    export_records(&path, &[rec], OutputFormat::Json).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let first = &parsed[0];
    assert_eq!(first["source_url"], "https://example.org/empty");
    assert!(first["deadline"].is_null());
    assert!(first["award_range"].is_null());
    assert!(first["tags"]["research_domains"].as_array().unwrap().is_empty());
}

#[test]
fn export_creates_parent_directories() {
    let dir = tmp_dir("nested");
    let path = dir.join("a/b/foas.json");

    export_records(&path, &[], OutputFormat::Json).unwrap();
    assert!(path.exists());
}

#[test]
fn csv_row_count_matches_records() {
    let dir = tmp_dir("count");
    let path = dir.join("foas.csv");

    let recs = vec![
        FoaRecord::new("https://example.org/1"),
        FoaRecord::new("https://example.org/2"),
    ];
    export_records(&path, &recs, OutputFormat::Csv).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 3); // header + 2 rows
}
