// src/runner.rs
use std::path::PathBuf;
use std::time::Duration;

use log::warn;

use crate::error::ScrapeError;
use crate::extract::{self, SolicitationPage};
use crate::file::export_records;
use crate::index;
use crate::net::Client;
use crate::params::{Mode, Params};
use crate::progress::Progress;

/// Summary of one run: what was written and which URLs were skipped
/// (batch mode only — a single-URL failure is returned as the error).
pub struct RunSummary {
    pub out_path: PathBuf,
    pub written: usize,
    pub skipped: Vec<(String, String)>,
}

/// Top-level runner: discover URLs (batch) or take the one given, then
/// fetch and extract each sequentially and write the output file.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let client = Client::new(Duration::from_secs(params.timeout_secs))?;

    let (urls, single) = match &params.mode {
        Mode::Single(url) => {
            let url = index::normalize_url(url).unwrap_or_else(|| url.clone());
            (vec![url], true)
        }
        Mode::Batch(n) => {
            let urls =
                index::discover_urls(&client, params.index_csv.as_deref(), *n, params.dedup)?;
            (urls, false)
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
    }

    let mut records = Vec::with_capacity(urls.len());
    let mut skipped = Vec::new();

    for url in urls {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("fetching {url}"));
        }
        match client.fetch_page(&url) {
            Ok(html) => {
                let page = SolicitationPage { url: url.clone(), html };
                records.push(extract::extract(&page));
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&url);
                }
            }
            Err(e) if single => return Err(e.into()),
            Err(e) => {
                // Batch policy: log, remember for the summary, move on
                warn!("skipping {url}: {e}");
                skipped.push((url, e.to_string()));
            }
        }
    }

    let out_path = params.out_path();
    export_records(&out_path, &records, params.format)?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary { out_path, written: records.len(), skipped })
}
