// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failure to retrieve one URL. In batch mode these are logged and the URL
/// is skipped; in single-URL mode they surface to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Top-level errors. Note what is *not* here: a field the extractor cannot
/// find is absent in the record, never an error, and a malformed index row
/// is skipped during discovery.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("index CSV has no header row")]
    EmptyIndex,

    #[error("index CSV is missing the {0:?} column")]
    IndexColumn(String),

    #[error("could not read index CSV {path}: {source}")]
    IndexFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
