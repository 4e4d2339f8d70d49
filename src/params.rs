// src/params.rs
use std::path::PathBuf;

pub const INDEX_CSV_URL: &str = "https://www.nsf.gov/funding/opps/csvexport?page&_format=csv";
pub const URL_COLUMN: &str = "Solicitation URL";
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/120 Safari/537.36";

pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_OUT_STEM: &str = "foas";
pub const DEFAULT_TIMEOUT_SECS: u64 = 25;

/// What to scrape: one page, or the first N from the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Single(String),
    Batch(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn ext(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// URL deduplication policy during index discovery.
/// `Path` treats URLs differing only in query/fragment as duplicates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dedup {
    Exact,
    Path,
    Off,
}

#[derive(Clone, Debug)]
pub struct Params {
    pub mode: Mode,
    pub out: Option<PathBuf>,          // output path (file); defaulted from format
    pub format: OutputFormat,
    pub index_csv: Option<PathBuf>,    // local index CSV instead of downloading
    pub timeout_secs: u64,
    pub dedup: Dedup,
}

impl Params {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            out: None,
            format: OutputFormat::Csv,
            index_csv: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            dedup: Dedup::Exact,
        }
    }

    /// Resolved output path: explicit `-o` wins, else `out/foas.{csv,json}`.
    pub fn out_path(&self) -> PathBuf {
        self.out.clone().unwrap_or_else(|| {
            PathBuf::from(DEFAULT_OUT_DIR)
                .join(format!("{}.{}", DEFAULT_OUT_STEM, self.format.ext()))
        })
    }
}
