// src/cli.rs
use std::path::PathBuf;

use color_eyre::eyre::{Result, bail};

use crate::params::{Dedup, Mode, OutputFormat, Params};
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<()> {
    let params = parse_cli(std::env::args().skip(1))?;

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&params, Some(&mut progress))?;

    eprintln!(
        "Wrote {} record(s) to {}",
        summary.written,
        summary.out_path.display()
    );
    if !summary.skipped.is_empty() {
        eprintln!("Skipped {} URL(s):", summary.skipped.len());
        for (url, why) in &summary.skipped {
            eprintln!("  {url}: {why}");
        }
    }
    Ok(())
}

pub fn parse_cli(args: impl IntoIterator<Item = String>) -> Result<Params> {
    let mut url: Option<String> = None;
    let mut n: Option<usize> = None;
    let mut out: Option<PathBuf> = None;
    let mut format = OutputFormat::Csv;
    let mut index_csv: Option<PathBuf> = None;
    let mut timeout_secs: Option<u64> = None;
    let mut dedup = Dedup::Exact;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => {
                let v = args.next().ok_or_else(|| missing("--url"))?;
                url = Some(v);
            }
            "-n" => {
                let v: usize = args.next().ok_or_else(|| missing("-n"))?.parse()?;
                if v == 0 {
                    bail!("-n must be a positive integer");
                }
                n = Some(v);
            }
            "--csv" => {
                index_csv = Some(PathBuf::from(args.next().ok_or_else(|| missing("--csv"))?));
            }
            "-o" | "--out" => {
                out = Some(PathBuf::from(args.next().ok_or_else(|| missing("--out"))?));
            }
            "--format" => {
                let v = args.next().ok_or_else(|| missing("--format"))?;
                format = match v.to_ascii_lowercase().as_str() {
                    "csv" => OutputFormat::Csv,
                    "json" => OutputFormat::Json,
                    other => bail!("Unknown format: {other}"),
                };
            }
            "--timeout" => {
                let v: u64 = args.next().ok_or_else(|| missing("--timeout"))?.parse()?;
                if v == 0 {
                    bail!("--timeout must be a positive number of seconds");
                }
                timeout_secs = Some(v);
            }
            "--dedup" => {
                let v = args.next().ok_or_else(|| missing("--dedup"))?;
                dedup = match v.to_ascii_lowercase().as_str() {
                    "exact" => Dedup::Exact,
                    "path" => Dedup::Path,
                    "off" => Dedup::Off,
                    other => bail!("Unknown dedup mode: {other}"),
                };
            }
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {a}"),
        }
    }

    let mode = match (url, n) {
        (Some(u), None) => {
            if u.trim().is_empty() {
                bail!("--url must not be empty");
            }
            Mode::Single(u)
        }
        (None, Some(count)) => Mode::Batch(count),
        (Some(_), Some(_)) => bail!("--url and -n are mutually exclusive"),
        (None, None) => bail!("Specify --url <URL> or -n <N> (see --help)"),
    };

    let mut params = Params::new(mode);
    params.out = out;
    params.format = format;
    params.index_csv = index_csv;
    if let Some(t) = timeout_secs {
        params.timeout_secs = t;
    }
    params.dedup = dedup;
    Ok(params)
}

fn missing(flag: &str) -> color_eyre::eyre::Report {
    color_eyre::eyre::eyre!("Missing value for {flag}")
}

/// Prints one line per finished URL; detailed tracing goes through `log`.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        log::info!("{msg}");
    }

    fn item_done(&mut self, url: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, url);
    }
}
