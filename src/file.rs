// src/file.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::csv::write_row;
use crate::error::ScrapeError;
use crate::params::OutputFormat;
use crate::record::FoaRecord;

/// Write all records to `path` in the requested format, creating parent
/// directories as needed. CSV gets a header row; JSON is one pretty-printed
/// array with absent fields as null.
pub fn export_records(
    path: &Path,
    records: &[FoaRecord],
    format: OutputFormat,
) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Csv => {
            write_row(&mut out, &FoaRecord::csv_header(), ',')?;
            for rec in records {
                write_row(&mut out, &rec.to_csv_row(), ',')?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, records)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
