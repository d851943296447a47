//! CSV signal and feature I/O
//!
//! Input is a single-column delimited file of floats, one sample per row,
//! no header. Output is a four-column file with a fixed header. Loading is
//! fail-fast: the first malformed row aborts the whole load so downstream
//! output stays deterministic.

use std::fs;
use std::path::Path;

use siglab_core::FeatureVector;
use tracing::warn;

use crate::error::{Error, Result};

/// Header written before feature rows, fields in output order
pub const FEATURE_HEADER: [&str; 4] = ["rms", "zero_crossings", "peak_to_peak", "mad"];

/// Load a single-column CSV of floats.
///
/// Blank rows are skipped. Rows with extra fields use the first and log a
/// warning. A first field that fails float parsing aborts the load with
/// [`Error::MalformedRecord`] carrying the path, 1-based row index, and raw
/// value.
pub fn load_signal_csv(path: &Path) -> Result<Vec<f64>> {
    if !path.is_file() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut signal = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Physical 1-based line in the source file; the csv reader skips
        // blank lines, so a record index would undercount.
        let row = record.position().map_or(0, |p| p.line() as usize);
        let first = record.get(0).unwrap_or("");
        if record.len() > 1 {
            warn!(row, "row has more than one column; using first field");
        }
        match first.trim().parse::<f64>() {
            Ok(value) => signal.push(value),
            Err(_) => {
                let err = Error::MalformedRecord {
                    path: path.to_path_buf(),
                    row,
                    value: first.to_string(),
                };
                tracing::error!(%err, "aborting signal load");
                return Err(err);
            }
        }
    }
    Ok(signal)
}

/// Write feature rows with the fixed header, creating parent directories and
/// overwriting any previous file in full.
pub fn save_features_csv(path: &Path, rows: &[FeatureVector]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(FEATURE_HEADER)?;
    for row in rows {
        writer.write_record(row.as_array().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read feature rows back, skipping the header.
///
/// Used by tests and downstream consumers of pipeline output; applies the
/// same fail-fast malformed-record policy as [`load_signal_csv`].
pub fn load_features_csv(path: &Path) -> Result<Vec<FeatureVector>> {
    if !path.is_file() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = record.position().map_or(0, |p| p.line() as usize);
        let mut values = [0.0f64; 4];
        for (i, slot) in values.iter_mut().enumerate() {
            let raw = record.get(i).unwrap_or("");
            *slot = raw.trim().parse::<f64>().map_err(|_| Error::MalformedRecord {
                path: path.to_path_buf(),
                row,
                value: raw.to_string(),
            })?;
        }
        rows.push(FeatureVector::from_array(values));
    }
    Ok(rows)
}

/// Write a generated signal as a single-column CSV, one sample per row.
pub fn save_signal_csv(path: &Path, samples: &[f64]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for sample in samples {
        writer.write_record([sample.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
