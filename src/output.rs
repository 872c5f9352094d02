//! Persistence of report artifacts as JSON and CSV.

use anyhow::Result;
use tracing::{debug, info};

use crate::analysis::compare::ComparisonRow;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Logs a serializable artifact as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Serializes a value to a pretty JSON file, creating parent directories
/// as needed.
pub fn write_json(path: &str, value: &impl Serialize) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let body = serde_json::to_vec_pretty(value)?;
    fs::write(path, body)?;
    debug!(path, "Wrote JSON artifact");

    Ok(())
}

/// Appends comparison rows to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_comparison_rows(path: &str, rows: &[ComparisonRow]) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = rows.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
