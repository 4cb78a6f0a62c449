//! CSV ingest.
//!
//! Reads the whole source file into a [`Dataset`]. The first row is the
//! header. Cells are not trimmed, typed or validated; the only structural
//! requirement is that every row has as many fields as the header.

use std::fs::File;
use std::path::Path;

use crate::domain::Dataset;
use crate::error::{IngestResult, IngestionFailure, Stage};

/// Load a CSV file (header row required) into memory.
pub fn read_dataset(path: &Path) -> IngestResult<Dataset> {
    let file = File::open(path).map_err(|e| {
        IngestionFailure::wrap(
            Stage::ReadSource,
            format!("Failed to open source CSV '{}'", path.display()),
            e,
        )
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| IngestionFailure::wrap(Stage::ReadSource, "Failed to read CSV headers", e))?
        .clone();

    if headers.is_empty() {
        return Err(IngestionFailure::new(
            Stage::ReadSource,
            format!("Source CSV '{}' has no columns to parse.", path.display()),
        ));
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: data rows start on line 2 (1-based, after the header).
        let line = idx + 2;
        let record = result.map_err(|e| {
            IngestionFailure::wrap(Stage::ReadSource, format!("Malformed CSV row near line {line}"), e)
        })?;
        rows.push(record);
    }

    Ok(Dataset::new(headers, rows))
}
