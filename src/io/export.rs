//! Write datasets back out as CSV artifacts.
//!
//! Artifacts always carry the header row and never an index column, so they
//! can be re-read by the same ingest code (or any CSV reader) unchanged.

use std::fs::{File, create_dir_all};
use std::path::Path;

use csv::StringRecord;

use crate::error::{IngestResult, IngestionFailure, Stage};

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> IngestResult<()> {
    let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    create_dir_all(dir).map_err(|e| {
        IngestionFailure::wrap(
            Stage::PrepareArtifacts,
            format!("Failed to create artifacts directory '{}'", dir.display()),
            e,
        )
    })
}

/// Write `headers` followed by `rows` to `path`, replacing any existing file.
///
/// `stage` labels the failure if anything goes wrong.
pub fn write_csv<'a, I>(path: &Path, headers: &StringRecord, rows: I, stage: Stage) -> IngestResult<usize>
where
    I: IntoIterator<Item = &'a StringRecord>,
{
    let file = File::create(path).map_err(|e| {
        IngestionFailure::wrap(stage, format!("Failed to create '{}'", path.display()), e)
    })?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(headers)
        .map_err(|e| IngestionFailure::wrap(stage, format!("Failed to write header to '{}'", path.display()), e))?;

    let mut written = 0usize;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| IngestionFailure::wrap(stage, format!("Failed to write row to '{}'", path.display()), e))?;
        written += 1;
    }

    writer
        .flush()
        .map_err(|e| IngestionFailure::wrap(stage, format!("Failed to flush '{}'", path.display()), e))?;

    Ok(written)
}
