//! Terminal renderings of a finished run.

use crate::domain::IngestionOutput;
use crate::error::{IngestResult, IngestionFailure, Stage};

/// Human-readable summary printed by `ingest`.
pub fn format_summary(out: &IngestionOutput) -> String {
    let mut s = String::new();
    s.push_str("=== ingest - dataset ingestion ===\n");
    s.push_str(&format!("Raw:   {} ({} rows)\n", out.raw_path.display(), out.raw_rows));
    s.push_str(&format!("Train: {} ({} rows)\n", out.train_path.display(), out.train_rows));
    s.push_str(&format!("Test:  {} ({} rows)", out.test_path.display(), out.test_rows));
    s
}

/// JSON hand-off for a downstream stage (`ingest --json`).
pub fn to_json(out: &IngestionOutput) -> IngestResult<String> {
    // Runs after every artifact is on disk; a failure here is an output problem.
    serde_json::to_string_pretty(out)
        .map_err(|e| IngestionFailure::wrap(Stage::WriteSplits, "Failed to render run result as JSON", e))
}
