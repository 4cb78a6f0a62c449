//! Shared domain types.
//!
//! These types are intentionally kept small:
//!
//! - `Dataset` is the in-memory table between the read and the writes
//! - `IngestionConfig` is the explicit configuration value handed to the ingestor
//! - `IngestionOutput` is what the next pipeline stage consumes

use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::Serialize;

/// Historical location of the source CSV, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "notebook/data/stud.csv";
/// Directory holding the three artifacts.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";
pub const RAW_FILE: &str = "data.csv";
pub const TRAIN_FILE: &str = "train.csv";
pub const TEST_FILE: &str = "test.csv";

pub const DEFAULT_TEST_SIZE: f64 = 0.2;
pub const DEFAULT_SEED: u64 = 42;

/// An in-memory table: one header record plus data rows.
///
/// Cells are kept as raw text. Nothing is typed or validated, so writing the
/// dataset back out reproduces the source column-for-column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
}

impl Dataset {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self { headers, rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Where the raw copy and the two split files are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPaths {
    pub raw: PathBuf,
    pub train: PathBuf,
    pub test: PathBuf,
}

impl ArtifactPaths {
    /// Standard file names (`data.csv`, `train.csv`, `test.csv`) under `dir`.
    pub fn under(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            raw: dir.join(RAW_FILE),
            train: dir.join(TRAIN_FILE),
            test: dir.join(TEST_FILE),
        }
    }

    /// In the order the directories must be prepared.
    pub fn all(&self) -> [&Path; 3] {
        [&self.train, &self.test, &self.raw]
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::under(DEFAULT_ARTIFACTS_DIR)
    }
}

/// Parameters of the train/test partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitSpec {
    /// Fraction of rows assigned to the test partition, in (0, 1).
    pub test_size: f64,
    pub seed: u64,
}

impl Default for SplitSpec {
    fn default() -> Self {
        Self {
            test_size: DEFAULT_TEST_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Everything the ingestor needs; `Default` reproduces the historical constants.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionConfig {
    pub source: PathBuf,
    pub artifacts: ArtifactPaths,
    pub split: SplitSpec,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            artifacts: ArtifactPaths::default(),
            split: SplitSpec::default(),
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestionOutput {
    pub train_path: PathBuf,
    pub test_path: PathBuf,
    pub raw_path: PathBuf,
    pub raw_rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
}

impl IngestionOutput {
    /// The `(train, test)` pair handed to the transformation stage.
    pub fn paths(&self) -> (&Path, &Path) {
        (&self.train_path, &self.test_path)
    }

    pub fn into_paths(self) -> (PathBuf, PathBuf) {
        (self.train_path, self.test_path)
    }
}
