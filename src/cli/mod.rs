//! Command-line parsing for the `ingest` binary.
//!
//! Every flag is optional: running `ingest` with no arguments reproduces the
//! default configuration (`notebook/data/stud.csv` -> `artifacts/`).

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{ArtifactPaths, DEFAULT_SEED, DEFAULT_TEST_SIZE, IngestionConfig, SplitSpec};

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "ingest",
    version,
    about = "Load a CSV dataset, keep a raw copy, and write a seeded train/test split"
)]
pub struct Cli {
    /// Source CSV (header row required).
    #[arg(long, value_name = "CSV")]
    pub source: Option<PathBuf>,

    /// Directory receiving data.csv, train.csv and test.csv.
    #[arg(long, value_name = "DIR")]
    pub artifacts_dir: Option<PathBuf>,

    /// Fraction of rows assigned to the test split.
    #[arg(long, default_value_t = DEFAULT_TEST_SIZE)]
    pub test_size: f64,

    /// Seed for the row shuffle.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Print the run result as JSON instead of a text summary.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Resolve the ingestion configuration, starting from the defaults.
    pub fn to_config(&self) -> IngestionConfig {
        let defaults = IngestionConfig::default();
        IngestionConfig {
            source: self.source.clone().unwrap_or(defaults.source),
            artifacts: self
                .artifacts_dir
                .as_ref()
                .map(ArtifactPaths::under)
                .unwrap_or(defaults.artifacts),
            split: SplitSpec {
                test_size: self.test_size,
                seed: self.seed,
            },
        }
    }
}
