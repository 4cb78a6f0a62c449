//! The ingestion sequence shared by the binary and library callers.
//!
//! read source -> prepare artifact dirs -> write raw copy -> split -> write train/test
//!
//! The source is read before anything touches the artifacts directory, so a
//! missing or malformed source leaves no output behind. A failure later on is
//! not rolled back: the raw copy may already be on disk.

use crate::data::train_test_split;
use crate::domain::{IngestionConfig, IngestionOutput};
use crate::error::{IngestResult, Stage};
use crate::io::{ensure_parent_dir, read_dataset, write_csv};

/// Runs one ingestion pass for a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    config: IngestionConfig,
}

impl Ingestor {
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Execute the full sequence and return where the splits were written.
    pub fn run(&self) -> IngestResult<IngestionOutput> {
        log::info!("Entered the data ingestion component");
        let cfg = &self.config;
        let paths = &cfg.artifacts;

        let dataset = read_dataset(&cfg.source)?;
        log::info!(
            "Read the dataset from '{}' ({} rows x {} columns)",
            cfg.source.display(),
            dataset.n_rows(),
            dataset.n_columns()
        );

        for path in paths.all() {
            ensure_parent_dir(path)?;
        }

        let raw_rows = write_csv(&paths.raw, &dataset.headers, &dataset.rows, Stage::WriteRaw)?;
        log::debug!("Raw copy written to '{}'", paths.raw.display());

        log::info!("Train/test split initiated");
        let (train, test) = train_test_split(&dataset, &cfg.split)?;
        drop(dataset);

        let train_rows = write_csv(&paths.train, &train.headers, &train.rows, Stage::WriteSplits)?;
        let test_rows = write_csv(&paths.test, &test.headers, &test.rows, Stage::WriteSplits)?;

        log::info!(
            "Ingestion of the data is complete: train={} ({train_rows} rows), test={} ({test_rows} rows)",
            paths.train.display(),
            paths.test.display()
        );

        Ok(IngestionOutput {
            train_path: paths.train.clone(),
            test_path: paths.test.clone(),
            raw_path: paths.raw.clone(),
            raw_rows,
            train_rows,
            test_rows,
        })
    }
}

/// Run ingestion for `config`.
pub fn run_ingestion(config: &IngestionConfig) -> IngestResult<IngestionOutput> {
    Ingestor::new(config.clone()).run()
}
