//! `data-ingest` library crate.
//!
//! The binary (`ingest`) is a thin wrapper around this library so that:
//!
//! - the ingestion step is callable from other pipeline stages without spawning processes
//! - core logic is testable against temporary directories
//! - configuration is an explicit value rather than embedded constants

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;

pub use app::{Ingestor, run_ingestion};
pub use domain::{ArtifactPaths, Dataset, IngestionConfig, IngestionOutput, SplitSpec};
pub use error::{IngestResult, IngestionFailure, Stage};
