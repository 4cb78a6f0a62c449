//! Domain types used throughout the ingestion step.
//!
//! This module defines:
//!
//! - the in-memory table (`Dataset`)
//! - run configuration (`IngestionConfig`, `ArtifactPaths`, `SplitSpec`)
//! - the run result (`IngestionOutput`)

pub mod types;

pub use types::*;
