//! The single failure kind of an ingestion run.
//!
//! Every error raised while reading, preparing directories, splitting or
//! writing is wrapped into an [`IngestionFailure`] that records:
//!
//! - the pipeline [`Stage`] that failed (drives the process exit code)
//! - the source location that raised it (`#[track_caller]`)
//! - the originating error, reachable through `Error::source`

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

/// Result alias used throughout the crate.
pub type IngestResult<T> = Result<T, IngestionFailure>;

/// Phase of the ingestion sequence in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ReadSource,
    PrepareArtifacts,
    WriteRaw,
    Split,
    WriteSplits,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::ReadSource => "reading the source dataset",
            Stage::PrepareArtifacts => "preparing the artifacts directory",
            Stage::WriteRaw => "writing the raw copy",
            Stage::Split => "splitting train/test",
            Stage::WriteSplits => "writing the train/test artifacts",
        }
    }

    /// Process exit code for a failure in this stage.
    ///
    /// 2 = bad input, 3 = data cannot be split, 4 = artifact I/O.
    pub fn exit_code(self) -> u8 {
        match self {
            Stage::ReadSource => 2,
            Stage::Split => 3,
            Stage::PrepareArtifacts | Stage::WriteRaw | Stage::WriteSplits => 4,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Data ingestion failed while {stage} [{location}]: {message}")]
pub struct IngestionFailure {
    stage: Stage,
    message: String,
    location: &'static Location<'static>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl IngestionFailure {
    /// A failure with no underlying error (e.g. an impossible split).
    #[track_caller]
    pub fn new(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
            location: Location::caller(),
            source: None,
        }
    }

    /// Wrap an underlying error. Its text is appended to `context`.
    #[track_caller]
    pub fn wrap<E>(stage: Stage, context: impl fmt::Display, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            stage,
            message: format!("{context}: {err}"),
            location: Location::caller(),
            source: Some(Box::new(err)),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where in the crate the failure was raised.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn exit_code(&self) -> u8 {
        self.stage.exit_code()
    }
}
