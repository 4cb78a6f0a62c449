//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads an optional `.env` and initializes logging
//! - parses CLI arguments into an `IngestionConfig`
//! - runs the ingestion pipeline
//! - prints the result (text summary or JSON)

use clap::Parser;

use crate::cli::Cli;
use crate::error::IngestResult;

pub mod pipeline;

pub use pipeline::{Ingestor, run_ingestion};

/// Entry point for the `ingest` binary.
pub fn run() -> IngestResult<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = cli.to_config();
    log::debug!("Resolved configuration: {config:?}");

    let out = Ingestor::new(config).run()?;

    if cli.json {
        println!("{}", crate::report::to_json(&out)?);
    } else {
        println!("{}", crate::report::format_summary(&out));
    }

    Ok(())
}

/// `info` by default; `RUST_LOG` (from the environment or `.env`) overrides.
fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    // Ignore a second initialization (e.g. when embedded in another binary).
    let _ = env_logger::Builder::from_env(env).try_init();
}
