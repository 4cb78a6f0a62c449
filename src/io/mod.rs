//! Input/output helpers.
//!
//! - CSV ingest into a `Dataset` (`ingest`)
//! - CSV artifact writing + directory preparation (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
