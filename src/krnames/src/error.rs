//! Error types for the harvesting pipeline.
//!
//! Per-identifier failures are never errors here; they travel as
//! [`Status`](crate::report::Status) values on each row.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems with the run's inputs. Reported before any request is made.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Provide --db-root or --id-range")]
    MissingSource,

    #[error("DB path not found: {}", .0.display())]
    DbRootNotFound(PathBuf),

    #[error("Invalid id range {0:?}: must look like 1001-1100")]
    InvalidRange(String),

    #[error("No IDs found")]
    NoIdentifiers,
}

/// Failures reading or writing CSV and import files
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid kind: {0}")]
    InvalidKind(String),
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
}
