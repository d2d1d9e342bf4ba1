//! Error types for the command-line front end

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a job
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file could not be read
    #[error("Cannot read input {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("Cannot write output {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unrecognized table format name
    #[error("Unknown table format: {0} (expected end-of-stream or counted)")]
    UnknownTableFormat(String),

    /// Codec failure
    #[error(transparent)]
    Codec(#[from] huffpack_core::Error),
}
