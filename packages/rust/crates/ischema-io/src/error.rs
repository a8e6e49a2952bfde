//! Error types for the filesystem side of schema generation.
//!
//! Library crates use `thiserror` for explicit error enums.

use std::path::PathBuf;

use ischema_core::SchemaError;
use thiserror::Error;

/// Error types for reading and discovering source files.
#[derive(Error, Debug)]
pub enum IoError {
    /// File or directory does not exist.
    #[error("File not found: {0}")]
    NotFound(String),

    /// File exceeds size limit.
    #[error("File too large: {0} bytes (limit: {1})")]
    TooLarge(u64, u64),

    /// File contains binary content (NULL bytes detected).
    #[error("Binary file detected")]
    BinaryFile,

    /// Low-level I/O error from std::io.
    #[error("IO error: {0}")]
    System(#[from] std::io::Error),
}

/// Error types for `ischema.json` handling.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Config file is not valid JSON or has the wrong shape.
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Config file could not be written.
    #[error("Failed to write config {path}: {source}")]
    Write {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Error types for validating and persisting a compiled schema.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The compiled schema is not a valid draft-07 schema.
    #[error("Invalid schema: {title} ({reason})")]
    Rejected {
        /// Title of the rejected schema.
        title: String,
        /// Validator message.
        reason: String,
    },

    /// The title cannot be used as a file name inside the output directory.
    #[error("Unsafe schema title {title:?}: must be a single file name")]
    UnsafeTitle {
        /// Offending title.
        title: String,
    },

    /// Schema could not be serialized.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Schema file could not be written.
    #[error("Failed to write schema {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Error types for a full generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Source discovery failed.
    #[error("Discovery failed: {0}")]
    Discover(#[source] IoError),

    /// A source file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Source file path.
        path: PathBuf,
        /// Underlying read error.
        source: IoError,
    },

    /// A schema could not be compiled.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A schema was rejected or could not be written.
    #[error(transparent)]
    Sink(#[from] SinkError),
}
