//! Error types for schema compilation.
//!
//! Parsing itself never fails: malformed input degrades into an incomplete
//! interface. Only serialization of the compiled documents can error.

use thiserror::Error;

/// Error types for schema compilation and encoding.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Failed to encode index signatures or a schema document as JSON.
    #[error("JSON encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}
