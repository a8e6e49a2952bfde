//! Schema validation against the draft-07 meta-schema.

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

/// Accepts or rejects a compiled schema document.
pub trait SchemaValidator {
    /// `Ok(())` if `schema` is acceptable, otherwise a human-readable reason.
    ///
    /// # Errors
    /// Returns the rejection reason.
    fn check(&self, schema: &Value) -> Result<(), String>;
}

/// Validates documents as JSON Schema draft-07 schemas.
///
/// Compiling a schema checks it against the meta-schema, so unknown `type`
/// names (e.g. `Date`) are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Draft7Validator;

impl SchemaValidator for Draft7Validator {
    fn check(&self, schema: &Value) -> Result<(), String> {
        JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(schema)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
