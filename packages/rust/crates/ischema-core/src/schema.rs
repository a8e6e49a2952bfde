//! JSON Schema document types emitted by the compiler.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::SchemaError;
use crate::model::Fields;

/// Dialect URI written to every root schema.
pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

const OBJECT: &str = "object";

/// Root schema compiled from one interface.
///
/// Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    /// Always [`DRAFT_07`].
    #[serde(rename = "$schema")]
    pub dialect: String,
    /// Interface name; also the output file stem.
    pub title: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Always `object`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Compiled properties in declaration order.
    pub properties: Fields<PropertySchema>,
    /// Every top-level property name, in declaration order.
    pub required: Vec<String>,
    /// Serialized index signatures of the root interface.
    #[serde(rename = "$comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Schema {
    /// Empty object schema titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            dialect: DRAFT_07.to_string(),
            title: title.into(),
            description: None,
            kind: OBJECT.to_string(),
            properties: Fields::new(),
            required: Vec::new(),
            comment: None,
        }
    }

    /// File name the schema is persisted under.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.title)
    }

    /// Convert to a generic JSON value (e.g. for validation).
    ///
    /// # Errors
    /// Returns `SchemaError::Encode` if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value, SchemaError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Pretty-print with tab indentation.
    ///
    /// # Errors
    /// Returns `SchemaError::Encode` if serialization fails.
    pub fn to_pretty_vec(&self) -> Result<Vec<u8>, SchemaError> {
        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
        self.serialize(&mut serializer)?;
        Ok(buffer)
    }
}

/// Schema of a single property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySchema {
    /// Empty, or the serialized index signatures of a nested object
    /// under [`IndexEncoding::Legacy`](crate::IndexEncoding::Legacy).
    pub description: String,
    /// Declared type token, or `object` for nested objects.
    #[serde(rename = "type")]
    pub kind: String,
    /// Present only for nested objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Fields<PropertySchema>>,
    /// Serialized index signatures under
    /// [`IndexEncoding::Uniform`](crate::IndexEncoding::Uniform).
    #[serde(rename = "$comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl PropertySchema {
    /// Leaf property with the given type token.
    pub fn leaf(kind: impl Into<String>) -> Self {
        Self {
            description: String::new(),
            kind: kind.into(),
            properties: None,
            comment: None,
        }
    }

    /// Nested object property with no properties yet.
    #[must_use]
    pub fn object() -> Self {
        Self {
            description: String::new(),
            kind: OBJECT.to_string(),
            properties: Some(Fields::new()),
            comment: None,
        }
    }
}
