//! Schema compiler: interface tree to JSON Schema document.
//!
//! JSON Schema has no slot for a declaration-level index signature, so the
//! signatures of each level are serialized as `{"indexSignatures":[...]}` and
//! stored in a string field chosen by [`IndexEncoding`].

use serde::Serialize;

use crate::config::IndexEncoding;
use crate::error::SchemaError;
use crate::model::{Fields, IndexEntry, Interface, PropValue};
use crate::schema::{PropertySchema, Schema};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexSignatures<'a> {
    index_signatures: &'a [IndexEntry],
}

/// Serialize index entries as compact `{"indexSignatures":[...]}` JSON.
///
/// # Errors
/// Returns `SchemaError::Encode` if serialization fails.
pub fn encode_index_signatures(indices: &[IndexEntry]) -> Result<String, SchemaError> {
    Ok(serde_json::to_string(&IndexSignatures {
        index_signatures: indices,
    })?)
}

/// Compiles [`Interface`] trees into [`Schema`] documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaCompiler {
    encoding: IndexEncoding,
}

impl SchemaCompiler {
    /// Compiler storing index signatures according to `encoding`.
    #[must_use]
    pub fn new(encoding: IndexEncoding) -> Self {
        Self { encoding }
    }

    /// Index encoding in use.
    #[must_use]
    pub fn encoding(&self) -> IndexEncoding {
        self.encoding
    }

    /// Compile one interface.
    ///
    /// Every top-level property is listed in `required`; nested objects carry
    /// no `required` list.
    ///
    /// # Errors
    /// Returns `SchemaError::Encode` if index signatures cannot be serialized.
    pub fn compile(&self, interface: &Interface) -> Result<Schema, SchemaError> {
        let mut schema = Schema::new(interface.name.clone());
        if !interface.indices.is_empty() {
            schema.comment = Some(encode_index_signatures(&interface.indices)?);
        }
        schema.properties = self.compile_properties(interface)?;
        schema.required = interface.props.keys().map(str::to_string).collect();
        Ok(schema)
    }

    fn compile_properties(
        &self,
        interface: &Interface,
    ) -> Result<Fields<PropertySchema>, SchemaError> {
        let mut properties = Fields::new();
        for (name, value) in interface.props.iter() {
            let property = match value {
                PropValue::Leaf(token) => PropertySchema::leaf(token.clone()),
                PropValue::Nested(inner) => self.compile_nested(inner)?,
            };
            properties.insert(name, property);
        }
        Ok(properties)
    }

    fn compile_nested(&self, inner: &Interface) -> Result<PropertySchema, SchemaError> {
        let mut property = PropertySchema::object();
        if !inner.indices.is_empty() {
            let encoded = encode_index_signatures(&inner.indices)?;
            match self.encoding {
                IndexEncoding::Legacy => property.description = encoded,
                IndexEncoding::Uniform => property.comment = Some(encoded),
            }
        }
        property.properties = Some(self.compile_properties(inner)?);
        Ok(property)
    }
}

/// Compile with the default ([`IndexEncoding::Legacy`]) encoding.
///
/// # Errors
/// Returns `SchemaError::Encode` if index signatures cannot be serialized.
pub fn compile(interface: &Interface) -> Result<Schema, SchemaError> {
    SchemaCompiler::default().compile(interface)
}
