//! Grammar configuration: marker literals and index-signature handling.

use serde::{Deserialize, Serialize};

/// Line that opens a schema block.
pub const DEFAULT_START_MARKER: &str = "/* SCHEMA */";

/// Line that closes a schema block.
pub const DEFAULT_END_MARKER: &str = "/* END SCHEMA */";

/// Property-name token (minus its trailing `:`) that opens an index signature.
pub const DEFAULT_INDEX_OPENER: &str = "[key";

/// Literals the extractor and parser match against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GrammarConfig {
    /// Trimmed line that opens a block (e.g. `/* SCHEMA */`).
    pub start_marker: String,
    /// Trimmed line that closes a block (e.g. `/* END SCHEMA */`).
    pub end_marker: String,
    /// Token prefix of an index signature (e.g. `[key` in `[key: string]: number;`).
    pub index_opener: String,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
            index_opener: DEFAULT_INDEX_OPENER.to_string(),
        }
    }
}

/// Where serialized index signatures are stored in the compiled schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexEncoding {
    /// Root in `$comment`, nested objects in `description`.
    ///
    /// Matches the output of earlier releases byte for byte.
    #[default]
    Legacy,
    /// `$comment` at every level; nested `description` stays empty.
    Uniform,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let grammar = GrammarConfig::default();
        assert_eq!(grammar.start_marker, "/* SCHEMA */");
        assert_eq!(grammar.end_marker, "/* END SCHEMA */");
        assert_eq!(grammar.index_opener, "[key");
    }

    #[test]
    fn test_partial_grammar_fills_defaults() {
        let grammar: GrammarConfig =
            serde_json::from_str(r#"{"startMarker": "// @schema"}"#).unwrap();
        assert_eq!(grammar.start_marker, "// @schema");
        assert_eq!(grammar.end_marker, DEFAULT_END_MARKER);
    }

    #[test]
    fn test_index_encoding_names() {
        let encoding: IndexEncoding = serde_json::from_str(r#""uniform""#).unwrap();
        assert_eq!(encoding, IndexEncoding::Uniform);
        assert_eq!(serde_json::to_string(&IndexEncoding::Legacy).unwrap(), r#""legacy""#);
    }
}
