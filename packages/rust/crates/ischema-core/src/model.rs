//! Interface tree model produced by the structural parser.

use indexmap::IndexMap;
use serde::Serialize;
use serde::ser::Serializer;

/// Insertion-ordered string-keyed map backed by [`IndexMap`].
///
/// Keys are unique; inserting an existing key replaces the value in place
/// and keeps its original position. Lookups are O(1) on average, so wide
/// interfaces compile in linear time. Equality is order-sensitive.
#[derive(Debug, Clone)]
pub struct Fields<V> {
    entries: IndexMap<String, V>,
}

impl<V> Default for Fields<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V: PartialEq> PartialEq for Fields<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl<V> Fields<V> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Serialize> Serialize for Fields<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}

/// A parsed declaration, or an anonymous object nested inside one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Interface {
    /// Declared name for the root; property key for nested objects.
    pub name: String,
    /// Properties in declaration order.
    pub props: Fields<PropValue>,
    /// Index signatures declared at this level.
    pub indices: Vec<IndexEntry>,
}

impl Interface {
    /// Create an empty interface.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Look up a property by name.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    /// Nested object stored under `name`, if that property is one.
    #[must_use]
    pub fn nested(&self, name: &str) -> Option<&Interface> {
        match self.props.get(name) {
            Some(PropValue::Nested(inner)) => Some(inner),
            _ => None,
        }
    }
}

/// Value of a property: a bare type token or a nested object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Type token such as `string` or `number`.
    Leaf(String),
    /// Anonymous object literal type.
    Nested(Interface),
}

impl PropValue {
    /// The type token of a leaf value.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(token) => Some(token),
            Self::Nested(_) => None,
        }
    }
}

/// An index signature `[key: K]: V`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexEntry {
    /// Key type, e.g. `string`.
    pub key: String,
    /// Value type.
    pub value: PropValue,
}

impl IndexEntry {
    /// Index signature whose value is a bare type token.
    pub fn leaf(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropValue::Leaf(value.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_replace_keeps_position() {
        let mut fields = Fields::new();
        fields.insert("a", 1);
        fields.insert("b", 2);
        assert_eq!(fields.insert("a", 3), Some(1));
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(fields.get("a"), Some(&3));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_fields_equality_respects_order() {
        let mut ab = Fields::new();
        ab.insert("a", 1);
        ab.insert("b", 2);
        let mut ba = Fields::new();
        ba.insert("b", 2);
        ba.insert("a", 1);
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn test_wide_fields_keep_order() {
        let mut fields = Fields::new();
        for i in 0..10_000 {
            fields.insert(format!("p{i}"), i);
        }
        assert_eq!(fields.get("p9999"), Some(&9999));
        assert_eq!(fields.keys().nth(1), Some("p1"));
        assert_eq!(fields.len(), 10_000);
    }

    #[test]
    fn test_interface_serializes_in_declaration_order() {
        let mut inner = Interface::new("b");
        inner.props.insert("c", PropValue::Leaf("number".into()));
        let mut root = Interface::new("Foo");
        root.props.insert("z", PropValue::Leaf("string".into()));
        root.props.insert("b", PropValue::Nested(inner));
        root.indices.push(IndexEntry::leaf("string", "number"));

        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Foo","props":{"z":"string","b":{"name":"b","props":{"c":"number"},"indices":[]}},"indices":[{"key":"string","value":"number"}]}"#
        );
    }

    #[test]
    fn test_nested_lookup() {
        let mut root = Interface::new("Foo");
        root.props.insert("a", PropValue::Leaf("string".into()));
        root.props.insert("b", PropValue::Nested(Interface::new("b")));
        assert!(root.nested("a").is_none());
        assert_eq!(root.nested("b").map(|i| i.name.as_str()), Some("b"));
        assert_eq!(root.prop("a").and_then(PropValue::as_leaf), Some("string"));
    }
}
