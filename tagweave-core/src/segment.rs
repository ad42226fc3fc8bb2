//! Segment model emitted by the tokenizer

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Insertion-ordered attribute map.
///
/// Determinism contract:
/// - Attributes are stored in encounter order; iteration and serialization
///   never reorder them.
/// - Keys are unique. Writing an existing key overwrites the value in place,
///   keeping the key's original position (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether an attribute with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A recognized self-closing tag: its name and attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRecord {
    /// Tag name, restricted to `[A-Za-z0-9._]`.
    pub name: String,
    /// Attributes in encounter order.
    pub attributes: Attributes,
}

impl TagRecord {
    /// Create a record with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }
}

/// One unit of scanner output, in original input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A recognized self-closing tag.
    Tag(TagRecord),
    /// A contiguous run of literal text.
    Text(String),
}

impl Segment {
    /// The literal text, if this is a text segment.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Segment::Text(text) => Some(text),
            Segment::Tag(_) => None,
        }
    }

    /// The tag record, if this is a tag segment.
    pub fn as_tag(&self) -> Option<&TagRecord> {
        match self {
            Segment::Tag(tag) => Some(tag),
            Segment::Text(_) => None,
        }
    }
}
