//! Content-store resolver
//!
//! The reference resolver for build-time content substitution: tag
//! attributes carry a `content` key naming a dotted path into a JSON
//! document, and the tag is replaced by the value stored there.

use crate::error::Result;
use serde_json::Value;
use std::path::Path;
use tagweave_core::{TagAllowList, TagRecord};
use tagweave_engine::{ResolveError, Resolver};

/// A JSON document addressed by dotted key paths.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: Value,
}

impl ContentStore {
    /// Wrap an already-parsed document.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse a JSON document from a string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a JSON document from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Walk a dotted path (`a.b.c`) down the document.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.root, |node, key| node.get(key))
    }

    /// Look up a dotted path and render the leaf as replacement text.
    /// Strings are used as-is, numbers and booleans are formatted; anything
    /// else (objects, arrays, null, missing) yields `None`.
    pub fn render(&self, path: &str) -> Option<String> {
        match self.lookup(path)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Resolver substituting tags from a [`ContentStore`].
///
/// Recognizes `pre` tags by default; the tag's `content` attribute names
/// the key to substitute. A missing attribute or unknown key fails the
/// session — typos in content keys should break the build, not ship.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    store: ContentStore,
    tags: Option<TagAllowList>,
}

impl ContentResolver {
    /// Create a resolver handling `pre` tags.
    pub fn new(store: ContentStore) -> Self {
        Self {
            store,
            tags: Some(TagAllowList::from_names(["pre"])),
        }
    }

    /// Replace the tag allow-list. `None` resolves every well-formed tag.
    pub fn with_tags(mut self, tags: Option<TagAllowList>) -> Self {
        self.tags = tags;
        self
    }

    /// The backing store.
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    fn lookup_for(&self, tag: &TagRecord) -> std::result::Result<String, String> {
        let key = tag
            .attributes
            .get("content")
            .ok_or_else(|| format!("tag '{}' requires a content attribute", tag.name))?;
        self.store
            .render(key)
            .ok_or_else(|| format!("no content for key '{key}'"))
    }
}

impl Resolver for ContentResolver {
    fn tags(&self) -> Option<TagAllowList> {
        self.tags.clone()
    }

    async fn resolve_tag(&self, tag: &TagRecord) -> std::result::Result<String, ResolveError> {
        self.lookup_for(tag).map_err(ResolveError::from)
    }
}
