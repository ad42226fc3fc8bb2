//! Tag name allow-list
//!
//! An immutable set of permitted tag names, built once at construction.
//! The tokenizer treats names outside the set as inert text; an absent
//! allow-list (`None` at the tokenizer level) matches every well-formed tag.

use std::collections::HashSet;

/// Immutable set of tag names the tokenizer recognizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagAllowList {
    names: HashSet<String>,
}

impl TagAllowList {
    /// Build from a comma-separated specification such as `"pre, call"`.
    ///
    /// Whitespace around commas is trimmed and empty entries are discarded,
    /// so `"pre,,call,"` yields the same set as `"pre,call"`.
    pub fn from_comma_list(spec: &str) -> Self {
        Self {
            names: spec
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        }
    }

    /// Build from an explicit list of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` is permitted by this list.
    pub fn allows(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of names in the list.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the list contains no names. An empty list permits nothing;
    /// use `None` at the tokenizer level to permit everything.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the permitted names in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_names(iter)
    }
}
