//! High-level configuration API

use crate::error::{ApiError, Result};
use tagweave_core::TagAllowList;

/// Default size of the read chunks fed through the sequencer.
pub const DEFAULT_CHUNK_SIZE: usize = tagweave_engine::DEFAULT_CHUNK_SIZE;

/// High-level configuration for template processing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Allow-list override. When set it takes precedence over the
    /// resolver's own list; `None` defers to the resolver.
    pub(crate) tags: Option<TagAllowList>,
    /// Read chunk size in bytes.
    pub(crate) chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tags: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Config {
    /// Create a builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured allow-list override, if any.
    pub fn tags(&self) -> Option<&TagAllowList> {
        self.tags.as_ref()
    }

    /// The configured chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the allow-list from a comma-separated specification such as
    /// `"pre, call"`. An empty specification is a configuration error.
    pub fn tags(mut self, spec: &str) -> Result<Self> {
        let list = TagAllowList::from_comma_list(spec);
        if list.is_empty() {
            return Err(ApiError::Config(format!(
                "tag specification '{spec}' contains no names"
            )));
        }
        self.config.tags = Some(list);
        Ok(self)
    }

    /// Set the allow-list from an explicit list of names.
    pub fn tag_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.tags = Some(TagAllowList::from_names(names));
        self
    }

    /// Set the read chunk size in bytes.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<Config> {
        if self.config.chunk_size == 0 {
            return Err(ApiError::Config("chunk size must be non-zero".to_string()));
        }
        Ok(self.config)
    }
}
