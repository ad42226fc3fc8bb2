//! Public API for tagweave template tag resolution
//!
//! This crate provides a clean, stable interface for locating
//! `{@name attr=value .../}` constructs in template text and rewriting them
//! through caller-supplied asynchronous resolution logic, hiding the
//! tokenizer and sequencer internals.
//!
//! # Example
//!
//! ```no_run
//! use tagweave_api::{ContentResolver, ContentStore, Input, TemplateProcessor};
//!
//! # async fn demo() -> Result<(), tagweave_api::ApiError> {
//! let store = ContentStore::from_json_str(r#"{"index":{"greeting":"Hello"}}"#)?;
//! let processor = TemplateProcessor::new(ContentResolver::new(store));
//!
//! let output = processor
//!     .process(Input::from_text("<p>{@pre content=index.greeting /}</p>"))
//!     .await?;
//! assert_eq!(output.text, "<p>Hello</p>");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod content;
pub mod dto;
pub mod error;
pub mod input;
pub mod oneshot;

use std::time::Instant;
use tokio::io::{AsyncRead, AsyncReadExt};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use content::{ContentResolver, ContentStore};
pub use dto::{Metadata, Output};
pub use error::{ApiError, Result};
pub use input::Input;
pub use oneshot::{substitute, substitute_with};

// Re-export the underlying layers for callers implementing resolvers.
pub use tagweave_core::{Attributes, ScanError, Segment, TagAllowList, TagRecord, Tokenizer};
pub use tagweave_engine::{EngineError, ResolveError, Resolver, Sequencer};

/// Main entry point for template tag resolution.
///
/// Owns a resolver and a configuration; each [`process`](Self::process) call
/// runs one session over one input, streaming it through the sequencer in
/// configured chunk sizes.
pub struct TemplateProcessor<R: Resolver> {
    resolver: R,
    config: Config,
}

impl<R: Resolver> TemplateProcessor<R> {
    /// Create a processor with the default configuration.
    pub fn new(resolver: R) -> Self {
        Self::with_config(resolver, Config::default())
    }

    /// Create a processor with a custom configuration.
    pub fn with_config(resolver: R, config: Config) -> Self {
        Self { resolver, config }
    }

    /// The current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The caller-supplied resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Resolve one input and return the output with processing metadata.
    pub async fn process(&self, input: Input) -> Result<Output> {
        let started = Instant::now();
        log::debug!("processing {input:?}");

        let (text, stats, bytes_in) = match input {
            Input::Text(text) => self.drive(text.as_bytes()).await?,
            Input::Bytes(bytes) => self.drive(bytes.as_slice()).await?,
            Input::File(path) => {
                let file = tokio::fs::File::open(&path).await.map_err(|e| {
                    ApiError::Io(std::io::Error::new(
                        e.kind(),
                        format!("failed to open {}: {e}", path.display()),
                    ))
                })?;
                self.drive(file).await?
            }
            Input::Reader(reader) => self.drive(reader).await?,
        };

        let bytes_out = text.len();
        Ok(Output {
            text,
            metadata: Metadata {
                tags_resolved: stats.tags_resolved,
                text_segments: stats.text_segments,
                chunks: stats.chunks,
                bytes_in,
                bytes_out,
                processing_time_ms: started.elapsed().as_millis() as u64,
            },
        })
    }

    /// Resolve a text string directly (convenience method).
    pub async fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text)).await
    }

    /// Resolve a file (convenience method).
    pub async fn process_file<P: Into<std::path::PathBuf>>(&self, path: P) -> Result<Output> {
        self.process(Input::from_file(path)).await
    }

    /// Pump a byte source through one sequencer session.
    async fn drive<S>(
        &self,
        mut source: S,
    ) -> Result<(String, tagweave_engine::SequencerStats, usize)>
    where
        S: AsyncRead + Unpin,
    {
        let tags = match self.config.tags() {
            Some(tags) => Some(tags.clone()),
            None => self.resolver.tags(),
        };
        let mut sequencer = Sequencer::with_tags(&self.resolver, tags);
        let mut buf = vec![0u8; self.config.chunk_size()];
        let mut output = String::new();
        let mut bytes_in = 0usize;

        loop {
            let n = source.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            bytes_in += n;
            output.push_str(&sequencer.write_bytes(&buf[..n]).await?);
        }
        output.push_str(&sequencer.finish().await?);
        Ok((output, sequencer.stats(), bytes_in))
    }
}

// Convenience functions

/// Resolve a text string with the given resolver and default configuration.
pub async fn resolve_text(text: &str, resolver: impl Resolver) -> Result<String> {
    let processor = TemplateProcessor::new(resolver);
    Ok(processor.process(Input::from_text(text)).await?.text)
}

/// Resolve a file with the given resolver and default configuration.
pub async fn resolve_file<P: Into<std::path::PathBuf>>(
    path: P,
    resolver: impl Resolver,
) -> Result<String> {
    let processor = TemplateProcessor::new(resolver);
    Ok(processor.process(Input::from_file(path)).await?.text)
}
