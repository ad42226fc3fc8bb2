//! The scan → drain → continue unit of work
//!
//! The tokenizer has no notion of suspension, so the sequencer treats each
//! inbound chunk as an atomic unit: feed the chunk, force-close the tokenizer
//! to flush the unit's trailing text, resolve the queued segments one at a
//! time in input order, then resume the tokenizer for the next chunk. The
//! only suspension points are the per-segment resolver calls; scanning itself
//! is a pure, non-suspending pass.

use crate::decode::Utf8Decoder;
use crate::error::{EngineError, Result};
use crate::resolver::Resolver;
use tagweave_core::{Segment, TagAllowList, Tokenizer};

/// Counters accumulated over a session's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequencerStats {
    /// Chunks accepted via `write`/`write_bytes`.
    pub chunks: usize,
    /// Tag segments resolved.
    pub tags_resolved: usize,
    /// Text segments resolved (or passed through).
    pub text_segments: usize,
}

/// Orchestrates one tokenizer against a stream of inbound chunks.
///
/// A sequencer is a single logical session: exclusively owned tokenizer,
/// segment queue, and resolver; nothing is shared across sessions and no
/// resolver call for segment *k+1* starts before segment *k*'s output has
/// been appended. Any scan or resolver failure poisons the session — every
/// subsequent call fails with [`EngineError::SessionFailed`], output already
/// returned for prior chunks remains valid, and the failing chunk commits
/// nothing.
pub struct Sequencer<R: Resolver> {
    tokenizer: Tokenizer,
    decoder: Utf8Decoder,
    resolver: R,
    stats: SequencerStats,
    poisoned: bool,
}

impl<R: Resolver> Sequencer<R> {
    /// Create a session using the resolver's own allow-list.
    pub fn new(resolver: R) -> Self {
        let tags = resolver.tags();
        Self::with_tags(resolver, tags)
    }

    /// Create a session with an explicit allow-list, overriding the
    /// resolver's.
    pub fn with_tags(resolver: R, tags: Option<TagAllowList>) -> Self {
        Self {
            tokenizer: Tokenizer::new(tags),
            decoder: Utf8Decoder::new(),
            resolver,
            stats: SequencerStats::default(),
            poisoned: false,
        }
    }

    /// The caller-supplied resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Session counters so far.
    pub fn stats(&self) -> SequencerStats {
        self.stats
    }

    /// Process one chunk of text and return its resolved output.
    ///
    /// The returned future completing is the write acknowledgment: it
    /// resolves only once every segment the chunk produced has been resolved
    /// and appended, so awaiting it before the next `write` is the
    /// backpressure discipline.
    pub async fn write(&mut self, chunk: &str) -> Result<String> {
        self.guard()?;
        let result = self.run_unit(chunk).await;
        if result.is_err() {
            self.poisoned = true;
        }
        result
    }

    /// Process one chunk of raw bytes, decoding UTF-8 incrementally. A
    /// multi-byte sequence split across chunks carries over to the next call.
    pub async fn write_bytes(&mut self, chunk: &[u8]) -> Result<String> {
        self.guard()?;
        let decoded = match self.decoder.push(chunk) {
            Ok(decoded) => decoded,
            Err(e) => {
                self.poisoned = true;
                return Err(e);
            }
        };
        if decoded.is_empty() {
            self.stats.chunks += 1;
            return Ok(String::new());
        }
        let result = self.run_unit(&decoded).await;
        if result.is_err() {
            self.poisoned = true;
        }
        result
    }

    /// End the session: emit any dangling tag candidate as literal text,
    /// resolve what remains, and seal the tokenizer. Further writes fail.
    pub async fn finish(&mut self) -> Result<String> {
        self.guard()?;
        let result = self.run_finish().await;
        if result.is_err() {
            self.poisoned = true;
        }
        result
    }

    async fn run_unit(&mut self, chunk: &str) -> Result<String> {
        self.stats.chunks += 1;
        self.tokenizer.feed(chunk)?;
        // Force the unit boundary: flush this chunk's trailing text now so
        // the whole unit resolves before the next chunk is admitted.
        self.tokenizer.close()?;
        let output = self.drain().await?;
        self.tokenizer.resume();
        Ok(output)
    }

    async fn run_finish(&mut self) -> Result<String> {
        if !self.decoder.is_empty() {
            return Err(EngineError::Encoding(format!(
                "input truncated mid-character ({} byte(s) pending)",
                self.decoder.pending()
            )));
        }
        self.tokenizer.finish()?;
        self.drain().await
    }

    /// Resolve the queued segments sequentially, in input order.
    async fn drain(&mut self) -> Result<String> {
        let segments = self.tokenizer.take_segments();
        log::trace!("draining {} segment(s)", segments.len());

        let mut output = String::new();
        for segment in &segments {
            let resolved = match segment {
                Segment::Tag(tag) => {
                    self.stats.tags_resolved += 1;
                    self.resolver
                        .resolve_tag(tag)
                        .await
                        .map_err(EngineError::Resolver)?
                }
                Segment::Text(text) => {
                    self.stats.text_segments += 1;
                    self.resolver
                        .resolve_text(text)
                        .await
                        .map_err(EngineError::Resolver)?
                }
            };
            output.push_str(&resolved);
        }
        Ok(output)
    }

    fn guard(&self) -> Result<()> {
        if self.poisoned {
            Err(EngineError::SessionFailed)
        } else {
            Ok(())
        }
    }
}
