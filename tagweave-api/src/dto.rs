//! Output data transfer objects

use serde::Serialize;

/// Result of processing one input through the resolution pipeline.
#[derive(Debug, Clone)]
pub struct Output {
    /// The fully resolved text.
    pub text: String,
    /// Processing metadata.
    pub metadata: Metadata,
}

/// Processing metadata
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    /// Tags resolved through the resolver.
    pub tags_resolved: usize,
    /// Literal text runs resolved (or passed through).
    pub text_segments: usize,
    /// Chunks fed through the sequencer.
    pub chunks: usize,
    /// Bytes consumed from the input.
    pub bytes_in: usize,
    /// Bytes of resolved output.
    pub bytes_out: usize,
    /// Wall-clock processing time in milliseconds.
    pub processing_time_ms: u64,
}
