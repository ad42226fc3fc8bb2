//! Order-preserving asynchronous resolution for tag streams
//!
//! This crate bridges the synchronous tokenizer in `tagweave-core` to
//! asynchronous, caller-supplied resolution logic. The [`Sequencer`] treats
//! every inbound chunk as an atomic scan → drain → continue unit: it scans
//! the chunk, then resolves the completed segments strictly in input order,
//! awaiting each resolver call before starting the next. The future returned
//! by [`Sequencer::write`] completing is the write acknowledgment, so
//! awaiting it is the natural backpressure point — upstream production is
//! throttled to the speed of the slowest resolver call and queue growth is
//! bounded to one chunk's segments.

#![warn(missing_docs)]

pub mod decode;
pub mod error;
pub mod resolver;
pub mod sequencer;
pub mod stream;

pub use decode::Utf8Decoder;
pub use error::{EngineError, ResolveError, Result};
pub use resolver::Resolver;
pub use sequencer::{Sequencer, SequencerStats};
pub use stream::{resolve_reader, resolve_to_writer, DEFAULT_CHUNK_SIZE};

// Re-export the scan-level types resolvers work with.
pub use tagweave_core::{Attributes, ScanError, Segment, TagAllowList, TagRecord};
