//! Streaming recognition of self-closing `{@name attr=value .../}` tag
//! constructs embedded in arbitrary template text.
//!
//! The scanner is a single-pass character state machine with one character of
//! lookahead. It consumes text in arbitrarily sized chunks and emits an
//! ordered sequence of [`Segment`]s: recognized [`Tag`](Segment::Tag)s and the
//! literal [`Text`](Segment::Text) runs between them. Anything that merely
//! resembles a tag — unterminated, symmetric (`{@x}` without `/}`), or not on
//! the configured allow-list — is replayed character-for-character as literal
//! text.
//!
//! This crate is pure and synchronous; asynchronous resolution of the emitted
//! segments lives in `tagweave-engine`.
//!
//! # Example
//!
//! ```rust
//! use tagweave_core::{Segment, Tokenizer};
//!
//! let segments = Tokenizer::scan_all("Hello {@pre content=greeting /}!", None).unwrap();
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[0], Segment::Text("Hello ".into()));
//! assert!(matches!(&segments[1], Segment::Tag(tag) if tag.name == "pre"));
//! assert_eq!(segments[2], Segment::Text("!".into()));
//! ```

#![warn(missing_docs)]

pub mod allow_list;
pub mod error;
pub mod segment;
pub mod tokenizer;

pub use allow_list::TagAllowList;
pub use error::{Result, ScanError};
pub use segment::{Attributes, Segment, TagRecord};
pub use tokenizer::Tokenizer;
