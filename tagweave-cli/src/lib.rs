//! Tagweave CLI library
//!
//! This library provides the command-line interface for resolving
//! `{@tag .../}` constructs in template files against a content store.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
