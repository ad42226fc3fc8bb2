//! Caller-supplied resolution capability

use crate::error::ResolveError;
use tagweave_core::{TagAllowList, TagRecord};

/// Asynchronous per-segment resolution logic, owned and implemented by the
/// caller.
///
/// The sequencer invokes [`resolve_tag`](Resolver::resolve_tag) for every
/// recognized tag and [`resolve_text`](Resolver::resolve_text) for every
/// literal text run, strictly in input order, awaiting each call before
/// starting the next. Implementations therefore never observe out-of-order
/// or interleaved segments, however long an individual call takes.
///
/// Returning an error from either method aborts the session; the error is
/// surfaced once as [`EngineError::Resolver`](crate::EngineError::Resolver)
/// and the session accepts no further input.
#[allow(async_fn_in_trait)]
pub trait Resolver {
    /// Tag names this resolver handles. `None` (the default) matches every
    /// well-formed self-closing tag; names outside the returned list pass
    /// through as literal text without ever reaching
    /// [`resolve_tag`](Resolver::resolve_tag).
    fn tags(&self) -> Option<TagAllowList> {
        None
    }

    /// Produce the replacement text for a recognized tag.
    async fn resolve_tag(&self, tag: &TagRecord) -> Result<String, ResolveError>;

    /// Produce the output for a literal text run. The default is identity.
    async fn resolve_text(&self, text: &str) -> Result<String, ResolveError> {
        Ok(text.to_owned())
    }
}

impl<R: Resolver> Resolver for &R {
    fn tags(&self) -> Option<TagAllowList> {
        (**self).tags()
    }

    async fn resolve_tag(&self, tag: &TagRecord) -> Result<String, ResolveError> {
        (**self).resolve_tag(tag).await
    }

    async fn resolve_text(&self, text: &str) -> Result<String, ResolveError> {
        (**self).resolve_text(text).await
    }
}
