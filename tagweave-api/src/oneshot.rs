//! Single-shot, regex-driven substitution
//!
//! A convenience entry point for callers that hold the whole template in
//! memory and want synchronous substitution without a resolver or a session.
//! Candidate spans are located with a regex and re-parsed by the real
//! tokenizer, so attribute and escape semantics match the streaming path.
//!
//! Because the candidate pattern stops at the first `}`, a quoted attribute
//! value containing `}` defeats it; such templates need the streaming path.

use crate::content::ContentStore;
use regex::Regex;
use std::sync::OnceLock;
use tagweave_core::{Segment, TagAllowList, TagRecord, Tokenizer};

/// Candidate tag spans: `{@` … `/}` with no `}` in between.
fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{@[^}]*/\}").expect("tag pattern compiles"))
}

/// Substitute recognized tags using `lookup`; everything else — malformed
/// candidates, names outside `tags`, lookups returning `None` — is left
/// verbatim.
pub fn substitute_with<F>(template: &str, tags: Option<&TagAllowList>, lookup: F) -> String
where
    F: Fn(&TagRecord) -> Option<String>,
{
    let mut output = String::with_capacity(template.len());
    let mut last_end = 0;

    for candidate in tag_pattern().find_iter(template) {
        let replacement = match Tokenizer::scan_all(candidate.as_str(), tags.cloned()) {
            Ok(segments) => match segments.as_slice() {
                [Segment::Tag(tag)] => lookup(tag),
                _ => None,
            },
            Err(_) => None,
        };

        if let Some(replacement) = replacement {
            output.push_str(&template[last_end..candidate.start()]);
            output.push_str(&replacement);
            last_end = candidate.end();
        }
    }
    output.push_str(&template[last_end..]);
    output
}

/// Substitute `{@pre content=key /}` tags from a content store, leaving
/// everything else untouched.
pub fn substitute(template: &str, store: &ContentStore) -> String {
    let tags = TagAllowList::from_names(["pre"]);
    substitute_with(template, Some(&tags), |tag| {
        tag.attributes
            .get("content")
            .and_then(|key| store.render(key))
    })
}
