//! Chunk-boundary invariance properties.
//!
//! Feeding an input whole or split at any character offset must produce the
//! same scan, including when the split lands inside a tag name, an attribute,
//! or a quoted value.

use proptest::prelude::*;
use tagweave_core::{ScanError, Segment, TagAllowList, Tokenizer};

fn allow() -> Option<TagAllowList> {
    Some(TagAllowList::from_comma_list("pre, call"))
}

fn scan_once(input: &str) -> Result<Vec<Segment>, ScanError> {
    Tokenizer::scan_all(input, allow())
}

/// Two plain feeds with no unit boundary in between.
fn scan_two_feeds(input: &str, at: usize) -> Result<Vec<Segment>, ScanError> {
    let (head, tail) = input.split_at(at);
    let mut tokenizer = Tokenizer::new(allow());
    tokenizer.feed(head)?;
    tokenizer.feed(tail)?;
    tokenizer.finish()?;
    Ok(tokenizer.take_segments())
}

/// Two feeds separated by a close/resume cycle, the way the sequencer drives
/// the tokenizer between chunks. Text runs may split differently across
/// units, so equivalence is judged on the rendered form.
fn scan_with_unit_boundary(input: &str, at: usize) -> Result<Vec<Segment>, ScanError> {
    let (head, tail) = input.split_at(at);
    let mut tokenizer = Tokenizer::new(allow());
    let mut segments = Vec::new();
    tokenizer.feed(head)?;
    tokenizer.close()?;
    segments.extend(tokenizer.take_segments());
    tokenizer.resume();
    tokenizer.feed(tail)?;
    tokenizer.finish()?;
    segments.extend(tokenizer.take_segments());
    Ok(segments)
}

/// Canonical rendering: literal text verbatim, tags in a bracketed debug
/// form. Two scans are equivalent iff their renderings match.
fn render(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Tag(tag) => {
                out.push_str("⟦");
                out.push_str(&tag.name);
                for (name, value) in tag.attributes.iter() {
                    out.push_str(&format!(" {name}={value:?}"));
                }
                out.push_str("⟧");
            }
        }
    }
    out
}

/// Template-ish inputs biased toward tag syntax and its near misses.
fn template_strategy() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("text ".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just("{@".to_string()),
        Just("/}".to_string()),
        Just("{@pre/}".to_string()),
        Just("{@pre ".to_string()),
        Just("{@call a=b /}".to_string()),
        Just("{@other/}".to_string()),
        Just("{@pre k=\"v w\" /}".to_string()),
        Just("a=\"x".to_string()),
        Just("\\\"".to_string()),
        Just("\"".to_string()),
        Just("@".to_string()),
        Just("pre".to_string()),
        Just(" ".to_string()),
        Just("né。".to_string()),
    ];
    prop::collection::vec(fragment, 0..8).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn split_feeding_matches_single_shot(input in template_strategy()) {
        let single = scan_once(&input);
        for at in 0..=input.len() {
            if !input.is_char_boundary(at) {
                continue;
            }
            let split = scan_two_feeds(&input, at);
            prop_assert_eq!(&split, &single, "split at byte {}", at);
        }
    }

    #[test]
    fn unit_boundaries_do_not_change_the_rendering(input in template_strategy()) {
        let single = scan_once(&input);
        for at in 0..=input.len() {
            if !input.is_char_boundary(at) {
                continue;
            }
            let split = scan_with_unit_boundary(&input, at);
            match (&single, &split) {
                (Ok(expected), Ok(actual)) => {
                    prop_assert_eq!(render(actual), render(expected), "split at byte {}", at);
                }
                (Err(expected), Err(actual)) => prop_assert_eq!(actual, expected),
                (expected, actual) => prop_assert!(
                    false,
                    "split at byte {} diverged: {:?} vs {:?}",
                    at,
                    expected,
                    actual
                ),
            }
        }
    }
}

#[test]
fn split_inside_a_quoted_value_is_invariant() {
    let input = r#"pre {@pre k="a b c" /} post"#;
    let single = scan_once(input).unwrap();
    for at in 0..=input.len() {
        assert_eq!(scan_two_feeds(input, at).unwrap(), single, "split at {at}");
    }
}

#[test]
fn split_inside_an_escape_is_invariant() {
    let input = r#"{@pre k="a\"b\\c" /}"#;
    let single = scan_once(input).unwrap();
    for at in 0..=input.len() {
        assert_eq!(scan_two_feeds(input, at).unwrap(), single, "split at {at}");
    }
}
