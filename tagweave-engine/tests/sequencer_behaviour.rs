//! Behavioural tests for the sequencer's ordering and backpressure
//! guarantees, and for the stream plumbing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tagweave_engine::{
    resolve_reader, resolve_to_writer, EngineError, ResolveError, Resolver, Sequencer,
    TagAllowList, TagRecord,
};

/// Resolves tag k after a delay that shrinks with every call, so the first
/// segment is the slowest. Order must still follow the input.
struct SlowFirstResolver {
    calls: AtomicUsize,
}

impl SlowFirstResolver {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

impl Resolver for SlowFirstResolver {
    async fn resolve_tag(&self, tag: &TagRecord) -> Result<String, ResolveError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = Duration::from_millis(100u64.saturating_sub(call as u64 * 30));
        tokio::time::sleep(delay).await;
        Ok(format!("<{}>", tag.name))
    }
}

#[tokio::test(start_paused = true)]
async fn slow_early_segments_never_reorder_output() {
    let mut sequencer = Sequencer::new(SlowFirstResolver::new());
    let mut out = sequencer
        .write("{@a/} one {@b/} two {@c/} three")
        .await
        .unwrap();
    out.push_str(&sequencer.finish().await.unwrap());
    assert_eq!(out, "<a> one <b> two <c> three");
}

/// Records the order in which segments reach the resolver.
struct TraceResolver {
    seen: Mutex<Vec<String>>,
}

impl TraceResolver {
    fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl Resolver for TraceResolver {
    async fn resolve_tag(&self, tag: &TagRecord) -> Result<String, ResolveError> {
        self.seen.lock().unwrap().push(format!("tag:{}", tag.name));
        tokio::task::yield_now().await;
        Ok(String::new())
    }

    async fn resolve_text(&self, text: &str) -> Result<String, ResolveError> {
        self.seen.lock().unwrap().push(format!("text:{text}"));
        Ok(String::new())
    }
}

#[tokio::test]
async fn segments_reach_the_resolver_in_input_order() {
    let resolver = TraceResolver::new();
    let mut sequencer = Sequencer::new(&resolver);
    sequencer.write("x{@a/}y").await.unwrap();
    sequencer.write("{@b/}z").await.unwrap();
    sequencer.finish().await.unwrap();

    let seen = resolver.seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec!["text:x", "tag:a", "text:y", "tag:b", "text:z"]
    );
}

/// Upper-cases recognized tags; used for the stream plumbing tests, matching
/// the allow-list shape of a locale-content precompile pass.
struct UpcaseResolver;

impl Resolver for UpcaseResolver {
    fn tags(&self) -> Option<TagAllowList> {
        Some(TagAllowList::from_names(["pre", "call"]))
    }

    async fn resolve_tag(&self, tag: &TagRecord) -> Result<String, ResolveError> {
        Ok(tag.name.to_uppercase())
    }
}

#[tokio::test]
async fn reader_is_resolved_to_a_string() {
    let template =
        "<p>{@pre type=\"content\" key=\"missing.value\" /}</p><p>{@helper attr=\"value\"/} {randomData}</p>";
    let out = resolve_reader(template.as_bytes(), UpcaseResolver, 7)
        .await
        .unwrap();
    assert_eq!(out, "<p>PRE</p><p>{@helper attr=\"value\"/} {randomData}</p>");
}

#[tokio::test]
async fn tiny_chunks_do_not_change_the_result() {
    let template = "a {@pre/} b {@call x=\"y\"/} c";
    for chunk_size in [1, 2, 3, 5, 64] {
        let out = resolve_reader(template.as_bytes(), UpcaseResolver, chunk_size)
            .await
            .unwrap();
        assert_eq!(out, "a PRE b CALL c", "chunk size {chunk_size}");
    }
}

#[tokio::test]
async fn writer_receives_resolved_output_and_byte_count() {
    let template = "x {@pre/} y";
    let mut out = Vec::new();
    let written = resolve_to_writer(template.as_bytes(), &mut out, UpcaseResolver, 4)
        .await
        .unwrap();
    assert_eq!(out, b"x PRE y");
    assert_eq!(written, out.len() as u64);
}

#[tokio::test]
async fn multibyte_input_survives_any_chunking() {
    let template = "héllo {@pre/} 世界";
    for chunk_size in 1..=8 {
        let out = resolve_reader(template.as_bytes(), UpcaseResolver, chunk_size)
            .await
            .unwrap();
        assert_eq!(out, "héllo PRE 世界", "chunk size {chunk_size}");
    }
}

/// Always fails; exercises error propagation through the stream helpers.
struct FailingResolver;

impl Resolver for FailingResolver {
    async fn resolve_tag(&self, _tag: &TagRecord) -> Result<String, ResolveError> {
        Err("lookup failed".into())
    }
}

#[tokio::test]
async fn resolver_failure_aborts_the_stream() {
    let err = resolve_reader("a {@pre/} b".as_bytes(), FailingResolver, 64)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Resolver(_)));
}

#[tokio::test]
async fn malformed_input_aborts_the_stream() {
    let err = resolve_reader(r#"{@pre a=b"c /}"#.as_bytes(), FailingResolver, 64)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Scan(_)));
}
