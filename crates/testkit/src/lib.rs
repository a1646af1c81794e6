use tracetidy_core::ids::{SpanId, TraceId};
use tracetidy_core::model::span::{Span, Tag, TagType};
use tracing_subscriber::EnvFilter;

/// Installs a compact fmt subscriber writing to the test capture. Safe to
/// call from every test; only the first call in a binary wins.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .compact()
        .try_init();
}

/// A well-formed decoded span; tests mutate it into the shape under test.
pub fn span() -> Span {
    Span {
        trace_id: TraceId::new(0x7b),
        span_id: SpanId::new(0x237),
        parent_id: None,
        name: "GET /v1/orders".to_string(),
        timestamp: Some(1_700_000_000_000_000),
        duration: Some(1_800),
        tags: Vec::new(),
    }
}

pub fn span_with_duration(duration: Option<i64>) -> Span {
    let mut s = span();
    s.duration = duration;
    s
}

pub fn span_with_parent(parent: Option<u64>) -> Span {
    let mut s = span();
    s.parent_id = parent.map(SpanId::new);
    s
}

pub fn span_with_tag(key: &str, value: &[u8], value_type: TagType) -> Span {
    let mut s = span();
    s.tags.push(Tag {
        key: key.to_string(),
        value: value.to_vec(),
        value_type,
    });
    s
}

pub fn string_tag(key: &str, value: &[u8]) -> Tag {
    Tag {
        key: key.to_string(),
        value: value.to_vec(),
        value_type: TagType::String,
    }
}
