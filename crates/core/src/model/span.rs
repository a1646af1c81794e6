use serde::{Deserialize, Serialize};

use crate::ids::{SpanId, TraceId};

/// A decoded span from the legacy trace-reporting wire format. Produced by
/// the upstream decoder once per arriving message, passed through the
/// sanitizer chain, then handed to the storage writer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Span {
    pub trace_id: TraceId,
    pub span_id: SpanId,
    /// `None` denotes a root span. Some clients emit `0` instead; the
    /// parent-ID sanitizer folds that sentinel into `None`.
    pub parent_id: Option<SpanId>,
    pub name: String,
    /// Epoch microseconds. Not touched by sanitization.
    pub timestamp: Option<i64>,
    /// Microseconds, conventionally non-negative. The sanitized span always
    /// carries `Some(d)` with `d >= 0`.
    pub duration: Option<i64>,
    pub tags: Vec<Tag>,
}

/// A typed key/value annotation. Carries both client data and the reserved
/// keys sanitizers append to record repairs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    pub key: String,
    pub value: Vec<u8>,
    pub value_type: TagType,
}

/// Declared value type of a tag, mirroring the wire enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TagType {
    #[serde(rename = "BOOL")]
    Bool,
    #[serde(rename = "BYTES")]
    Bytes,
    #[serde(rename = "I16")]
    I16,
    #[serde(rename = "I32")]
    I32,
    #[serde(rename = "I64")]
    I64,
    #[serde(rename = "DOUBLE")]
    Double,
    #[serde(rename = "STRING")]
    String,
}

impl Span {
    pub fn push_string_tag(&mut self, key: &str, value: Vec<u8>) {
        self.tags.push(Tag {
            key: key.to_string(),
            value,
            value_type: TagType::String,
        });
    }

    /// First tag whose key matches exactly.
    pub fn tag(&self, key: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.key == key)
    }
}
