use tracing::debug;

use tracetidy_core::model::span::Span;

use crate::log::span_context;
use crate::{NEGATIVE_DURATION_TAG, Sanitizer};

/// Fallback duration in microseconds for spans that arrive without one or
/// with a negative one.
pub const DEFAULT_DURATION: i64 = 1;

/// Repairs missing or negative span durations. A missing duration is common
/// and replaced silently; a negative one is replaced and the original value
/// kept in a reserved tag for debugging.
#[derive(Debug, Default)]
pub struct DurationSanitizer;

impl Sanitizer for DurationSanitizer {
    fn sanitize(&self, mut span: Span) -> Span {
        let Some(duration) = span.duration else {
            span.duration = Some(DEFAULT_DURATION);
            return span;
        };
        if duration >= 0 {
            return span;
        }

        let _ctx = span_context(&span).entered();
        debug!(duration, "replacing negative span duration");
        span.duration = Some(DEFAULT_DURATION);
        span.push_string_tag(NEGATIVE_DURATION_TAG, duration.to_string().into_bytes());
        span
    }
}
