use tracing::debug;

use tracetidy_core::model::span::Span;

use crate::log::span_context;
use crate::{Sanitizer, ZERO_PARENT_ID_TAG};

/// Folds the wire sentinel `parent_id == 0` into an explicit absence. Some
/// clients cannot distinguish "no parent" from "parent id 0"; downstream
/// storage expects root spans to carry no parent reference at all.
#[derive(Debug, Default)]
pub struct ParentIdSanitizer;

impl Sanitizer for ParentIdSanitizer {
    fn sanitize(&self, mut span: Span) -> Span {
        match span.parent_id {
            Some(parent) if parent.is_zero() => {}
            _ => return span,
        }

        let _ctx = span_context(&span).entered();
        debug!("clearing zero parent span id");
        span.push_string_tag(ZERO_PARENT_ID_TAG, b"0".to_vec());
        span.parent_id = None;
        span
    }
}
