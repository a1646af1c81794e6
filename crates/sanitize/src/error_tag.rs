use std::mem;

use tracetidy_core::model::span::{Span, TagType};

use crate::{ERROR_MESSAGE_TAG, Sanitizer};

/// Normalizes heterogeneous `"error"` tags to a canonical boolean form.
/// Clients emit the key with string values like `"true"`, `""`, or a
/// free-text message; downstream consumers expect a BOOL tag with a single
/// `0`/`1` byte. Free text is preserved in an appended `error.message` tag.
///
/// Already-BOOL error tags are skipped, which makes the pass idempotent.
/// When a span carries several `"error"` tags, each is normalized
/// independently in order and each free-text one appends its own
/// `error.message`.
#[derive(Debug, Default)]
pub struct ErrorTagSanitizer;

impl Sanitizer for ErrorTagSanitizer {
    fn sanitize(&self, mut span: Span) -> Span {
        // Bound fixed at entry: tags appended below must not be revisited.
        let seen = span.tags.len();
        for idx in 0..seen {
            let tag = &span.tags[idx];
            if tag.value_type == TagType::Bool || !tag.key.eq_ignore_ascii_case("error") {
                continue;
            }

            span.tags[idx].value_type = TagType::Bool;
            let value = mem::take(&mut span.tags[idx].value);
            if value.is_empty() || value.eq_ignore_ascii_case(b"true") {
                span.tags[idx].value = vec![1];
            } else if value.eq_ignore_ascii_case(b"false") {
                span.tags[idx].value = vec![0];
            } else {
                // An unrecognized non-empty value means "an error happened";
                // the detail moves to its own tag.
                span.push_string_tag(ERROR_MESSAGE_TAG, value);
                span.tags[idx].value = vec![1];
            }
        }
        span
    }
}

#[cfg(test)]
mod tests {
    use tracetidy_core::model::span::{Tag, TagType};

    use super::*;

    fn error_span(value: &[u8], value_type: TagType) -> Span {
        testkit::span_with_tag("error", value, value_type)
    }

    #[test]
    fn empty_value_means_true() {
        let sanitizer = ErrorTagSanitizer;
        let span = sanitizer.sanitize(error_span(b"", TagType::String));
        assert_eq!(span.tags.len(), 1);
        assert_eq!(span.tags[0].value_type, TagType::Bool);
        assert_eq!(span.tags[0].value, [1]);
    }

    #[test]
    fn true_and_false_normalize_case_insensitively() {
        let sanitizer = ErrorTagSanitizer;
        for (input, expected) in [
            (&b"true"[..], 1u8),
            (b"TRUE", 1),
            (b"False", 0),
            (b"false", 0),
        ] {
            let span = sanitizer.sanitize(error_span(input, TagType::String));
            assert_eq!(span.tags.len(), 1, "input {input:?}");
            assert_eq!(span.tags[0].value_type, TagType::Bool);
            assert_eq!(span.tags[0].value, [expected]);
        }
    }

    #[test]
    fn free_text_splits_into_message_tag() {
        let sanitizer = ErrorTagSanitizer;
        let span = sanitizer.sanitize(error_span(b"weird", TagType::String));
        assert_eq!(span.tags.len(), 2);
        assert_eq!(span.tags[0].value_type, TagType::Bool);
        assert_eq!(span.tags[0].value, [1]);
        assert_eq!(span.tags[1].key, ERROR_MESSAGE_TAG);
        assert_eq!(span.tags[1].value, b"weird");
        assert_eq!(span.tags[1].value_type, TagType::String);
    }

    #[test]
    fn key_matches_case_insensitively() {
        let sanitizer = ErrorTagSanitizer;
        let span = sanitizer.sanitize(testkit::span_with_tag("ERROR", b"true", TagType::String));
        assert_eq!(span.tags[0].value_type, TagType::Bool);
        assert_eq!(span.tags[0].value, [1]);
    }

    #[test]
    fn bool_error_tag_is_left_alone() {
        let sanitizer = ErrorTagSanitizer;
        let span = sanitizer.sanitize(error_span(&[1], TagType::Bool));
        assert_eq!(span.tags.len(), 1);
        assert_eq!(span.tags[0].value, [1]);
    }

    #[test]
    fn other_keys_are_left_alone() {
        let sanitizer = ErrorTagSanitizer;
        let span = sanitizer.sanitize(testkit::span_with_tag("peer", b"true", TagType::String));
        assert_eq!(span.tags.len(), 1);
        assert_eq!(span.tags[0].value_type, TagType::String);
        assert_eq!(span.tags[0].value, b"true");
    }

    #[test]
    fn rerunning_does_not_duplicate_message_tags() {
        let sanitizer = ErrorTagSanitizer;
        let once = sanitizer.sanitize(error_span(b"weird", TagType::String));
        let twice = sanitizer.sanitize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn multiple_error_tags_are_each_normalized() {
        let sanitizer = ErrorTagSanitizer;
        let mut input = error_span(b"timeout", TagType::String);
        input.tags.push(Tag {
            key: "Error".to_string(),
            value: b"false".to_vec(),
            value_type: TagType::String,
        });

        let span = sanitizer.sanitize(input);
        assert_eq!(span.tags.len(), 3);
        assert_eq!(span.tags[0].value, [1]);
        assert_eq!(span.tags[1].value, [0]);
        assert_eq!(span.tags[2].key, ERROR_MESSAGE_TAG);
        assert_eq!(span.tags[2].value, b"timeout");
    }
}
