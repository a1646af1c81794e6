pub mod chain;
pub mod duration;
pub mod error_tag;
pub mod log;
pub mod parent_id;

pub use chain::ChainedSanitizer;
pub use duration::DurationSanitizer;
pub use error_tag::ErrorTagSanitizer;
pub use parent_id::ParentIdSanitizer;

use tracetidy_core::model::span::Span;

/// Reserved tag recording a replaced negative duration, value is the
/// original decimal text.
pub const NEGATIVE_DURATION_TAG: &str = "errNegativeDuration";
/// Reserved tag recording a cleared zero parent span ID.
pub const ZERO_PARENT_ID_TAG: &str = "errZeroParentID";
/// String tag carrying the free-text detail split off a normalized error
/// tag.
pub const ERROR_MESSAGE_TAG: &str = "error.message";

/// A single-span repair rule. Any business logic that normalizes the
/// contents of a span before storage implements this.
///
/// A sanitizer is total: it never fails, falling back to default values and
/// appending a reserved tag rather than rejecting the span. It is
/// deterministic, performs no I/O, and holds no per-call state, so one
/// instance may sanitize spans from multiple threads concurrently. Side
/// effects are limited to mutating the span's fields, appending tags, and
/// emitting diagnostics through [`log::span_context`].
///
/// The span is passed by value and returned; callers must treat the return
/// value as the sole valid handle afterwards.
pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, span: Span) -> Span;
}
