use tracetidy_core::model::span::Span;

/// Logging context for one span: a `tracing` span keyed by the hex text of
/// the trace and span identifiers. Sanitizers enter it so any diagnostic
/// they emit carries the identifiers of the span being repaired.
pub fn span_context(span: &Span) -> tracing::Span {
    tracing::debug_span!(
        "sanitize",
        trace_id = %span.trace_id,
        span_id = %span.span_id,
    )
}
