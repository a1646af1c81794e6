use tracetidy_core::config::SanitizeConfig;
use tracetidy_core::error::{Result, TracetidyError};
use tracetidy_core::model::span::Span;

use crate::duration::DurationSanitizer;
use crate::error_tag::ErrorTagSanitizer;
use crate::parent_id::ParentIdSanitizer;
use crate::Sanitizer;

/// Applies multiple sanitizers in serial fashion. The span returned by each
/// sanitizer is threaded into the next; order is fixed at construction and
/// part of the contract, since later sanitizers may inspect tags appended
/// by earlier ones.
pub struct ChainedSanitizer {
    sanitizers: Vec<Box<dyn Sanitizer>>,
}

impl ChainedSanitizer {
    /// An empty list is legal and yields the identity transform.
    pub fn new(sanitizers: Vec<Box<dyn Sanitizer>>) -> Self {
        Self { sanitizers }
    }

    /// The production chain: duration, then parent-ID, then error-tag.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(DurationSanitizer),
            Box::new(ParentIdSanitizer),
            Box::new(ErrorTagSanitizer),
        ])
    }

    /// Builds the chain from configured sanitizer names, in config order.
    pub fn from_config(cfg: &SanitizeConfig) -> Result<Self> {
        let mut sanitizers: Vec<Box<dyn Sanitizer>> = Vec::with_capacity(cfg.sanitizers.len());
        for name in &cfg.sanitizers {
            match name.as_str() {
                "duration" => sanitizers.push(Box::new(DurationSanitizer)),
                "parent-id" => sanitizers.push(Box::new(ParentIdSanitizer)),
                "error-tag" => sanitizers.push(Box::new(ErrorTagSanitizer)),
                other => {
                    return Err(TracetidyError::Config(format!(
                        "unknown sanitizer: {other}"
                    )));
                }
            }
        }
        Ok(Self::new(sanitizers))
    }

    pub fn len(&self) -> usize {
        self.sanitizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sanitizers.is_empty()
    }
}

impl std::fmt::Debug for ChainedSanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedSanitizer")
            .field("len", &self.sanitizers.len())
            .finish()
    }
}

impl Sanitizer for ChainedSanitizer {
    fn sanitize(&self, mut span: Span) -> Span {
        for sanitizer in &self.sanitizers {
            span = sanitizer.sanitize(span);
        }
        span
    }
}
