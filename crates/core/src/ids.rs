use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TracetidyError};

/// Opaque 64-bit trace identifier as carried by the legacy wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceId(u64);

/// Opaque 64-bit span identifier. Parent references reuse this type; the
/// wire sentinel `0` is representable here and normalized away by the
/// parent-ID sanitizer, not by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpanId(u64);

impl TraceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self(parse_hex_id(input, "trace id")?))
    }
}

impl SpanId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self(parse_hex_id(input, "span id")?))
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl fmt::Display for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

fn parse_hex_id(input: &str, what: &str) -> Result<u64> {
    if input.is_empty() || input.len() > 16 || !input.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TracetidyError::Parse(format!("invalid {what}: {input:?}")));
    }
    u64::from_str_radix(input, 16)
        .map_err(|e| TracetidyError::Parse(format!("invalid {what} {input:?}: {e}")))
}
