//! Error type surfaced to callers.
//!
//! Only caller bugs (inputs outside the documented domain) are reported as
//! errors. Internal conditions — a candidate value overflowing 64 bits, or
//! Pollard's Rho exhausting its offset budget — are handled where they occur
//! and never reach the public surface.

use std::fmt;

/// Input outside the valid domain of an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainError {
    reason: String,
}

impl DomainError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "domain error: {}", self.reason)
    }
}

impl std::error::Error for DomainError {}
