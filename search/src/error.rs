//! Typed search errors.
//!
//! Pruning is a normal branch of the search and never surfaces here. Every
//! variant is either a pre-flight rejection (no trace produced), a bound hit
//! during generation (the partial trace is discarded), or a cursor contract
//! violation by the caller.

use thiserror::Error;

/// The bounded resource a run ran out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKindV1 {
    /// Element Set size exceeded `TracePolicyV1::max_elements`.
    ElementCount,
    /// Trace length exceeded `TracePolicyV1::max_trace_steps`.
    TraceSteps,
}

impl std::fmt::Display for ResourceKindV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ElementCount => f.write_str("element count"),
            Self::TraceSteps => f.write_str("trace steps"),
        }
    }
}

/// Failure of `generate()` or of a [`crate::cursor::StepCursor`] read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The element set or target violates a search precondition.
    #[error("invalid input: {detail}")]
    InvalidInput { detail: String },
    /// `advance()` was called after the last step had been returned.
    #[error("cursor exhausted: advance() at position {position} of {len}")]
    ExhaustedCursor { position: usize, len: usize },
    /// A configured bound was exceeded; no partial trace is returned.
    #[error("{resource} exceeded: {observed} > limit {limit}")]
    ResourceExceeded {
        resource: ResourceKindV1,
        limit: u64,
        observed: u64,
    },
    /// The policy itself is out of range.
    #[error("unsupported policy: {detail}")]
    UnsupportedPolicy { detail: String },
}
