//! Search policy: run bounds and the pruning rule.

use crate::error::SearchError;
use crate::trace::TraceV1;

/// Hard ceiling on `max_elements`.
///
/// With at most 64 elements of `i64`, every subset sum fits an `i128`, and
/// `2^(n+1) - 1` still saturates sensibly in a `u64`.
pub const MAX_ELEMENTS_CEILING: usize = 64;

/// Bounds and pruning configuration for one `generate()` call.
///
/// The default admits any full binary recursion tree over 20 elements.
/// Such a run keeps 2,097,151 step snapshots, on the order of 1 GB of heap;
/// callers with less memory to spare should lower `max_trace_steps`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracePolicyV1 {
    /// Largest Element Set accepted before search starts.
    pub max_elements: usize,
    /// Largest trace a run may produce; exceeding it aborts the run.
    ///
    /// Every step owns its subset and decision path, so memory grows with
    /// both this bound and the element count. At the default bound a
    /// 20-element full tree costs roughly 460 bytes per step.
    pub max_trace_steps: u64,
    /// Which rejection rule the engine applies.
    pub pruning: PruningModeV1,
}

impl TracePolicyV1 {
    /// Validate that the bounds are usable.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedPolicy`] if `max_elements` exceeds
    /// [`MAX_ELEMENTS_CEILING`] or `max_trace_steps` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_elements > MAX_ELEMENTS_CEILING {
            return Err(SearchError::UnsupportedPolicy {
                detail: format!(
                    "max_elements {} exceeds ceiling {MAX_ELEMENTS_CEILING}",
                    self.max_elements
                ),
            });
        }
        if self.max_trace_steps == 0 {
            return Err(SearchError::UnsupportedPolicy {
                detail: "max_trace_steps must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// JSON echo of the policy (bound into the run digest).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_elements": self.max_elements,
            "max_trace_steps": self.max_trace_steps,
            "pruning": self.pruning.as_str(),
        })
    }
}

impl Default for TracePolicyV1 {
    /// 20 elements and a step budget of exactly their full tree.
    fn default() -> Self {
        Self {
            max_elements: 20,
            max_trace_steps: TraceV1::max_steps_for(20),
            pruning: PruningModeV1::ExceedsTarget,
        }
    }
}

/// Rejection rule applied to non-solution steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruningModeV1 {
    /// Reject when `sum > target` or the frontier is exhausted.
    ///
    /// Only complete for non-negative elements, so negative elements are
    /// refused up front with `InvalidInput`.
    #[default]
    ExceedsTarget,
    /// Reject only when the frontier is exhausted. Admits negative elements.
    FrontierOnly,
}

impl PruningModeV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExceedsTarget => "exceeds_target",
            Self::FrontierOnly => "frontier_only",
        }
    }

    /// Whether this rule is complete in the presence of negative elements.
    #[must_use]
    pub fn admits_negative(self) -> bool {
        matches!(self, Self::FrontierOnly)
    }
}
