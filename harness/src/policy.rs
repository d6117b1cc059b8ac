//! Policy configuration: optional overrides on top of the search defaults.
//!
//! The CLI and tests build a [`PolicyConfig`] with only the knobs they care
//! about; [`build_policy`] fills in the rest from `TracePolicyV1::default()`
//! and validates the result before any run starts.

use subsum_search::error::SearchError;
use subsum_search::policy::{PruningModeV1, TracePolicyV1};

/// Caller-supplied overrides. `None` keeps the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Largest element set accepted.
    pub max_elements: Option<usize>,
    /// Largest trace a run may produce.
    pub max_trace_steps: Option<u64>,
    /// Disable `sum > target` pruning so negative elements are accepted.
    pub frontier_only: bool,
}

/// Resolve a [`PolicyConfig`] into a validated [`TracePolicyV1`].
///
/// # Errors
///
/// Returns [`SearchError::UnsupportedPolicy`] if an override is out of range.
pub fn build_policy(config: &PolicyConfig) -> Result<TracePolicyV1, SearchError> {
    let defaults = TracePolicyV1::default();
    let policy = TracePolicyV1 {
        max_elements: config.max_elements.unwrap_or(defaults.max_elements),
        max_trace_steps: config.max_trace_steps.unwrap_or(defaults.max_trace_steps),
        pruning: if config.frontier_only {
            PruningModeV1::FrontierOnly
        } else {
            PruningModeV1::ExceedsTarget
        },
    };
    policy.validate()?;
    Ok(policy)
}
