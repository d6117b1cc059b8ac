//! Search entry point: exhaustive include-before-exclude backtracking.
//!
//! The recursion is an explicit frame stack. Each frame owns its subset and
//! decision path, and the frame is moved into the step it produces, so every
//! recorded step is an independent snapshot. Children are pushed exclude
//! first, include second, so the include branch is popped (and fully
//! explored) before the exclude branch, matching recursive depth-first order.

use std::sync::Arc;

use subsum_kernel::carrier::element_set::ElementSetV1;
use subsum_kernel::proof::canon::{canonical_json_bytes, CanonError};
use subsum_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::cursor::StepCursor;
use crate::error::{ResourceKindV1, SearchError};
use crate::policy::{PruningModeV1, TracePolicyV1};
use crate::step::{DecisionV1, RejectionReasonV1, SearchStepV1, StepStatusV1};
use crate::trace::{SolutionListV1, TraceV1};

/// Result of one `generate()` call.
///
/// A run is produced atomically: either the whole trace and solution list,
/// or an error and nothing. It is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRunV1 {
    elements: ElementSetV1,
    target: i64,
    policy: TracePolicyV1,
    trace: TraceV1,
    solutions: SolutionListV1,
}

impl SearchRunV1 {
    #[must_use]
    pub fn elements(&self) -> &ElementSetV1 {
        &self.elements
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn policy(&self) -> &TracePolicyV1 {
        &self.policy
    }

    #[must_use]
    pub fn trace(&self) -> &TraceV1 {
        &self.trace
    }

    #[must_use]
    pub fn solutions(&self) -> &SolutionListV1 {
        &self.solutions
    }

    /// Consume the run, returning `(trace, solutions)`.
    #[must_use]
    pub fn into_parts(self) -> (TraceV1, SolutionListV1) {
        (self.trace, self.solutions)
    }

    /// Wrap the run in a fresh cursor positioned at the first step.
    #[must_use]
    pub fn into_cursor(self) -> StepCursor {
        StepCursor::new(Arc::new(self))
    }

    /// Full JSON rendering: inputs, policy, trace and solutions.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "elements": self.elements.to_json_value(),
            "policy": self.policy.to_json_value(),
            "solutions": self.solutions.to_json_value(),
            "target": self.target,
            "trace": self.trace.to_json_value(),
        })
    }

    /// Digest binding the inputs, the policy, and both outputs.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let elements_digest = canonical_hash(
            HashDomain::ElementSet,
            &canonical_json_bytes(&self.elements.to_json_value())?,
        );
        let policy_digest = canonical_hash(
            HashDomain::TracePolicy,
            &canonical_json_bytes(&self.policy.to_json_value())?,
        );
        let binding = serde_json::json!({
            "elements_digest": elements_digest.as_str(),
            "policy_digest": policy_digest.as_str(),
            "solutions_digest": self.solutions.digest()?.as_str(),
            "target": self.target,
            "trace_digest": self.trace.digest()?.as_str(),
        });
        Ok(canonical_hash(
            HashDomain::SearchRun,
            &canonical_json_bytes(&binding)?,
        ))
    }
}

/// A pending node of the recursion tree.
struct Frame {
    frontier_index: usize,
    subset: Vec<i64>,
    sum: i128,
    decision_path: Vec<DecisionV1>,
}

impl Frame {
    fn root() -> Self {
        Self {
            frontier_index: 0,
            subset: Vec::new(),
            sum: 0,
            decision_path: Vec::new(),
        }
    }

    fn include(&self, value: i64) -> Self {
        let mut subset = Vec::with_capacity(self.subset.len() + 1);
        subset.extend_from_slice(&self.subset);
        subset.push(value);
        Self {
            frontier_index: self.frontier_index + 1,
            subset,
            sum: self.sum + i128::from(value),
            decision_path: self.extended_path(DecisionV1::include(self.frontier_index)),
        }
    }

    fn exclude(&self) -> Self {
        Self {
            frontier_index: self.frontier_index + 1,
            subset: self.subset.clone(),
            sum: self.sum,
            decision_path: self.extended_path(DecisionV1::exclude(self.frontier_index)),
        }
    }

    fn extended_path(&self, decision: DecisionV1) -> Vec<DecisionV1> {
        let mut path = Vec::with_capacity(self.decision_path.len() + 1);
        path.extend_from_slice(&self.decision_path);
        path.push(decision);
        path
    }

    fn into_step(self, status: StepStatusV1, rejection: Option<RejectionReasonV1>) -> SearchStepV1 {
        SearchStepV1 {
            frontier_index: self.frontier_index,
            subset: self.subset,
            sum: self.sum,
            decision_path: self.decision_path,
            status,
            rejection,
        }
    }
}

/// Run one exhaustive search over `elements` for subsets summing to `target`.
///
/// Order of checks at every node:
/// 1. `sum == target` → `Solution` (recorded, subset copied to the solution
///    list, no children). Evaluated before any pruning, so an empty set with
///    target 0 yields a single solution step.
/// 2. `sum > target` (under [`PruningModeV1::ExceedsTarget`]) or frontier
///    exhausted → `Rejected`, no children.
/// 3. Otherwise `Checking`, followed by the whole include subtree and then
///    the whole exclude subtree.
///
/// The trace has at most `2^(n+1) - 1` steps.
///
/// # Errors
///
/// - [`SearchError::UnsupportedPolicy`] if `policy` fails validation.
/// - [`SearchError::ResourceExceeded`] if `elements` is larger than
///   `policy.max_elements`, or the trace would grow past
///   `policy.max_trace_steps`.
/// - [`SearchError::InvalidInput`] if `elements` contains a negative value
///   under [`PruningModeV1::ExceedsTarget`].
pub fn generate(
    elements: &ElementSetV1,
    target: i64,
    policy: &TracePolicyV1,
) -> Result<SearchRunV1, SearchError> {
    preflight(elements, policy)?;

    let n = elements.len();
    let values = elements.as_slice();
    let wide_target = i128::from(target);
    let prune_on_sum = policy.pruning == PruningModeV1::ExceedsTarget;

    let mut trace = TraceV1::default();
    let mut solutions = SolutionListV1::default();
    let mut stack = vec![Frame::root()];

    while let Some(frame) = stack.pop() {
        if trace.len() as u64 >= policy.max_trace_steps {
            return Err(SearchError::ResourceExceeded {
                resource: ResourceKindV1::TraceSteps,
                limit: policy.max_trace_steps,
                observed: policy.max_trace_steps.saturating_add(1),
            });
        }

        if frame.sum == wide_target {
            solutions.push(frame.subset.clone());
            trace.push(frame.into_step(StepStatusV1::Solution, None));
            continue;
        }

        let rejection = if prune_on_sum && frame.sum > wide_target {
            Some(RejectionReasonV1::SumExceedsTarget)
        } else if frame.frontier_index >= n {
            Some(RejectionReasonV1::FrontierExhausted)
        } else {
            None
        };
        if rejection.is_some() {
            trace.push(frame.into_step(StepStatusV1::Rejected, rejection));
            continue;
        }

        let value = values[frame.frontier_index];
        let include = frame.include(value);
        let exclude = frame.exclude();
        trace.push(frame.into_step(StepStatusV1::Checking, None));
        stack.push(exclude);
        stack.push(include);
    }

    Ok(SearchRunV1 {
        elements: elements.clone(),
        target,
        policy: policy.clone(),
        trace,
        solutions,
    })
}

fn preflight(elements: &ElementSetV1, policy: &TracePolicyV1) -> Result<(), SearchError> {
    policy.validate()?;

    if elements.len() > policy.max_elements {
        return Err(SearchError::ResourceExceeded {
            resource: ResourceKindV1::ElementCount,
            limit: policy.max_elements as u64,
            observed: elements.len() as u64,
        });
    }

    if !policy.pruning.admits_negative() {
        if let Some((index, value)) = elements.first_negative() {
            return Err(SearchError::InvalidInput {
                detail: format!(
                    "negative element {value} at index {index} is not supported by {} pruning",
                    policy.pruning.as_str()
                ),
            });
        }
    }

    Ok(())
}
