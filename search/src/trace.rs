//! `TraceV1` and `SolutionListV1`: the two artifacts one search run produces.
//!
//! Both are append-only while the engine owns them and read-only afterwards.
//! Their canonical JSON bytes are the determinism surface: two runs over the
//! same input must produce byte-identical output.

use std::collections::BTreeSet;

use subsum_kernel::proof::canon::{canonical_json_bytes, CanonError};
use subsum_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::step::{RejectionReasonV1, SearchStepV1, StepStatusV1};

/// Ordered record of every step of one run, in depth-first,
/// include-before-exclude order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraceV1 {
    steps: Vec<SearchStepV1>,
}

/// Per-status step counts for a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceCountsV1 {
    pub checking: u64,
    pub solution: u64,
    pub rejected_sum_exceeds_target: u64,
    pub rejected_frontier_exhausted: u64,
}

impl TraceCountsV1 {
    #[must_use]
    pub fn rejected(&self) -> u64 {
        self.rejected_sum_exceeds_target + self.rejected_frontier_exhausted
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.checking + self.solution + self.rejected()
    }
}

impl TraceV1 {
    pub(crate) fn push(&mut self, step: SearchStepV1) {
        self.steps.push(step);
    }

    /// Upper bound on trace length for `n` elements: `2^(n+1) - 1`,
    /// saturating at `u64::MAX`.
    #[must_use]
    pub fn max_steps_for(n: usize) -> u64 {
        match u32::try_from(n.saturating_add(1)) {
            Ok(shift) if shift < 64 => (1u64 << shift) - 1,
            _ => u64::MAX,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SearchStepV1> {
        self.steps.get(index)
    }

    #[must_use]
    pub fn steps(&self) -> &[SearchStepV1] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchStepV1> {
        self.steps.iter()
    }

    #[must_use]
    pub fn counts(&self) -> TraceCountsV1 {
        let mut counts = TraceCountsV1::default();
        for step in &self.steps {
            match (step.status, step.rejection) {
                (StepStatusV1::Checking, _) => counts.checking += 1,
                (StepStatusV1::Solution, _) => counts.solution += 1,
                (StepStatusV1::Rejected, Some(RejectionReasonV1::SumExceedsTarget)) => {
                    counts.rejected_sum_exceeds_target += 1;
                }
                (StepStatusV1::Rejected, _) => counts.rejected_frontier_exhausted += 1,
            }
        }
        counts
    }

    /// Deepest step in the trace (0 for a root-only trace).
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.steps.iter().map(SearchStepV1::depth).max().unwrap_or(0)
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(self.steps.iter().map(SearchStepV1::to_json_value).collect())
    }

    /// Serialize the trace to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical trace bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::SearchTrace,
            &self.to_canonical_json_bytes()?,
        ))
    }
}

impl<'a> IntoIterator for &'a TraceV1 {
    type Item = &'a SearchStepV1;
    type IntoIter = std::slice::Iter<'a, SearchStepV1>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Ordered subsets whose sum equals the target, one per `Solution` step.
///
/// Not deduplicated: equal values selected through different indices are
/// separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolutionListV1 {
    entries: Vec<Vec<i64>>,
}

impl SolutionListV1 {
    pub(crate) fn push(&mut self, subset: Vec<i64>) {
        self.entries.push(subset);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Vec<i64>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<i64>> {
        self.entries.iter()
    }

    /// Value-distinct solutions in first-seen order.
    #[must_use]
    pub fn distinct_values(&self) -> Vec<Vec<i64>> {
        let mut seen: BTreeSet<&[i64]> = BTreeSet::new();
        let mut distinct = Vec::new();
        for subset in &self.entries {
            if seen.insert(subset.as_slice()) {
                distinct.push(subset.clone());
            }
        }
        distinct
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(self.entries.clone())
    }

    /// Content hash of the canonical solution list bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::SolutionList,
            &canonical_json_bytes(&self.to_json_value())?,
        ))
    }
}

impl<'a> IntoIterator for &'a SolutionListV1 {
    type Item = &'a Vec<i64>;
    type IntoIter = std::slice::Iter<'a, Vec<i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
