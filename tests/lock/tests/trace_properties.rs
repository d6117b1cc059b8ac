//! Property tests over randomly generated element sets.
//!
//! The reference model enumerates every node of the full binary decision
//! tree by prefix mask, keeps the ones whose ancestors are all `Checking`,
//! and orders them include-before-exclude. The engine's trace must match it
//! node for node.

use proptest::prelude::*;
use subsum_kernel::carrier::element_set::ElementSetV1;
use subsum_search::engine::{generate, SearchRunV1};
use subsum_search::policy::{PruningModeV1, TracePolicyV1};
use subsum_search::step::{RejectionReasonV1, StepStatusV1};
use subsum_search::trace::TraceV1;

type ModelNode = (Vec<bool>, StepStatusV1);

fn model_trace(values: &[i64], target: i64, prune_on_sum: bool) -> Vec<ModelNode> {
    let n = values.len();
    let target = i128::from(target);
    let is_pruned = |sum: i128| prune_on_sum && sum > target;

    let mut nodes = Vec::new();
    for depth in 0..=n {
        for mask in 0u32..(1u32 << depth) {
            let mut sum = 0i128;
            let mut reachable = true;
            for (j, &value) in values.iter().enumerate().take(depth) {
                if sum == target || is_pruned(sum) {
                    reachable = false;
                    break;
                }
                if mask & (1 << j) != 0 {
                    sum += i128::from(value);
                }
            }
            if !reachable {
                continue;
            }
            let status = if sum == target {
                StepStatusV1::Solution
            } else if is_pruned(sum) || depth == n {
                StepStatusV1::Rejected
            } else {
                StepStatusV1::Checking
            };
            let path: Vec<bool> = (0..depth).map(|j| mask & (1 << j) != 0).collect();
            nodes.push((path, status));
        }
    }
    // Pre-order, include first: `false` (include) sorts before `true`.
    nodes.sort_by_key(|(path, _)| path.iter().map(|included| !included).collect::<Vec<_>>());
    nodes
}

fn engine_trace(run: &SearchRunV1) -> Vec<ModelNode> {
    run.trace()
        .iter()
        .map(|s| (s.decision_path.iter().map(|d| d.included).collect(), s.status))
        .collect()
}

fn run_with(values: &[i64], target: i64, pruning: PruningModeV1) -> SearchRunV1 {
    let policy = TracePolicyV1 {
        pruning,
        ..TracePolicyV1::default()
    };
    generate(&ElementSetV1::from_unsorted(values.to_vec()), target, &policy).unwrap()
}

fn check_step_invariants(run: &SearchRunV1) -> Result<(), TestCaseError> {
    let values = run.elements().as_slice();
    let target = i128::from(run.target());

    for step in run.trace() {
        let subset_sum: i128 = step.subset.iter().map(|&v| i128::from(v)).sum();
        prop_assert_eq!(step.sum, subset_sum);
        prop_assert_eq!(step.decision_path.len(), step.frontier_index);

        let mut included = Vec::new();
        for (i, d) in step.decision_path.iter().enumerate() {
            prop_assert_eq!(d.element_index, i);
            if d.included {
                included.push(values[i]);
            }
        }
        prop_assert_eq!(&step.subset, &included);

        prop_assert_eq!(step.rejection.is_some(), step.status == StepStatusV1::Rejected);
        if step.status == StepStatusV1::Solution {
            prop_assert_eq!(step.sum, target);
        }
        if step.rejection == Some(RejectionReasonV1::FrontierExhausted) {
            prop_assert_eq!(step.frontier_index, values.len());
        }
    }
    Ok(())
}

fn check_tree_shape(run: &SearchRunV1) -> Result<(), TestCaseError> {
    let steps = run.trace().steps();
    prop_assert!(!steps.is_empty());
    prop_assert!(steps[0].is_root());

    for pair in steps.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if current.is_terminal() {
            // Next step is a sibling or an ancestor's sibling, never a child.
            prop_assert!(next.depth() <= current.depth());
        } else {
            prop_assert_eq!(next.depth(), current.depth() + 1);
            prop_assert_eq!(&next.decision_path[..current.depth()], &current.decision_path[..]);
            prop_assert!(next.last_decision().is_some_and(|d| d.included));
        }
    }
    prop_assert!(steps[steps.len() - 1].is_terminal());
    Ok(())
}

proptest! {
    #[test]
    fn trace_matches_reference_model(
        values in prop::collection::vec(0i64..=20, 0..=10),
        target in 0i64..=60,
    ) {
        let run = run_with(&values, target, PruningModeV1::ExceedsTarget);
        let sorted = run.elements().as_slice().to_vec();
        prop_assert_eq!(engine_trace(&run), model_trace(&sorted, target, true));
    }

    #[test]
    fn frontier_only_matches_reference_model(
        values in prop::collection::vec(-10i64..=10, 0..=8),
        target in -20i64..=20,
    ) {
        let run = run_with(&values, target, PruningModeV1::FrontierOnly);
        let sorted = run.elements().as_slice().to_vec();
        prop_assert_eq!(engine_trace(&run), model_trace(&sorted, target, false));
        prop_assert_eq!(run.trace().counts().rejected_sum_exceeds_target, 0);
    }

    #[test]
    fn steps_are_consistent_snapshots(
        values in prop::collection::vec(0i64..=30, 0..=10),
        target in 0i64..=80,
    ) {
        let run = run_with(&values, target, PruningModeV1::ExceedsTarget);
        check_step_invariants(&run)?;
        check_tree_shape(&run)?;
    }

    #[test]
    fn trace_size_is_bounded(
        values in prop::collection::vec(0i64..=5, 0..=12),
        target in 0i64..=100,
    ) {
        let run = run_with(&values, target, PruningModeV1::ExceedsTarget);
        let bound = TraceV1::max_steps_for(values.len());
        prop_assert!(run.trace().len() as u64 <= bound);
        prop_assert_eq!(run.trace().counts().total(), run.trace().len() as u64);
    }

    #[test]
    fn solutions_mirror_solution_steps(
        values in prop::collection::vec(0i64..=15, 0..=10),
        target in 0i64..=40,
    ) {
        let run = run_with(&values, target, PruningModeV1::ExceedsTarget);
        let from_steps: Vec<Vec<i64>> = run
            .trace()
            .iter()
            .filter(|s| s.status == StepStatusV1::Solution)
            .map(|s| s.subset.clone())
            .collect();
        prop_assert_eq!(run.solutions().as_slice(), from_steps.as_slice());
        for subset in run.solutions() {
            prop_assert_eq!(subset.iter().sum::<i64>(), target);
        }
    }

    /// For a positive target every index subset hitting the target is found
    /// exactly once.
    #[test]
    fn positive_target_finds_every_index_subset(
        values in prop::collection::vec(0i64..=12, 0..=10),
        target in 1i64..=40,
    ) {
        let run = run_with(&values, target, PruningModeV1::ExceedsTarget);
        let sorted = run.elements().as_slice();
        let n = sorted.len();

        let mut expected: Vec<(Vec<bool>, Vec<i64>)> = Vec::new();
        for mask in 0u32..(1u32 << n) {
            let subset: Vec<i64> = (0..n).filter(|&j| mask & (1 << j) != 0).map(|j| sorted[j]).collect();
            if subset.iter().sum::<i64>() == target {
                // Decisions stop right after the largest included index.
                let last = (0..n).rev().find(|&j| mask & (1 << j) != 0).map_or(0, |j| j + 1);
                let key = (0..last).map(|j| mask & (1 << j) == 0).collect();
                expected.push((key, subset));
            }
        }
        expected.sort();
        let expected: Vec<Vec<i64>> = expected.into_iter().map(|(_, s)| s).collect();
        prop_assert_eq!(run.solutions().as_slice(), expected.as_slice());
    }

    #[test]
    fn generate_is_deterministic(
        values in prop::collection::vec(0i64..=20, 0..=9),
        target in 0i64..=50,
    ) {
        let a = run_with(&values, target, PruningModeV1::ExceedsTarget);
        let b = run_with(&values, target, PruningModeV1::ExceedsTarget);
        prop_assert_eq!(a.digest().unwrap(), b.digest().unwrap());
        prop_assert_eq!(a, b);
    }
}
