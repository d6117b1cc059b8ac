//! Scenario lock tests: canonical inputs produce the locked solution lists
//! and traces with the locked shape.
//!
//! - default set `[3,5,6,7,8]`, target 15 → `[[3,5,7],[7,8]]`
//! - empty set, target 0 → one `Solution` step, solutions `[[]]`
//! - empty set, target 5 → one `Rejected` step, no solutions
//! - duplicates `[5,5]`, target 5 → `[[5],[5]]`

use lock_tests::scenarios::{self, Scenario};
use subsum_search::step::{DecisionV1, RejectionReasonV1, SearchStepV1, StepStatusV1};
use subsum_search::trace::TraceV1;

fn statuses(steps: &[SearchStepV1]) -> Vec<StepStatusV1> {
    steps.iter().map(|s| s.status).collect()
}

#[test]
fn every_scenario_matches_locked_solutions() {
    for scenario in scenarios::ALL {
        let run = scenario.run().unwrap();
        assert_eq!(
            run.solutions().as_slice(),
            scenario.expected_solutions().as_slice(),
            "solution list mismatch for {}",
            scenario.name
        );
        assert!(
            run.trace().len() as u64 <= TraceV1::max_steps_for(scenario.elements.len()),
            "{} trace exceeds 2^(n+1)-1",
            scenario.name
        );
    }
}

#[test]
fn default_set_solutions_come_from_solution_steps_in_order() {
    let run = scenarios::DEFAULT_SET.run().unwrap();
    let from_trace: Vec<Vec<i64>> = run
        .trace()
        .iter()
        .filter(|s| s.status == StepStatusV1::Solution)
        .map(|s| s.subset.clone())
        .collect();
    assert_eq!(from_trace, vec![vec![3, 5, 7], vec![7, 8]]);

    let root = run.trace().get(0).unwrap();
    assert!(root.is_root());
    assert_eq!(root.status, StepStatusV1::Checking);
    assert_eq!(root.sum, 0);
}

#[test]
fn default_set_uses_both_rejection_reasons() {
    let counts = scenarios::DEFAULT_SET.run().unwrap().trace().counts();
    assert_eq!(counts.solution, 2);
    assert!(counts.rejected_sum_exceeds_target > 0);
    assert!(counts.rejected_frontier_exhausted > 0);
    assert!(counts.checking > 0);
}

#[test]
fn empty_set_target_zero_is_single_solution_step() {
    let run = scenarios::EMPTY_ZERO.run().unwrap();
    let steps = run.trace().steps();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].status, StepStatusV1::Solution);
    assert!(steps[0].subset.is_empty());
    assert_eq!(steps[0].sum, 0);
    assert_eq!(steps[0].rejection, None);
    assert_eq!(run.solutions().as_slice(), &[Vec::<i64>::new()]);
}

#[test]
fn empty_set_nonzero_target_is_single_rejected_step() {
    let run = scenarios::EMPTY_NONZERO.run().unwrap();
    let steps = run.trace().steps();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].status, StepStatusV1::Rejected);
    assert_eq!(steps[0].rejection, Some(RejectionReasonV1::FrontierExhausted));
    assert!(run.solutions().is_empty());
}

#[test]
fn duplicates_are_distinct_positions() {
    let run = scenarios::DUPLICATES.run().unwrap();
    assert_eq!(
        statuses(run.trace().steps()),
        vec![
            StepStatusV1::Checking,
            StepStatusV1::Solution,
            StepStatusV1::Checking,
            StepStatusV1::Solution,
            StepStatusV1::Rejected,
        ]
    );
    let solution_paths: Vec<&[DecisionV1]> = run
        .trace()
        .iter()
        .filter(|s| s.status == StepStatusV1::Solution)
        .map(|s| s.decision_path.as_slice())
        .collect();
    assert_eq!(
        solution_paths,
        vec![
            &[DecisionV1::include(0)][..],
            &[DecisionV1::exclude(0), DecisionV1::include(1)][..],
        ]
    );
    assert_eq!(run.solutions().distinct_values(), vec![vec![5]]);
}

#[test]
fn all_too_large_prunes_every_include() {
    let run = scenarios::ALL_TOO_LARGE.run().unwrap();
    assert!(run.solutions().is_empty());
    for step in run.trace() {
        if step.last_decision().is_some_and(|d| d.included) {
            assert_eq!(step.rejection, Some(RejectionReasonV1::SumExceedsTarget));
        }
    }
}

#[test]
fn unsorted_input_is_searched_in_ascending_order() {
    let shuffled = Scenario {
        name: "shuffled",
        elements: &[8, 3, 7, 5, 6],
        target: 15,
        solutions: &[&[3, 5, 7], &[7, 8]],
    };
    let run = shuffled.run().unwrap();
    assert_eq!(run.elements().as_slice(), &[3, 5, 6, 7, 8]);
    assert_eq!(
        run.solutions().as_slice(),
        shuffled.expected_solutions().as_slice()
    );
    assert_eq!(
        run.trace().digest().unwrap(),
        scenarios::DEFAULT_SET.run().unwrap().trace().digest().unwrap()
    );
}
