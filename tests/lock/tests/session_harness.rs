//! Harness session lock tests: field text in, rendered views out.
//!
//! - RUN-ALL: the default session reports the default solutions.
//! - STEPWISE: stepping shows every step once, then reports completion.
//! - RESTART: any run-all or input change discards a stepwise replay.
//! - RENDER: log and tree lines for the default trace are stable.

use lock_tests::scenarios;
use subsum_harness::input::InputError;
use subsum_harness::policy::{build_policy, PolicyConfig};
use subsum_harness::render::{log_entry, tree_node};
use subsum_harness::runner::{RunError, Session, StepOutcome};
use subsum_search::error::SearchError;
use subsum_search::policy::TracePolicyV1;

fn step_all(session: &mut Session) -> (Vec<String>, usize) {
    let mut trees = Vec::new();
    loop {
        match session.step().unwrap() {
            StepOutcome::Shown(view) => trees.push(view.tree),
            StepOutcome::Finished { solutions_found } => return (trees, solutions_found),
        }
    }
}

// --- RUN-ALL ---

#[test]
fn default_session_run_all() {
    let mut session = Session::new(TracePolicyV1::default());
    let report = session.run_all().unwrap();
    assert_eq!(
        report.solutions,
        scenarios::DEFAULT_SET.expected_solutions()
    );
    assert_eq!(
        report.run_digest,
        scenarios::DEFAULT_SET.run().unwrap().digest().unwrap()
    );
}

#[test]
fn empty_field_with_zero_target() {
    let mut session = Session::with_input("", "0", TracePolicyV1::default());
    let report = session.run_all().unwrap();
    assert_eq!(report.solutions, vec![Vec::<i64>::new()]);
    assert_eq!(report.solution_cards, vec!["Solution 1: [] (Sum: 0)"]);
    assert_eq!(report.trace_len, 1);
}

// --- STEPWISE ---

#[test]
fn stepping_shows_every_step_once() {
    let expected = scenarios::DEFAULT_SET.run().unwrap();
    let mut session = Session::new(TracePolicyV1::default());
    let (trees, found) = step_all(&mut session);
    assert_eq!(trees.len(), expected.trace().len());
    assert_eq!(found, 2);
    for (tree, step) in trees.iter().zip(expected.trace()) {
        assert_eq!(tree, &tree_node(step, expected.elements()));
    }
}

// --- RESTART ---

#[test]
fn run_all_discards_stepwise_replay() {
    let mut session = Session::new(TracePolicyV1::default());
    session.step().unwrap();
    session.step().unwrap();
    assert!(session.is_stepping());

    session.run_all().unwrap();
    assert!(!session.is_stepping());

    match session.step().unwrap() {
        StepOutcome::Shown(view) => assert_eq!(view.index, 0),
        StepOutcome::Finished { .. } => panic!("expected a fresh replay from step 0"),
    }
}

#[test]
fn invalid_input_surfaces_typed_errors() {
    let policy = TracePolicyV1::default();

    let mut malformed = Session::with_input("1, 2", "x", policy.clone());
    assert!(matches!(
        malformed.run_all(),
        Err(RunError::Input(InputError::MalformedTarget { .. }))
    ));

    let mut negative = Session::with_input("3, -1", "2", policy);
    assert!(matches!(
        negative.step(),
        Err(RunError::Search(SearchError::InvalidInput { .. }))
    ));
}

#[test]
fn frontier_only_session_admits_negatives() {
    let policy = build_policy(&PolicyConfig {
        frontier_only: true,
        ..PolicyConfig::default()
    })
    .unwrap();
    let mut session = Session::with_input("3, -1", "2", policy);
    let report = session.run_all().unwrap();
    assert_eq!(report.solutions, vec![vec![-1, 3]]);
}

#[test]
fn element_ceiling_from_config() {
    let policy = build_policy(&PolicyConfig {
        max_elements: Some(3),
        ..PolicyConfig::default()
    })
    .unwrap();
    let mut session = Session::with_input("1, 2, 3, 4", "5", policy);
    assert!(matches!(
        session.run_all(),
        Err(RunError::Search(SearchError::ResourceExceeded { .. }))
    ));
}

// --- RENDER ---

#[test]
fn default_trace_opening_lines() {
    let run = scenarios::DEFAULT_SET.run().unwrap();
    let steps = run.trace().steps();
    let elements = run.elements();

    assert_eq!(
        log_entry(&steps[0], elements, 15),
        vec![
            "Starting with element 3 at index 0",
            "Current subset: []",
            "Current sum: 0",
        ]
    );
    assert_eq!(
        log_entry(&steps[1], elements, 15),
        vec![
            "Including element 3 at index 0",
            "Current subset: [3]",
            "Current sum: 3",
        ]
    );

    let opening: Vec<String> = steps[..4].iter().map(|s| tree_node(s, elements)).collect();
    assert_eq!(
        opening,
        vec![
            "[] Sum: 0 Checking",
            "  [3] Sum: 3 Checking (Included 3)",
            "    [3, 5] Sum: 8 Checking (Included 5)",
            "      [3, 5, 6] Sum: 14 Checking (Included 6)",
        ]
    );
}

#[test]
fn first_solution_and_first_overshoot_messages() {
    let run = scenarios::DEFAULT_SET.run().unwrap();
    let steps = run.trace().steps();
    let elements = run.elements();

    // [3,5,6] → include 7 → 21 > 15.
    let overshoot = log_entry(&steps[4], elements, 15);
    assert_eq!(overshoot[0], "Including element 7 at index 3");
    assert_eq!(overshoot[3], "Backtracking: Sum 21 exceeds target 15");

    let first_solution = steps
        .iter()
        .position(|s| s.subset == [3, 5, 7] && s.status.is_terminal())
        .unwrap();
    let lines = log_entry(&steps[first_solution], elements, 15);
    assert_eq!(lines[1], "Current subset: [3, 5, 7]");
    assert_eq!(lines[3], "Solution found! Subset sums to target 15");
}
