//! Session runner: the "run all" and "run stepwise" contract.
//!
//! # Pipeline
//!
//! ```text
//! normalize(set_text, target_text) → generate() → SearchRunV1
//!   run all:   report solutions + counts + digest
//!   stepwise:  StepCursor → advance() per step → log / tree / solution views
//! ```
//!
//! Every new run replaces the previous cursor. Nothing from an earlier run
//! is observable after `run_all`, the first `step` of a fresh session, or
//! `reset`.

use subsum_kernel::carrier::element_set::ElementSetV1;
use subsum_kernel::proof::canon::CanonError;
use subsum_kernel::proof::hash::ContentHash;
use subsum_search::cursor::StepCursor;
use subsum_search::engine::{generate, SearchRunV1};
use subsum_search::error::SearchError;
use subsum_search::policy::TracePolicyV1;
use subsum_search::step::{SearchStepV1, StepStatusV1};
use subsum_search::trace::TraceCountsV1;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::input::{normalize, InputError, RunInputV1};
use crate::render::{log_entry, solution_card, tree_node};

/// Element field text a fresh or reset session starts with.
pub const DEFAULT_SET_TEXT: &str = "3, 5, 6, 7, 8";

/// Target field text a fresh or reset session starts with.
pub const DEFAULT_TARGET_TEXT: &str = "15";

/// Error during a session run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// Field text could not be normalized.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Search pre-flight or bound failure.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// Digest computation failed.
    #[error("canonical serialization failed: {0}")]
    Canon(#[from] CanonError),
}

/// Summary of a "run all" press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunAllReportV1 {
    pub elements: ElementSetV1,
    pub target: i64,
    pub solutions: Vec<Vec<i64>>,
    /// One rendered card per solution, in trace order.
    pub solution_cards: Vec<String>,
    pub trace_len: usize,
    pub counts: TraceCountsV1,
    pub run_digest: ContentHash,
}

impl RunAllReportV1 {
    fn from_run(run: &SearchRunV1) -> Result<Self, CanonError> {
        let solutions = run.solutions().as_slice().to_vec();
        let solution_cards = solutions
            .iter()
            .enumerate()
            .map(|(i, s)| solution_card(i, s, run.target()))
            .collect();
        Ok(Self {
            elements: run.elements().clone(),
            target: run.target(),
            solutions,
            solution_cards,
            trace_len: run.trace().len(),
            counts: run.trace().counts(),
            run_digest: run.digest()?,
        })
    }
}

/// Everything a presentation layer shows for one replayed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepViewV1 {
    /// Zero-based position of this step in the trace.
    pub index: usize,
    pub step: SearchStepV1,
    pub log: Vec<String>,
    pub tree: String,
    /// Card text when this step is a solution.
    pub solution_card: Option<String>,
}

/// Result of one "step" press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The next step was replayed.
    Shown(StepViewV1),
    /// Every step has been shown.
    Finished { solutions_found: usize },
}

/// Normalize field text and run one search.
///
/// # Errors
///
/// Returns [`RunError::Input`] for malformed text and [`RunError::Search`]
/// for policy, bound, or precondition failures.
pub fn run_search(
    set_text: &str,
    target_text: &str,
    policy: &TracePolicyV1,
) -> Result<SearchRunV1, RunError> {
    let RunInputV1 { elements, target } = normalize(set_text, target_text).map_err(|e| {
        warn!(error = %e, "rejected input");
        e
    })?;

    let run = generate(&elements, target, policy).map_err(|e| {
        warn!(error = %e, elements = elements.len(), target_sum = target, "search did not run");
        e
    })?;

    info!(
        elements = run.elements().len(),
        target_sum = target,
        trace_len = run.trace().len(),
        solutions = run.solutions().len(),
        "search run complete"
    );
    Ok(run)
}

/// Two-button session state: "run all" and "step".
#[derive(Debug, Clone)]
pub struct Session {
    set_text: String,
    target_text: String,
    policy: TracePolicyV1,
    cursor: Option<StepCursor>,
    solutions_shown: usize,
}

impl Session {
    /// A session holding the default field text.
    #[must_use]
    pub fn new(policy: TracePolicyV1) -> Self {
        Self::with_input(DEFAULT_SET_TEXT, DEFAULT_TARGET_TEXT, policy)
    }

    #[must_use]
    pub fn with_input(set_text: &str, target_text: &str, policy: TracePolicyV1) -> Self {
        Self {
            set_text: set_text.to_string(),
            target_text: target_text.to_string(),
            policy,
            cursor: None,
            solutions_shown: 0,
        }
    }

    /// Replace the field text. Any stepwise replay in progress is dropped.
    pub fn set_input(&mut self, set_text: &str, target_text: &str) {
        self.set_text = set_text.to_string();
        self.target_text = target_text.to_string();
        self.cursor = None;
    }

    #[must_use]
    pub fn set_text(&self) -> &str {
        &self.set_text
    }

    #[must_use]
    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    /// `true` while a stepwise replay is active (including once finished).
    #[must_use]
    pub fn is_stepping(&self) -> bool {
        self.cursor.is_some()
    }

    /// The cursor of the active stepwise replay.
    #[must_use]
    pub fn cursor(&self) -> Option<&StepCursor> {
        self.cursor.as_ref()
    }

    /// Run the search to completion and report every solution at once.
    ///
    /// # Errors
    ///
    /// See [`run_search`]; digest failures surface as [`RunError::Canon`].
    pub fn run_all(&mut self) -> Result<RunAllReportV1, RunError> {
        self.cursor = None;
        let run = run_search(&self.set_text, &self.target_text, &self.policy)?;
        Ok(RunAllReportV1::from_run(&run)?)
    }

    /// Show the next step, starting a fresh run on the first press.
    ///
    /// # Errors
    ///
    /// See [`run_search`]; only the first press of a replay can fail.
    pub fn step(&mut self) -> Result<StepOutcome, RunError> {
        let cursor = match self.cursor.take() {
            Some(cursor) => cursor,
            None => {
                let run = run_search(&self.set_text, &self.target_text, &self.policy)?;
                self.solutions_shown = 0;
                run.into_cursor()
            }
        };
        let cursor = self.cursor.insert(cursor);

        let index = cursor.position();
        let solutions_found = cursor.run().solutions().len();
        let step = match cursor.advance() {
            Ok(step) => step.clone(),
            Err(SearchError::ExhaustedCursor { .. }) => {
                return Ok(StepOutcome::Finished { solutions_found });
            }
            Err(e) => return Err(e.into()),
        };

        let run = cursor.run();
        let card = (step.status == StepStatusV1::Solution).then(|| {
            let card = solution_card(self.solutions_shown, &step.subset, run.target());
            self.solutions_shown += 1;
            card
        });
        debug!(
            index,
            status = step.status.as_str(),
            sum = %step.sum,
            "replayed step"
        );

        Ok(StepOutcome::Shown(StepViewV1 {
            index,
            log: log_entry(&step, run.elements(), run.target()),
            tree: tree_node(&step, run.elements()),
            solution_card: card,
            step,
        }))
    }

    /// Restore the default field text and drop any replay.
    pub fn reset(&mut self) {
        self.set_input(DEFAULT_SET_TEXT, DEFAULT_TARGET_TEXT);
        self.solutions_shown = 0;
    }
}
