//! `StepCursor`: forward-only replay over a completed run.
//!
//! The cursor never re-derives state. It hands out the steps `generate()`
//! already recorded, in order, and fails fast when asked for more.
//!
//! # Single-reader discipline
//!
//! The run is shared through an `Arc` so the cursor and its creator can both
//! read it, but only one cursor is expected to replay a given run. Nothing
//! enforces this; a second cursor simply replays independently.

use std::sync::Arc;

use crate::engine::SearchRunV1;
use crate::error::SearchError;
use crate::step::SearchStepV1;

/// Where a cursor is in its replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPhaseV1 {
    /// Position 0. An empty trace is never in this phase; it is `Finished`.
    NotStarted,
    /// `0 < position < len`.
    InProgress,
    /// `position == len`.
    Finished,
}

/// Sequential reader over one run's trace.
#[derive(Debug, Clone)]
pub struct StepCursor {
    run: Arc<SearchRunV1>,
    position: usize,
}

impl StepCursor {
    #[must_use]
    pub fn new(run: Arc<SearchRunV1>) -> Self {
        Self { run, position: 0 }
    }

    /// The run being replayed (trace and its solution list).
    #[must_use]
    pub fn run(&self) -> &SearchRunV1 {
        &self.run
    }

    /// Shared handle to the run.
    #[must_use]
    pub fn shared_run(&self) -> Arc<SearchRunV1> {
        Arc::clone(&self.run)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.position < self.run.trace().len()
    }

    /// Return the step at the current position and move past it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::ExhaustedCursor`] once every step has been
    /// returned.
    pub fn advance(&mut self) -> Result<&SearchStepV1, SearchError> {
        let len = self.run.trace().len();
        let Some(step) = self.run.trace().get(self.position) else {
            return Err(SearchError::ExhaustedCursor {
                position: self.position,
                len,
            });
        };
        self.position += 1;
        Ok(step)
    }

    /// Return to the first step.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Number of steps already returned.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.run.trace().len() - self.position
    }

    #[must_use]
    pub fn phase(&self) -> CursorPhaseV1 {
        if !self.has_next() {
            CursorPhaseV1::Finished
        } else if self.position == 0 {
            CursorPhaseV1::NotStarted
        } else {
            CursorPhaseV1::InProgress
        }
    }
}
