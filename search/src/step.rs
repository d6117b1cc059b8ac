//! Search step snapshot model.
//!
//! A [`SearchStepV1`] is an independent value: it owns copies of the subset
//! and decision path at the moment it was recorded, so later steps never
//! alias or mutate it.

use subsum_kernel::proof::canon::wide_integer;

/// One explicit include/exclude choice about one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecisionV1 {
    /// Index into the Element Set, in `0..n`.
    pub element_index: usize,
    /// `true` if the element was added to the subset.
    pub included: bool,
}

impl DecisionV1 {
    #[must_use]
    pub fn include(element_index: usize) -> Self {
        Self {
            element_index,
            included: true,
        }
    }

    #[must_use]
    pub fn exclude(element_index: usize) -> Self {
        Self {
            element_index,
            included: false,
        }
    }

    fn to_json_value(self) -> serde_json::Value {
        serde_json::json!({
            "element_index": self.element_index,
            "included": self.included,
        })
    }
}

/// Outcome recorded for a step.
///
/// `Checking` is interior (children follow in the trace); `Solution` and
/// `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatusV1 {
    Checking,
    Solution,
    Rejected,
}

impl StepStatusV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Solution => "solution",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Checking)
    }
}

/// Why a `Rejected` step was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReasonV1 {
    /// `sum > target` under `PruningModeV1::ExceedsTarget`.
    SumExceedsTarget,
    /// Every element has been decided and the sum missed the target.
    FrontierExhausted,
}

impl RejectionReasonV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SumExceedsTarget => "sum_exceeds_target",
            Self::FrontierExhausted => "frontier_exhausted",
        }
    }
}

/// One trace entry: the search state at a node of the recursion tree.
///
/// Invariants (established by the engine):
/// - `sum` is the arithmetic sum of `subset`.
/// - `subset.len()` equals the number of included decisions in `decision_path`.
/// - `decision_path` decides indices `0..frontier_index` in order.
/// - `rejection.is_some()` iff `status == Rejected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStepV1 {
    /// Next element index not yet decided, in `0..=n`.
    pub frontier_index: usize,
    /// Included values in inclusion (ascending index) order.
    pub subset: Vec<i64>,
    /// Sum of `subset`, widened so it cannot overflow.
    pub sum: i128,
    /// Decisions from the root to this step.
    pub decision_path: Vec<DecisionV1>,
    pub status: StepStatusV1,
    pub rejection: Option<RejectionReasonV1>,
}

impl SearchStepV1 {
    /// The decision that produced this step (`None` at the root).
    #[must_use]
    pub fn last_decision(&self) -> Option<DecisionV1> {
        self.decision_path.last().copied()
    }

    /// Depth in the recursion tree (root = 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.decision_path.len()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.decision_path.is_empty()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "decision_path": self
                .decision_path
                .iter()
                .map(|d| d.to_json_value())
                .collect::<Vec<_>>(),
            "frontier_index": self.frontier_index,
            "rejection": self.rejection.map(RejectionReasonV1::as_str),
            "status": self.status.as_str(),
            "subset": self.subset,
            "sum": wide_integer(self.sum),
        })
    }
}
