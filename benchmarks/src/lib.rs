//! Shared regimes for subsum benchmark suites.
//!
//! Each regime pins an element set, a target and a policy that drive the
//! engine into one characteristic shape: a full unpruned tree, a tree
//! dominated by `sum > target` pruning, or one with many solution leaves.

use subsum_kernel::carrier::element_set::ElementSetV1;
use subsum_search::engine::{generate, SearchRunV1};
use subsum_search::error::SearchError;
use subsum_search::policy::{PruningModeV1, TracePolicyV1};

/// A named benchmark input.
pub struct Regime {
    pub name: &'static str,
    pub elements: ElementSetV1,
    pub target: i64,
    pub policy: TracePolicyV1,
}

impl Regime {
    /// Run the regime once.
    ///
    /// # Errors
    ///
    /// Propagates [`generate`] failures.
    pub fn run(&self) -> Result<SearchRunV1, SearchError> {
        generate(&self.elements, self.target, &self.policy)
    }
}

/// `1..=n`, ascending.
#[must_use]
pub fn ascending(n: usize) -> ElementSetV1 {
    ElementSetV1::from_unsorted((1..=n).map(|v| i64::try_from(v).unwrap_or(i64::MAX)).collect())
}

/// Target above the total: no pruning, every one of `2^(n+1) - 1` nodes.
#[must_use]
pub fn regime_full_tree(n: usize) -> Regime {
    let elements = ascending(n);
    let target = i64::try_from(elements.total() + 1).unwrap_or(i64::MAX);
    Regime {
        name: "full_tree",
        elements,
        target,
        policy: TracePolicyV1::default(),
    }
}

/// Small target over large values: most include branches are cut at once.
#[must_use]
pub fn regime_heavy_pruning(n: usize) -> Regime {
    let values = (0..n).map(|i| 10 + i64::try_from(i).unwrap_or(0)).collect();
    Regime {
        name: "heavy_pruning",
        elements: ElementSetV1::from_unsorted(values),
        target: 25,
        policy: TracePolicyV1::default(),
    }
}

/// Half the total of `1..=n`: many distinct solution leaves.
#[must_use]
pub fn regime_many_solutions(n: usize) -> Regime {
    let elements = ascending(n);
    let target = i64::try_from(elements.total() / 2).unwrap_or(i64::MAX);
    Regime {
        name: "many_solutions",
        elements,
        target,
        policy: TracePolicyV1::default(),
    }
}

/// Mixed-sign elements under frontier-only pruning.
#[must_use]
pub fn regime_signed(n: usize) -> Regime {
    let values = (0..n)
        .map(|i| {
            let v = i64::try_from(i).unwrap_or(0) + 1;
            if i % 2 == 0 {
                -v
            } else {
                v
            }
        })
        .collect();
    Regime {
        name: "signed_frontier_only",
        elements: ElementSetV1::from_unsorted(values),
        target: 3,
        policy: TracePolicyV1 {
            pruning: PruningModeV1::FrontierOnly,
            ..TracePolicyV1::default()
        },
    }
}

/// Every regime at size `n`.
#[must_use]
pub fn all_regimes(n: usize) -> Vec<Regime> {
    vec![
        regime_full_tree(n),
        regime_heavy_pruning(n),
        regime_many_solutions(n),
        regime_signed(n),
    ]
}
