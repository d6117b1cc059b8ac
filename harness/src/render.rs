//! Text rendering of search steps: execution log, decision tree, solutions.
//!
//! Pure functions of a step plus the run inputs. Nothing here feeds back into
//! the search.

use subsum_kernel::carrier::element_set::ElementSetV1;
use subsum_search::step::{RejectionReasonV1, SearchStepV1, StepStatusV1};

/// `[3, 5, 7]` style rendering of a subset.
#[must_use]
pub fn format_subset(subset: &[i64]) -> String {
    let items: Vec<String> = subset.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Display label for a status.
#[must_use]
pub fn status_label(status: StepStatusV1) -> &'static str {
    match status {
        StepStatusV1::Checking => "Checking",
        StepStatusV1::Solution => "Solution",
        StepStatusV1::Rejected => "Rejected",
    }
}

/// Execution-log lines for one step.
///
/// The first line names the decision that led here (or, at the root, the
/// first element about to be decided). The subset and sum follow, then the
/// verdict for terminal steps.
#[must_use]
pub fn log_entry(step: &SearchStepV1, elements: &ElementSetV1, target: i64) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);

    match step.last_decision() {
        Some(decision) => {
            let value = element_text(elements, decision.element_index);
            let verb = if decision.included {
                "Including"
            } else {
                "Excluding"
            };
            lines.push(format!(
                "{verb} element {value} at index {}",
                decision.element_index
            ));
        }
        None => {
            if let Some(first) = elements.get(step.frontier_index) {
                lines.push(format!(
                    "Starting with element {first} at index {}",
                    step.frontier_index
                ));
            }
        }
    }

    lines.push(format!("Current subset: {}", format_subset(&step.subset)));
    lines.push(format!("Current sum: {}", step.sum));

    match (step.status, step.rejection) {
        (StepStatusV1::Solution, _) => {
            lines.push(format!("Solution found! Subset sums to target {target}"));
        }
        (StepStatusV1::Rejected, Some(RejectionReasonV1::SumExceedsTarget)) => {
            lines.push(format!(
                "Backtracking: Sum {} exceeds target {target}",
                step.sum
            ));
        }
        (StepStatusV1::Rejected, _) => {
            lines.push(format!(
                "Backtracking: Reached end of set, sum {} ≠ target {target}",
                step.sum
            ));
        }
        (StepStatusV1::Checking, _) => {}
    }

    lines
}

/// One decision-tree line, indented by depth.
///
/// `    [3, 5] Sum: 8 Checking (Included 5)`
#[must_use]
pub fn tree_node(step: &SearchStepV1, elements: &ElementSetV1) -> String {
    let indent = "  ".repeat(step.depth());
    let mut line = format!(
        "{indent}{} Sum: {} {}",
        format_subset(&step.subset),
        step.sum,
        status_label(step.status)
    );
    if let Some(decision) = step.last_decision() {
        let value = element_text(elements, decision.element_index);
        let verb = if decision.included {
            "Included"
        } else {
            "Excluded"
        };
        line.push_str(&format!(" ({verb} {value})"));
    }
    line
}

/// Solution card text; `ordinal` is zero-based.
#[must_use]
pub fn solution_card(ordinal: usize, subset: &[i64], target: i64) -> String {
    format!(
        "Solution {}: {} (Sum: {target})",
        ordinal + 1,
        format_subset(subset)
    )
}

fn element_text(elements: &ElementSetV1, index: usize) -> String {
    elements
        .get(index)
        .map_or_else(|| "?".to_string(), |v| v.to_string())
}
