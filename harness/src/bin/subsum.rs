//! `subsum`: run or step through a subset-sum backtracking search.
//!
//! ```text
//! subsum --set "3, 5, 6, 7, 8" --target 15
//! subsum --set "3, 5, 6, 7, 8" --target 15 --step
//! subsum --json
//! ```
//!
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use clap::Parser;
use subsum_harness::policy::{build_policy, PolicyConfig};
use subsum_harness::render::format_subset;
use subsum_harness::runner::{
    run_search, RunError, Session, StepOutcome, DEFAULT_SET_TEXT, DEFAULT_TARGET_TEXT,
};
use subsum_search::policy::TracePolicyV1;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "subsum", about = "Subset-sum backtracking with a replayable trace")]
struct Cli {
    /// Comma-separated integers; non-numeric tokens are ignored.
    #[arg(long, default_value = DEFAULT_SET_TEXT)]
    set: String,

    /// Target sum.
    #[arg(long, default_value = DEFAULT_TARGET_TEXT, allow_hyphen_values = true)]
    target: String,

    /// Replay the trace one step at a time instead of reporting solutions.
    #[arg(long, conflicts_with = "json")]
    step: bool,

    /// Print the whole run (inputs, policy, trace, solutions) as JSON.
    #[arg(long)]
    json: bool,

    /// Largest element count accepted.
    #[arg(long)]
    max_elements: Option<usize>,

    /// Largest trace a run may produce.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Disable `sum > target` pruning; admits negative elements.
    #[arg(long)]
    frontier_only: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PolicyConfig {
        max_elements: cli.max_elements,
        max_trace_steps: cli.max_steps,
        frontier_only: cli.frontier_only,
    };
    let policy = match build_policy(&config) {
        Ok(policy) => policy,
        Err(e) => {
            error!(error = %e, "invalid policy");
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let result = if cli.json {
        print_json(&cli, &policy)
    } else if cli.step {
        print_steps(&cli, policy)
    } else {
        print_report(&cli, policy)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_json(cli: &Cli, policy: &TracePolicyV1) -> Result<(), RunError> {
    let run = run_search(&cli.set, &cli.target, policy)?;
    let mut value = run.to_json_value();
    if let Some(map) = value.as_object_mut() {
        map.insert(
            "run_digest".to_string(),
            serde_json::Value::String(run.digest()?.as_str().to_string()),
        );
    }
    println!("{value:#}");
    Ok(())
}

fn print_report(cli: &Cli, policy: TracePolicyV1) -> Result<(), RunError> {
    let mut session = Session::with_input(&cli.set, &cli.target, policy);
    let report = session.run_all()?;

    println!(
        "Set: {}  Target: {}",
        format_subset(report.elements.as_slice()),
        report.target
    );
    if report.solution_cards.is_empty() {
        println!("No solutions found");
    }
    for card in &report.solution_cards {
        println!("{card}");
    }
    println!(
        "Steps: {} ({} checking, {} solution, {} rejected)",
        report.trace_len,
        report.counts.checking,
        report.counts.solution,
        report.counts.rejected()
    );
    println!("Digest: {}", report.run_digest);
    Ok(())
}

fn print_steps(cli: &Cli, policy: TracePolicyV1) -> Result<(), RunError> {
    let mut session = Session::with_input(&cli.set, &cli.target, policy);
    loop {
        match session.step()? {
            StepOutcome::Shown(view) => {
                println!("Step {}: {}", view.index + 1, view.tree.trim_start());
                for line in &view.log {
                    println!("  {line}");
                }
                if let Some(card) = &view.solution_card {
                    println!("  >> {card}");
                }
            }
            StepOutcome::Finished { solutions_found } => {
                println!("Search complete. Found {solutions_found} solution(s).");
                return Ok(());
            }
        }
    }
}
