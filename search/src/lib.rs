//! Subsum Search: exhaustive subset-sum backtracking with a replayable trace.
//!
//! This crate depends only on `subsum_kernel`; it does NOT depend on
//! `subsum_harness`, and it never logs. Errors are returned as values.
//!
//! # Crate dependency graph
//!
//! ```text
//! subsum_kernel  ←  subsum_search  ←  subsum_harness
//! (carrier, proof)  (engine, cursor)   (input, render, session, CLI)
//! ```
//!
//! # Key types
//!
//! - [`engine::generate`] -- one synchronous pass producing a [`engine::SearchRunV1`]
//! - [`step::SearchStepV1`] -- immutable per-node snapshot
//! - [`trace::TraceV1`] / [`trace::SolutionListV1`] -- the run's outputs
//! - [`cursor::StepCursor`] -- forward-only replay of a completed trace
//! - [`policy::TracePolicyV1`] -- run bounds and pruning rule

#![forbid(unsafe_code)]

pub mod cursor;
pub mod engine;
pub mod error;
pub mod policy;
pub mod step;
pub mod trace;
