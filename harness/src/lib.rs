//! Subsum Harness: the presentation-facing layer over the search.
//!
//! The harness turns field text into a validated run input, drives
//! `subsum_search::engine::generate`, and renders steps for an execution log,
//! a decision tree, and solution cards. It owns the two-button session
//! contract ("run all" and "step").
//!
//! The harness does NOT implement search logic. It is also the only crate
//! in the workspace that emits `tracing` events.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod input;
pub mod policy;
pub mod render;
pub mod runner;
