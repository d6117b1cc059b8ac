//! Subsum Kernel: the carrier and proof primitives every other crate builds on.
//!
//! # API Surface
//!
//! - [`carrier::element_set::ElementSetV1`] -- the validated, ascending, immutable
//!   multiset of integers a search runs over
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON encoder
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//!
//! # Module Dependency Direction
//!
//! `carrier` and `proof` are independent of each other. The search crate
//! combines them (e.g. hashing an element set's canonical JSON).

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod proof;
