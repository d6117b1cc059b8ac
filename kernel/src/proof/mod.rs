//! Proof module: canonical bytes, domain separators, content hashing.
//!
//! Depends on nothing else in the kernel. Every digest in the workspace is
//! computed through this module.

pub mod canon;
pub mod hash;
pub mod hash_domain;
