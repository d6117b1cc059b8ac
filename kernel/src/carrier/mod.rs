//! Carrier module: the immutable input representation handed to search.

pub mod element_set;
