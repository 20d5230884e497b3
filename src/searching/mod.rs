//! Lookup over sorted sequences.

pub mod binary_search;

pub use binary_search::{binary_search, binary_search_by, checked_binary_search, is_sorted};
