//! Searching adapters: linear scan and binary search.

pub mod binary;
pub mod linear;

pub use binary::binary_search;
pub use linear::{linear_search, LinearSearchSteps};
