//! Dynamic-programming adapters.
//!
//! Each step snapshots the entire table so that a renderer can redraw any
//! step in isolation. Cells not yet computed are `None`.

pub mod fibonacci;
pub mod knapsack;
pub mod lcs;
pub mod lis;
pub mod matrix_chain;

pub use fibonacci::fibonacci;
pub use knapsack::knapsack;
pub use lcs::lcs;
pub use lis::lis;
pub use matrix_chain::matrix_chain;
