//! Step-recording adapters for classic algorithms.
//!
//! Every adapter runs its algorithm once, synchronously, to completion and
//! returns a [`Recording`]: the ordered steps (payload snapshot plus status
//! line) and an [`Outcome`]. Nothing here knows about timers; playback lives
//! in `algoviz-playback`.
//!
//! Adapters are grouped by category ([`searching`], [`sorting`], [`graph`],
//! [`tree`], [`dp`], [`backtracking`]). [`dispatch::record`] selects one by
//! [`AlgorithmId`] and [`InputGenerator`] produces random inputs for any of
//! them.

pub mod backtracking;
pub mod dispatch;
pub mod dp;
pub mod error;
pub mod generate;
pub mod graph;
pub mod input;
pub mod recording;
pub mod registry;
pub mod searching;
pub mod sorting;
pub mod tree;

// Re-export commonly used types
pub use dispatch::record;
pub use error::AlgorithmError;
pub use generate::InputGenerator;
pub use input::AlgorithmInput;
pub use recording::{Outcome, Recording};
pub use registry::{AlgorithmId, AlgorithmInfo, Category, GraphRequirements};
