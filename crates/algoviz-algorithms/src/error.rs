//! Error types for adapter dispatch.
//!
//! Adapters themselves never fail: malformed input is a documented
//! precondition. These errors cover misuse at the call boundary, such as
//! handing a graph to a sorting algorithm or omitting a search target.

use algoviz_core::CoreError;
use thiserror::Error;

use crate::registry::AlgorithmId;

#[derive(Debug, Error)]
pub enum AlgorithmError {
    /// The input kind does not match what the algorithm consumes.
    #[error("{algorithm} expects {expected} input, got {got}")]
    InputMismatch {
        algorithm: AlgorithmId,
        expected: &'static str,
        got: &'static str,
    },

    /// A required parameter (search target, source node) is absent.
    #[error("{algorithm} requires a {parameter}")]
    MissingParameter {
        algorithm: AlgorithmId,
        parameter: &'static str,
    },

    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}
