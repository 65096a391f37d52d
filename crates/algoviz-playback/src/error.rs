//! Error types for the playback layer.

use algoviz_algorithms::AlgorithmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Recording the algorithm failed before playback could start.
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    /// A configuration value could not be parsed.
    #[error("invalid configuration for {key}: {reason}")]
    Config { key: &'static str, reason: String },

    /// `start` was called on a session with no algorithm selected.
    #[error("no algorithm selected")]
    NothingSelected,
}
