//! Core error types for algoviz-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! structural checks performed on graphs and playback parameters.

use crate::id::{EdgeId, NodeId};
use thiserror::Error;

/// Core errors produced by the algoviz-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A node id was not found in the graph.
    #[error("node not found: NodeId({id})")]
    NodeNotFound { id: NodeId },

    /// An edge references a node that does not exist.
    #[error("edge {edge} references missing node {node}")]
    DanglingEdge { edge: EdgeId, node: NodeId },

    /// Node ids must match their position in the node list.
    #[error("node at position {position} has id {id}")]
    NonDenseNodeIds { position: usize, id: NodeId },

    /// Edge ids must match their position in the edge list.
    #[error("edge at position {position} has id {id}")]
    NonDenseEdgeIds { position: usize, id: EdgeId },

    /// Playback speed must lie within the supported range.
    #[error("invalid speed {value}: must be between 0.25 and 10")]
    InvalidSpeed { value: f64 },
}
