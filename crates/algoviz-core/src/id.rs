//! Stable ID newtypes for graph and tree entities.
//!
//! All IDs are distinct newtype wrappers, providing type safety so that a
//! `NodeId` cannot be accidentally used where an `EdgeId` is expected.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use petgraph::graph::{EdgeIndex, NodeIndex};
use serde::{Deserialize, Serialize};

/// Graph node identifier. Node ids are dense: node `n` sits at position `n`
/// of [`Graph::nodes`](crate::graph::Graph::nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Graph edge identifier. Displayed as `e<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

/// Opaque render handle carried by tree nodes.
///
/// Renderers use it as a stable key between frames. It has no algorithmic
/// meaning and is regenerated whenever a node is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderKey(pub u64);

impl RenderKey {
    /// Allocates a process-unique key.
    pub fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        RenderKey(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl NodeId {
    /// Position of this node in the dense node list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    /// Position of this edge in the edge list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

// Bridge between our ids and petgraph's indices.

impl From<NodeIndex<u32>> for NodeId {
    fn from(idx: NodeIndex<u32>) -> Self {
        NodeId(idx.index() as u32)
    }
}

impl From<NodeId> for NodeIndex<u32> {
    fn from(id: NodeId) -> Self {
        NodeIndex::new(id.0 as usize)
    }
}

impl From<EdgeIndex<u32>> for EdgeId {
    fn from(idx: EdgeIndex<u32>) -> Self {
        EdgeId(idx.index() as u32)
    }
}
