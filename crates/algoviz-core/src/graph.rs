//! Graph: the input model shared by every graph-category adapter.
//!
//! A [`Graph`] is a flat, serializable list of labelled nodes and weighted
//! edges plus two flags, `directed` and `weighted`. Adapters never mutate it;
//! they borrow it for the duration of a recording and snapshot whatever
//! state they need into each step.
//!
//! # Invariants
//!
//! - Node ids are dense: the node with id `n` sits at position `n`.
//! - Edge ids are dense in the same way.
//! - Every edge endpoint references an existing node.
//!
//! [`Graph::add_node`] and [`Graph::add_edge`] maintain these invariants by
//! construction. Graphs deserialized from elsewhere should be checked with
//! [`Graph::validate`] before use.
//!
//! Undirected graphs treat every edge as usable in both directions; see
//! [`Graph::neighbors`].

use petgraph::graph::{DiGraph, UnGraph};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::{EdgeId, NodeId};

/// Layout position of a node. Only renderers care about it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// A labelled graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    pub position: Position,
}

/// A weighted edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub weight: i64,
}

impl GraphEdge {
    /// Returns the endpoint opposite `node`, or `None` if `node` is not an
    /// endpoint of this edge.
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }

    /// Returns `true` if the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A node reachable from another node together with the edge used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub node: NodeId,
    pub edge: EdgeId,
    pub weight: i64,
}

/// The graph input model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub directed: bool,
    pub weighted: bool,
}

/// Returns the spreadsheet-style letter label for a node position:
/// `A`..`Z`, then `AA`, `AB`, ...
pub fn letter_label(index: usize) -> String {
    let mut n = index;
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

impl Graph {
    /// Creates an empty graph.
    pub fn new(directed: bool, weighted: bool) -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            directed,
            weighted,
        }
    }

    /// The five-node weighted undirected graph shown before any input is
    /// generated.
    pub fn sample() -> Self {
        let mut graph = Graph::new(false, true);
        let positions = [
            (100.0, 100.0),
            (300.0, 100.0),
            (200.0, 250.0),
            (100.0, 350.0),
            (300.0, 350.0),
        ];
        for (i, (x, y)) in positions.iter().enumerate() {
            graph.add_node(letter_label(i), Position::new(*x, *y));
        }
        for (s, t, w) in [(0, 1, 4), (0, 2, 2), (1, 2, 5), (1, 4, 3), (2, 3, 7), (3, 4, 4)] {
            graph.edges.push(GraphEdge {
                id: EdgeId(graph.edges.len() as u32),
                source: NodeId(s),
                target: NodeId(t),
                weight: w,
            });
        }
        graph
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Appends a node and returns its id.
    pub fn add_node(&mut self, label: impl Into<String>, position: Position) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(GraphNode {
            id,
            label: label.into(),
            position,
        });
        id
    }

    /// Appends an edge after checking both endpoints exist.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: i64,
    ) -> Result<EdgeId, CoreError> {
        let id = EdgeId(self.edges.len() as u32);
        for endpoint in [source, target] {
            if self.node(endpoint).is_none() {
                return Err(CoreError::DanglingEdge {
                    edge: id,
                    node: endpoint,
                });
            }
        }
        self.edges.push(GraphEdge {
            id,
            source,
            target,
            weight,
        });
        Ok(id)
    }

    /// Checks the dense-id and endpoint invariants.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (position, node) in self.nodes.iter().enumerate() {
            if node.id.index() != position {
                return Err(CoreError::NonDenseNodeIds {
                    position,
                    id: node.id,
                });
            }
        }
        for (position, edge) in self.edges.iter().enumerate() {
            if edge.id.index() != position {
                return Err(CoreError::NonDenseEdgeIds {
                    position,
                    id: edge.id,
                });
            }
            for endpoint in [edge.source, edge.target] {
                if self.node(endpoint).is_none() {
                    return Err(CoreError::DanglingEdge {
                        edge: edge.id,
                        node: endpoint,
                    });
                }
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.index())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&GraphEdge> {
        self.edges.get(id.index())
    }

    /// Returns the node ids in order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id)
    }

    /// Returns the label of a node, or `"?"` for an unknown id.
    pub fn label(&self, id: NodeId) -> &str {
        self.node(id).map(|n| n.label.as_str()).unwrap_or("?")
    }

    /// Joins node labels with arrows, e.g. `A → C → D`.
    pub fn path_labels(&self, path: &[NodeId]) -> String {
        path.iter()
            .map(|id| self.label(*id))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Nodes reachable from `node` in one hop, in edge order.
    ///
    /// Directed graphs follow `source -> target` only. Undirected graphs
    /// also follow `target -> source`. Self-loops are reported once.
    pub fn neighbors(&self, node: NodeId) -> Vec<Neighbor> {
        self.edges
            .iter()
            .filter_map(|edge| {
                if edge.source == node {
                    Some(Neighbor {
                        node: edge.target,
                        edge: edge.id,
                        weight: edge.weight,
                    })
                } else if !self.directed && edge.target == node {
                    Some(Neighbor {
                        node: edge.source,
                        edge: edge.id,
                        weight: edge.weight,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Edges leaving `node` (`edge.source == node`) regardless of direction.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = &GraphEdge> + '_ {
        self.edges.iter().filter(move |e| e.source == node)
    }

    /// Finds the first edge connecting `from` to `to`, honoring direction.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| {
            (e.source == from && e.target == to)
                || (!self.directed && e.source == to && e.target == from)
        })
    }

    /// Number of incoming edges per node (`edge.target` counts).
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.nodes.len()];
        for edge in &self.edges {
            if let Some(slot) = degrees.get_mut(edge.target.index()) {
                *slot += 1;
            }
        }
        degrees
    }

    // -----------------------------------------------------------------------
    // petgraph views
    // -----------------------------------------------------------------------

    /// Builds a petgraph `DiGraph` whose node indices equal our node ids and
    /// whose edge indices equal our edge ids.
    pub fn to_directed_petgraph(&self) -> DiGraph<NodeId, i64> {
        let mut g = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        for node in &self.nodes {
            g.add_node(node.id);
        }
        for edge in &self.edges {
            g.add_edge(edge.source.into(), edge.target.into(), edge.weight);
        }
        g
    }

    /// Builds a petgraph `UnGraph` with the same index correspondence as
    /// [`Graph::to_directed_petgraph`].
    pub fn to_undirected_petgraph(&self) -> UnGraph<NodeId, i64> {
        let mut g = UnGraph::with_capacity(self.nodes.len(), self.edges.len());
        for node in &self.nodes {
            g.add_node(node.id);
        }
        for edge in &self.edges {
            g.add_edge(edge.source.into(), edge.target.into(), edge.weight);
        }
        g
    }
}
