//! Graph adapters.
//!
//! All graph adapters borrow a [`Graph`] read-only and snapshot their
//! working state into a [`GraphFrame`](algoviz_core::GraphFrame) per step.
//! Undirected graphs are traversed in both directions via
//! [`Graph::neighbors`]. The source node (and destination, where used) must
//! exist; the dispatch layer checks this before calling in.

pub mod bellman_ford;
pub mod bfs;
pub mod cycle;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod topological;

pub use bellman_ford::bellman_ford;
pub use bfs::bfs;
pub use cycle::detect_cycle;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use kruskal::kruskal;
pub use prim::prim;
pub use topological::topological_sort;

use algoviz_core::{Distance, EdgeId, Graph, NodeId};

/// Renders `A=0, B=4, C=∞`.
pub(crate) fn distance_summary(graph: &Graph, distances: &[Distance]) -> String {
    graph
        .node_ids()
        .zip(distances)
        .map(|(id, d)| format!("{}={d}", graph.label(id)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Walks predecessor links back from `target`. Returns the nodes and edges
/// from the root of the walk to `target`. The walk is bounded by the node
/// count so a corrupted predecessor chain cannot loop.
pub(crate) fn walk_back(
    predecessors: &[Option<(NodeId, EdgeId)>],
    target: NodeId,
) -> (Vec<NodeId>, Vec<EdgeId>) {
    let mut nodes = vec![target];
    let mut edges = Vec::new();
    let mut current = target;
    while let Some(&Some((prev, edge))) = predecessors.get(current.index()) {
        if nodes.len() > predecessors.len() {
            break;
        }
        nodes.push(prev);
        edges.push(edge);
        current = prev;
    }
    nodes.reverse();
    edges.reverse();
    (nodes, edges)
}

/// Formats an edge as `A→B` or `A–B` depending on direction.
pub(crate) fn edge_label(graph: &Graph, from: NodeId, to: NodeId) -> String {
    let arrow = if graph.directed { "→" } else { "–" };
    format!("{}{arrow}{}", graph.label(from), graph.label(to))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use algoviz_core::{Graph, NodeId, Position};

    /// Builds a graph with `n` nodes labelled A.. and the given edges.
    pub fn graph(n: usize, directed: bool, edges: &[(u32, u32, i64)]) -> Graph {
        let mut g = Graph::new(directed, true);
        for i in 0..n {
            g.add_node(algoviz_core::graph::letter_label(i), Position::default());
        }
        for &(s, t, w) in edges {
            g.add_edge(NodeId(s), NodeId(t), w).unwrap();
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_back_reconstructs_path() {
        let preds = vec![
            None,
            Some((NodeId(0), EdgeId(0))),
            Some((NodeId(1), EdgeId(3))),
        ];
        let (nodes, edges) = walk_back(&preds, NodeId(2));
        assert_eq!(nodes, vec![NodeId(0), NodeId(1), NodeId(2)]);
        assert_eq!(edges, vec![EdgeId(0), EdgeId(3)]);
    }

    #[test]
    fn walk_back_is_bounded_on_loops() {
        let preds = vec![Some((NodeId(1), EdgeId(0))), Some((NodeId(0), EdgeId(0)))];
        let (nodes, _) = walk_back(&preds, NodeId(0));
        assert!(nodes.len() <= 3);
    }

    #[test]
    fn summary_lists_every_node() {
        let g = fixtures::graph(3, false, &[]);
        let d = [Distance::Finite(0), Distance::Finite(-2), Distance::Unreachable];
        assert_eq!(distance_summary(&g, &d), "A=0, B=-2, C=∞");
    }
}
