//! Cycle detection by depth-first search.
//!
//! Undirected graphs track the edge each node was entered by, so walking
//! straight back along it is not mistaken for a cycle while a parallel edge
//! still is. Directed graphs look for an edge back to a node still on the
//! DFS stack. The search starts at the source node and then sweeps any
//! components it did not reach. On the first cycle found, the full cycle
//! path is reported.

use algoviz_core::{EdgeId, Frontier, Graph, GraphFrame, Neighbor, NodeId, StepLog};

use crate::recording::Recording;

struct Entry {
    node: NodeId,
    via: Option<EdgeId>,
    neighbors: Vec<Neighbor>,
    next: usize,
}

struct CycleSearch<'g> {
    graph: &'g Graph,
    log: StepLog<GraphFrame>,
    frame: GraphFrame,
    /// Tree predecessor of each visited node.
    parent: Vec<Option<(NodeId, EdgeId)>>,
    stack: Vec<Entry>,
}

impl<'g> CycleSearch<'g> {
    fn on_stack(&self, node: NodeId) -> bool {
        self.stack.iter().any(|e| e.node == node)
    }

    fn sync_frontier(&mut self) {
        self.frame.frontier = Frontier::Stack(self.stack.iter().map(|e| e.node).collect());
    }

    fn enter(&mut self, node: NodeId, via: Option<EdgeId>) {
        self.frame.visited_nodes.insert(node);
        self.frame.visit_order.push(node);
        self.stack.push(Entry {
            node,
            via,
            neighbors: self.graph.neighbors(node),
            next: 0,
        });
        self.sync_frontier();
        self.frame.current_node = Some(node);
    }

    /// Nodes from `ancestor` down the tree to `node`.
    fn tree_path(&self, ancestor: NodeId, node: NodeId) -> (Vec<NodeId>, Vec<EdgeId>) {
        let mut nodes = vec![node];
        let mut edges = Vec::new();
        let mut current = node;
        while current != ancestor {
            let Some((prev, edge)) = self.parent[current.index()] else {
                break;
            };
            nodes.push(prev);
            edges.push(edge);
            current = prev;
        }
        nodes.reverse();
        edges.reverse();
        (nodes, edges)
    }

    /// Runs from `root`; returns `true` once a cycle has been recorded.
    fn search_from(&mut self, root: NodeId) -> bool {
        self.enter(root, None);
        self.frame.current_edge = None;
        self.log.record(
            format!("Starting DFS from {}", self.graph.label(root)),
            self.frame.clone(),
        );

        while let Some(top) = self.stack.last_mut() {
            let current = top.node;
            let via = top.via;
            let Some(neighbor) = top.neighbors.get(top.next).copied() else {
                self.stack.pop();
                self.sync_frontier();
                self.frame.current_node = self.stack.last().map(|e| e.node);
                self.frame.current_edge = None;
                self.log.record(
                    format!("Finished processing {}", self.graph.label(current)),
                    self.frame.clone(),
                );
                continue;
            };
            top.next += 1;

            self.frame.current_node = Some(current);
            self.frame.current_edge = Some(neighbor.edge);
            let label = self.graph.label(neighbor.node);

            if !self.graph.directed && via == Some(neighbor.edge) {
                self.log.record(
                    format!("Skipping edge {} back to parent {label}", neighbor.edge),
                    self.frame.clone(),
                );
                continue;
            }

            self.log.record(
                format!("Checking edge {} to {label}", neighbor.edge),
                self.frame.clone(),
            );

            if !self.frame.visited_nodes.contains(&neighbor.node) {
                self.parent[neighbor.node.index()] = Some((current, neighbor.edge));
                self.frame.visited_edges.insert(neighbor.edge);
                self.enter(neighbor.node, Some(neighbor.edge));
                self.frame.current_edge = None;
                self.log.record(format!("Visiting {label}"), self.frame.clone());
                continue;
            }

            // Undirected: any visited non-parent neighbor closes a cycle.
            // Directed: only a neighbor still on the stack does.
            let closes = !self.graph.directed || self.on_stack(neighbor.node);
            if !closes {
                self.log.record(
                    format!("{label} already fully explored, no cycle through it"),
                    self.frame.clone(),
                );
                continue;
            }

            let (mut nodes, mut edges) = self.tree_path(neighbor.node, current);
            nodes.push(neighbor.node);
            edges.push(neighbor.edge);
            self.frame.visited_edges.insert(neighbor.edge);
            self.frame.path_nodes = nodes;
            self.frame.path_edges = edges;
            self.log.record(
                format!(
                    "Cycle detected! Path: {}",
                    self.graph.path_labels(&self.frame.path_nodes)
                ),
                self.frame.clone(),
            );
            return true;
        }
        false
    }
}

pub fn detect_cycle(graph: &Graph, source: NodeId) -> Recording<GraphFrame> {
    let mut search = CycleSearch {
        graph,
        log: StepLog::new(),
        frame: GraphFrame::default(),
        parent: vec![None; graph.node_count()],
        stack: Vec::new(),
    };

    let roots: Vec<NodeId> = std::iter::once(source)
        .chain(graph.node_ids().filter(|id| *id != source))
        .collect();
    let mut found = false;
    for root in roots {
        if search.frame.visited_nodes.contains(&root) {
            continue;
        }
        if search.search_from(root) {
            found = true;
            break;
        }
    }

    let CycleSearch { mut log, mut frame, .. } = search;
    frame.current_node = None;
    frame.current_edge = None;
    frame.frontier = Frontier::None;
    let status = if found {
        format!(
            "Cycle found: {}",
            graph.path_labels(&frame.path_nodes)
        )
    } else {
        "No cycles detected".to_string()
    };
    log.record(status, frame);
    Recording::completed(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::graph;

    #[test]
    fn tree_has_no_cycle() {
        let g = graph(4, false, &[(0, 1, 1), (0, 2, 1), (2, 3, 1)]);
        let rec = detect_cycle(&g, NodeId(0));
        assert_eq!(rec.last().unwrap().status, "No cycles detected");
        assert!(rec.final_payload().unwrap().path_nodes.is_empty());
    }

    #[test]
    fn reports_full_cycle_path() {
        // A - B - C - D - B
        let g = graph(4, false, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 1, 1)]);
        let rec = detect_cycle(&g, NodeId(0));
        assert_eq!(rec.last().unwrap().status, "Cycle found: B → C → D → B");
        let last = rec.final_payload().unwrap();
        assert_eq!(last.path_edges.len(), 3);
    }

    #[test]
    fn parallel_edges_form_a_cycle() {
        let g = graph(2, false, &[(0, 1, 1), (1, 0, 1)]);
        let rec = detect_cycle(&g, NodeId(0));
        assert_eq!(rec.last().unwrap().status, "Cycle found: A → B → A");
    }

    #[test]
    fn sweeps_unreached_components() {
        let g = graph(5, false, &[(0, 1, 1), (2, 3, 1), (3, 4, 1), (4, 2, 1)]);
        let rec = detect_cycle(&g, NodeId(0));
        assert!(rec.last().unwrap().status.starts_with("Cycle found"));
    }

    #[test]
    fn directed_cross_edge_is_not_a_cycle() {
        // A -> B, A -> C, C -> B : diamond-ish, acyclic
        let g = graph(3, true, &[(0, 1, 1), (0, 2, 1), (2, 1, 1)]);
        let rec = detect_cycle(&g, NodeId(0));
        assert_eq!(rec.last().unwrap().status, "No cycles detected");

        let g = graph(3, true, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        let rec = detect_cycle(&g, NodeId(0));
        assert_eq!(rec.last().unwrap().status, "Cycle found: A → B → C → A");
    }
}
