//! Depth-first traversal with an explicit stack.
//!
//! Neighbors are pushed in reverse edge order so they are popped in edge
//! order. A node can be pushed more than once; stale pops are reported as
//! skipped.

use algoviz_core::{Frontier, Graph, GraphFrame, NodeId, StepLog};

use crate::recording::Recording;

pub fn dfs(graph: &Graph, source: NodeId) -> Recording<GraphFrame> {
    let mut log = StepLog::new();
    let mut frame = GraphFrame::default();
    let mut stack = vec![source];

    frame.frontier = Frontier::Stack(stack.clone());
    log.record(
        format!("Starting DFS from node {}", graph.label(source)),
        frame.clone(),
    );

    while let Some(node) = stack.pop() {
        frame.current_node = Some(node);
        frame.current_edge = None;
        frame.frontier = Frontier::Stack(stack.clone());
        let label = graph.label(node);

        if !frame.visited_nodes.insert(node) {
            log.record(format!("Skipping {label}: already visited"), frame.clone());
            continue;
        }
        frame.visit_order.push(node);
        log.record(
            format!("Visiting node {label} (visit #{})", frame.visit_order.len()),
            frame.clone(),
        );

        for neighbor in graph.neighbors(node).into_iter().rev() {
            frame.current_edge = Some(neighbor.edge);
            let other = graph.label(neighbor.node);
            if frame.visited_nodes.contains(&neighbor.node) {
                log.record(
                    format!("Neighbor {other} already visited (edge {})", neighbor.edge),
                    frame.clone(),
                );
            } else {
                frame.visited_edges.insert(neighbor.edge);
                stack.push(neighbor.node);
                frame.frontier = Frontier::Stack(stack.clone());
                log.record(
                    format!("Pushed unvisited neighbor {other} via edge {}", neighbor.edge),
                    frame.clone(),
                );
            }
        }
    }

    frame.current_node = None;
    frame.current_edge = None;
    frame.frontier = Frontier::None;
    log.record(
        format!(
            "DFS completed. Visited {} of {} nodes: {}",
            frame.visited_nodes.len(),
            graph.node_count(),
            graph.path_labels(&frame.visit_order)
        ),
        frame,
    );
    Recording::completed(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::graph;

    #[test]
    fn goes_deep_before_wide() {
        // A - B, A - C, B - D
        let g = graph(4, false, &[(0, 1, 1), (0, 2, 1), (1, 3, 1)]);
        let rec = dfs(&g, NodeId(0));
        assert_eq!(
            rec.final_payload().unwrap().visit_order,
            vec![NodeId(0), NodeId(1), NodeId(3), NodeId(2)]
        );
    }

    #[test]
    fn duplicate_pushes_are_skipped() {
        // Triangle: C is pushed from A and again from B.
        let g = graph(3, false, &[(0, 1, 1), (0, 2, 1), (1, 2, 1)]);
        let rec = dfs(&g, NodeId(0));
        assert!(rec.statuses().iter().any(|s| s.starts_with("Skipping")));
        assert_eq!(rec.final_payload().unwrap().visited_nodes.len(), 3);
    }
}
