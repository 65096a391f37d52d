//! Breadth-first traversal.

use std::collections::VecDeque;

use algoviz_core::{Frontier, Graph, GraphFrame, NodeId, StepLog};

use crate::recording::Recording;

pub fn bfs(graph: &Graph, source: NodeId) -> Recording<GraphFrame> {
    let mut log = StepLog::new();
    let mut frame = GraphFrame::default();
    let mut queue = VecDeque::from([source]);

    frame.visited_nodes.insert(source);
    frame.visit_order.push(source);
    frame.frontier = Frontier::Queue(queue.iter().copied().collect());
    log.record(
        format!("Starting BFS from node {}", graph.label(source)),
        frame.clone(),
    );

    while let Some(node) = queue.pop_front() {
        frame.current_node = Some(node);
        frame.current_edge = None;
        frame.frontier = Frontier::Queue(queue.iter().copied().collect());
        log.record(format!("Dequeued node {}", graph.label(node)), frame.clone());

        for neighbor in graph.neighbors(node) {
            frame.current_edge = Some(neighbor.edge);
            frame.visited_edges.insert(neighbor.edge);
            let label = graph.label(neighbor.node);
            if frame.visited_nodes.insert(neighbor.node) {
                queue.push_back(neighbor.node);
                frame.visit_order.push(neighbor.node);
                frame.frontier = Frontier::Queue(queue.iter().copied().collect());
                log.record(
                    format!(
                        "Discovered node {label} via edge {} (visit #{})",
                        neighbor.edge,
                        frame.visit_order.len()
                    ),
                    frame.clone(),
                );
            } else {
                log.record(
                    format!(
                        "Explored edge {} to already visited node {label}",
                        neighbor.edge
                    ),
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
            "BFS completed. Visited {} of {} nodes: {}",
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
    fn visits_in_breadth_order() {
        // A - B, A - C, B - D
        let g = graph(4, false, &[(0, 1, 1), (0, 2, 1), (1, 3, 1)]);
        let rec = bfs(&g, NodeId(0));
        let last = rec.final_payload().unwrap();
        assert_eq!(
            last.visit_order,
            vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]
        );
        assert_eq!(last.visited_edges.len(), 3);
        assert_eq!(
            rec.last().unwrap().status,
            "BFS completed. Visited 4 of 4 nodes: A → B → C → D"
        );
    }

    #[test]
    fn one_step_per_dequeue_and_per_edge() {
        let g = graph(3, false, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        let rec = bfs(&g, NodeId(0));
        let dequeues = rec.statuses().iter().filter(|s| s.starts_with("Dequeued")).count();
        assert_eq!(dequeues, 3);
        // Each undirected edge is examined from both endpoints.
        let edges = rec
            .statuses()
            .iter()
            .filter(|s| s.starts_with("Discovered") || s.starts_with("Explored"))
            .count();
        assert_eq!(edges, 6);
    }

    #[test]
    fn directed_graph_does_not_walk_backwards() {
        let g = graph(3, true, &[(1, 0, 1), (1, 2, 1)]);
        let rec = bfs(&g, NodeId(0));
        let last = rec.final_payload().unwrap();
        assert_eq!(last.visit_order, vec![NodeId(0)]);
        assert_eq!(rec.last().unwrap().status, "BFS completed. Visited 1 of 3 nodes: A");
    }
}
