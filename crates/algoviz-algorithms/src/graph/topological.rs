//! Topological ordering with Kahn's algorithm.
//!
//! Undirected input cannot be ordered: the adapter then returns a single
//! explanatory step with [`Outcome::Unsatisfiable`](crate::recording::Outcome).
//! A directed graph with a cycle leaves some nodes unordered and ends with
//! a "not a DAG" report.

use std::collections::VecDeque;

use algoviz_core::{Frontier, Graph, GraphFrame, StepLog};

use crate::recording::Recording;

pub fn topological_sort(graph: &Graph) -> Recording<GraphFrame> {
    if !graph.directed {
        return Recording::unsatisfiable(
            "Topological sort requires a directed acyclic graph (DAG)",
            GraphFrame::default(),
        );
    }

    let mut log = StepLog::new();
    let mut frame = GraphFrame {
        in_degrees: graph.in_degrees(),
        ..Default::default()
    };
    let mut queue: VecDeque<_> = graph
        .node_ids()
        .filter(|id| frame.in_degrees[id.index()] == 0)
        .collect();
    frame.frontier = Frontier::Queue(queue.iter().copied().collect());
    log.record(
        format!("Found {} nodes with no incoming edges", queue.len()),
        frame.clone(),
    );

    while let Some(node) = queue.pop_front() {
        frame.visited_nodes.insert(node);
        frame.visit_order.push(node);
        frame.current_node = Some(node);
        frame.current_edge = None;
        frame.frontier = Frontier::Queue(queue.iter().copied().collect());
        log.record(
            format!("Processing node {}", graph.label(node)),
            frame.clone(),
        );

        for edge in graph.outgoing(node) {
            let target = edge.target.index();
            frame.in_degrees[target] = frame.in_degrees[target].saturating_sub(1);
            frame.visited_edges.insert(edge.id);
            frame.current_edge = Some(edge.id);
            log.record(
                format!(
                    "Removing edge {}→{} (in-degree of {} now {})",
                    graph.label(node),
                    graph.label(edge.target),
                    graph.label(edge.target),
                    frame.in_degrees[target]
                ),
                frame.clone(),
            );
            if frame.in_degrees[target] == 0 {
                queue.push_back(edge.target);
                frame.frontier = Frontier::Queue(queue.iter().copied().collect());
                log.record(
                    format!("Added {} to queue", graph.label(edge.target)),
                    frame.clone(),
                );
            }
        }
    }

    frame.current_node = None;
    frame.current_edge = None;
    frame.frontier = Frontier::None;
    let status = if frame.visit_order.len() == graph.node_count() {
        format!(
            "Topological order: {}",
            graph.path_labels(&frame.visit_order)
        )
    } else {
        format!(
            "Cycle detected! Not a DAG ({} of {} nodes ordered)",
            frame.visit_order.len(),
            graph.node_count()
        )
    };
    log.record(status, frame);
    Recording::completed(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::graph;
    use crate::recording::Outcome;
    use algoviz_core::NodeId;

    #[test]
    fn orders_a_dag() {
        // A -> B -> D, A -> C -> D
        let g = graph(4, true, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
        let rec = topological_sort(&g);
        assert_eq!(rec.outcome, Outcome::Completed);
        assert_eq!(
            rec.final_payload().unwrap().visit_order,
            vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]
        );
        assert_eq!(rec.last().unwrap().status, "Topological order: A → B → C → D");
    }

    #[test]
    fn undirected_graph_is_unsatisfiable() {
        let rec = topological_sort(&Graph::sample());
        assert_eq!(rec.outcome, Outcome::Unsatisfiable);
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn cycle_is_not_a_dag() {
        let g = graph(3, true, &[(0, 1, 1), (1, 2, 1), (2, 1, 1)]);
        let rec = topological_sort(&g);
        assert_eq!(
            rec.last().unwrap().status,
            "Cycle detected! Not a DAG (1 of 3 nodes ordered)"
        );
    }
}
