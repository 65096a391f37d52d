//! Kruskal's minimum spanning tree (forest on disconnected input).
//!
//! Edges are considered in ascending weight (ties by edge id) and tagged
//! accepted or rejected by a union-find over node indices. Edge direction
//! is ignored.

use algoviz_core::{Graph, GraphFrame, StepLog};
use petgraph::unionfind::UnionFind;

use super::edge_label;
use crate::recording::Recording;

pub fn kruskal(graph: &Graph) -> Recording<GraphFrame> {
    let n = graph.node_count();
    let mut log = StepLog::new();
    let mut frame = GraphFrame::default();
    let mut sets = UnionFind::<usize>::new(n);
    let mut total = 0;

    let mut order: Vec<_> = graph.edges.iter().collect();
    order.sort_by_key(|e| (e.weight, e.id));
    frame.candidate_edges = order.iter().map(|e| e.id).collect();
    log.record(
        format!("Sorted {} edges by weight", order.len()),
        frame.clone(),
    );

    for edge in order {
        if n > 0 && frame.mst_edges.len() == n - 1 {
            break;
        }
        frame.candidate_edges.retain(|id| *id != edge.id);
        frame.current_edge = Some(edge.id);
        let label = edge_label(graph, edge.source, edge.target);

        if sets.union(edge.source.index(), edge.target.index()) {
            total += edge.weight;
            frame.mst_edges.push(edge.id);
            for endpoint in [edge.source, edge.target] {
                if frame.visited_nodes.insert(endpoint) {
                    frame.visit_order.push(endpoint);
                }
            }
            frame.total_weight = Some(total);
            log.record(
                format!(
                    "Accepted edge {} {label} (weight {}). Total weight: {total}",
                    edge.id, edge.weight
                ),
                frame.clone(),
            );
        } else {
            frame.rejected_edges.push(edge.id);
            log.record(
                format!(
                    "Rejected edge {} {label} (weight {}): would form a cycle",
                    edge.id, edge.weight
                ),
                frame.clone(),
            );
        }
    }

    frame.current_edge = None;
    frame.total_weight = Some(total);
    let status = if n == 0 || frame.mst_edges.len() == n - 1 {
        format!(
            "MST complete with {} edges. Total weight: {total}",
            frame.mst_edges.len()
        )
    } else {
        format!(
            "Graph is disconnected: spanning forest with {} edges. Total weight: {total}",
            frame.mst_edges.len()
        )
    };
    log.record(status, frame);
    Recording::completed(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::graph;

    #[test]
    fn sample_graph_mst() {
        let rec = kruskal(&Graph::sample());
        let last = rec.final_payload().unwrap();
        // A-C 2, B-E 3, A-B 4, D-E 4
        assert_eq!(last.total_weight, Some(13));
        assert_eq!(last.mst_edges.len(), 4);
        assert_eq!(rec.last().unwrap().status, "MST complete with 4 edges. Total weight: 13");
    }

    #[test]
    fn cycle_edges_are_rejected() {
        let g = graph(3, false, &[(0, 1, 1), (1, 2, 2), (0, 2, 3)]);
        let rec = kruskal(&g);
        assert!(rec
            .statuses()
            .iter()
            .all(|s| !s.starts_with("Rejected")));
        // Stopped after two acceptances, so the weight-3 edge was never considered.
        assert_eq!(rec.final_payload().unwrap().candidate_edges.len(), 1);

        let g = graph(3, false, &[(0, 1, 1), (0, 1, 1), (1, 2, 2)]);
        let rec = kruskal(&g);
        assert_eq!(rec.final_payload().unwrap().rejected_edges.len(), 1);
    }

    #[test]
    fn disconnected_graph_yields_forest() {
        let g = graph(4, false, &[(0, 1, 1), (2, 3, 1)]);
        let rec = kruskal(&g);
        assert!(rec.last().unwrap().status.starts_with("Graph is disconnected"));
        assert_eq!(rec.final_payload().unwrap().total_weight, Some(2));
    }
}
