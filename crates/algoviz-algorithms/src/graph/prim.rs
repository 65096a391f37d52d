//! Prim's minimum spanning tree grown from the source node.
//!
//! One step per key update and one per tree growth. Stale heap entries are
//! discarded silently. On disconnected input only the source's component
//! is spanned.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use algoviz_core::{Distance, EdgeId, Frontier, Graph, GraphFrame, NodeId, StepLog};

use crate::recording::Recording;

pub fn prim(graph: &Graph, source: NodeId) -> Recording<GraphFrame> {
    let n = graph.node_count();
    let mut log = StepLog::new();
    let mut frame = GraphFrame {
        distances: vec![Distance::Unreachable; n],
        ..Default::default()
    };
    // Cheapest known edge into each node from the tree.
    let mut best_edge: Vec<Option<EdgeId>> = vec![None; n];
    let mut heap: BinaryHeap<Reverse<(i64, NodeId)>> = BinaryHeap::new();
    let mut total = 0;

    frame.distances[source.index()] = Distance::Finite(0);
    heap.push(Reverse((0, source)));

    while let Some(Reverse((key, node))) = heap.pop() {
        if frame.visited_nodes.contains(&node) {
            continue;
        }
        frame.visited_nodes.insert(node);
        frame.visit_order.push(node);
        frame.current_node = Some(node);

        match best_edge[node.index()] {
            Some(edge) => {
                total += key;
                frame.mst_edges.push(edge);
                frame.candidate_edges.retain(|id| *id != edge);
                frame.current_edge = Some(edge);
                frame.total_weight = Some(total);
                frame.frontier = frontier(&heap);
                log.record(
                    format!(
                        "Added {} to MST via edge {edge} (weight {key}). Total weight: {total}",
                        graph.label(node)
                    ),
                    frame.clone(),
                );
            }
            None => {
                frame.current_edge = None;
                frame.total_weight = Some(0);
                frame.frontier = frontier(&heap);
                log.record(
                    format!("Added {} to MST (key = 0)", graph.label(node)),
                    frame.clone(),
                );
            }
        }

        for neighbor in graph.neighbors(node) {
            let slot = neighbor.node.index();
            if frame.visited_nodes.contains(&neighbor.node) {
                continue;
            }
            let lowers = match frame.distances[slot] {
                Distance::Finite(current) => neighbor.weight < current,
                _ => true,
            };
            if !lowers {
                continue;
            }
            if let Some(old) = best_edge[slot] {
                frame.candidate_edges.retain(|id| *id != old);
            }
            best_edge[slot] = Some(neighbor.edge);
            frame.distances[slot] = Distance::Finite(neighbor.weight);
            frame.candidate_edges.push(neighbor.edge);
            frame.current_edge = Some(neighbor.edge);
            heap.push(Reverse((neighbor.weight, neighbor.node)));
            frame.frontier = frontier(&heap);
            log.record(
                format!(
                    "Key of {} lowered to {} via edge {}",
                    graph.label(neighbor.node),
                    neighbor.weight,
                    neighbor.edge
                ),
                frame.clone(),
            );
        }
    }

    frame.current_node = None;
    frame.current_edge = None;
    frame.frontier = Frontier::None;
    frame.total_weight = Some(total);
    let status = if frame.visited_nodes.len() == n {
        format!("MST complete. Total weight: {total}")
    } else {
        format!(
            "Spanning tree covers {} of {n} nodes (graph is disconnected). Total weight: {total}",
            frame.visited_nodes.len()
        )
    };
    log.record(status, frame);
    Recording::completed(log)
}

fn frontier(heap: &BinaryHeap<Reverse<(i64, NodeId)>>) -> Frontier {
    let mut items: Vec<(NodeId, i64)> = heap.iter().map(|Reverse((k, n))| (*n, *k)).collect();
    items.sort_by_key(|&(n, k)| (k, n));
    Frontier::Priority(items)
}
