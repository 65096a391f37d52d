//! Dijkstra's shortest paths with a binary heap.
//!
//! Edge weights must be non-negative. One step per node settled and one per
//! edge relaxation attempt. When a destination is given the search stops
//! as soon as it is settled.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use algoviz_core::{Distance, EdgeId, Frontier, Graph, GraphFrame, NodeId, StepLog};

use super::{distance_summary, edge_label, walk_back};
use crate::recording::Recording;

fn priority_frontier(heap: &BinaryHeap<Reverse<(i64, NodeId)>>) -> Frontier {
    let mut items: Vec<(NodeId, i64)> = heap.iter().map(|Reverse((d, n))| (*n, *d)).collect();
    items.sort_by_key(|&(n, d)| (d, n));
    Frontier::Priority(items)
}

pub fn dijkstra(graph: &Graph, source: NodeId, destination: Option<NodeId>) -> Recording<GraphFrame> {
    let n = graph.node_count();
    let mut log = StepLog::new();
    let mut frame = GraphFrame {
        distances: vec![Distance::Unreachable; n],
        ..Default::default()
    };
    let mut predecessors: Vec<Option<(NodeId, EdgeId)>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    frame.distances[source.index()] = Distance::Finite(0);
    heap.push(Reverse((0, source)));
    frame.frontier = priority_frontier(&heap);
    let goal = match destination {
        Some(dest) => format!(" to {}", graph.label(dest)),
        None => String::new(),
    };
    log.record(
        format!("Starting Dijkstra from {}{goal}", graph.label(source)),
        frame.clone(),
    );

    while let Some(Reverse((dist, node))) = heap.pop() {
        if frame.visited_nodes.contains(&node) {
            continue;
        }
        frame.visited_nodes.insert(node);
        frame.visit_order.push(node);
        frame.current_node = Some(node);
        frame.current_edge = None;
        frame.frontier = priority_frontier(&heap);
        log.record(
            format!("Settled {} with distance {dist}", graph.label(node)),
            frame.clone(),
        );

        if destination == Some(node) {
            break;
        }

        for neighbor in graph.neighbors(node) {
            if frame.visited_nodes.contains(&neighbor.node) {
                continue;
            }
            frame.current_edge = Some(neighbor.edge);
            let candidate = dist + neighbor.weight;
            let slot = neighbor.node.index();
            let label = edge_label(graph, node, neighbor.node);
            let improves = match frame.distances[slot] {
                Distance::Finite(current) => candidate < current,
                _ => true,
            };
            if improves {
                frame.distances[slot] = Distance::Finite(candidate);
                predecessors[slot] = Some((node, neighbor.edge));
                frame.visited_edges.insert(neighbor.edge);
                heap.push(Reverse((candidate, neighbor.node)));
                frame.frontier = priority_frontier(&heap);
                log.record(
                    format!(
                        "Relaxed {label}: {} distance updated to {candidate}",
                        graph.label(neighbor.node)
                    ),
                    frame.clone(),
                );
            } else {
                log.record(
                    format!(
                        "Edge {label} does not improve {} ({candidate} >= {})",
                        graph.label(neighbor.node),
                        frame.distances[slot]
                    ),
                    frame.clone(),
                );
            }
        }
    }

    frame.current_node = None;
    frame.current_edge = None;
    frame.frontier = Frontier::None;

    let status = match destination {
        Some(dest) => match frame.distances[dest.index()] {
            Distance::Finite(total) => {
                let (nodes, edges) = walk_back(&predecessors, dest);
                let route = graph.path_labels(&nodes);
                frame.path_nodes = nodes;
                frame.path_edges = edges;
                frame.total_weight = Some(total);
                format!(
                    "Shortest path to {}: {total} ({route})",
                    graph.label(dest)
                )
            }
            _ => format!(
                "No path from {} to {}",
                graph.label(source),
                graph.label(dest)
            ),
        },
        None => format!(
            "Dijkstra completed. Distances: {}",
            distance_summary(graph, &frame.distances)
        ),
    };
    log.record(status, frame);
    Recording::completed(log)
}
