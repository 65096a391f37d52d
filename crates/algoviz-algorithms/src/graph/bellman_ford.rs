//! Bellman-Ford shortest paths.
//!
//! Runs at most `|V| - 1` relaxation rounds, stopping early after a round
//! with no relaxation, then makes one detection pass. If any edge can
//! still be relaxed, every node reachable from it is marked
//! [`Distance::NegativeCycle`] and the run ends with a negative-cycle
//! report, which is distinct from "destination unreachable".
//!
//! Undirected edges are relaxed in both directions, so a single negative
//! undirected edge is already a negative cycle.

use std::collections::VecDeque;

use algoviz_core::{Distance, EdgeId, Graph, GraphEdge, GraphFrame, NodeId, StepLog};

use super::{distance_summary, edge_label, walk_back};
use crate::recording::Recording;

/// Directed arcs `(from, to, edge)` in edge order.
fn arcs(graph: &Graph) -> Vec<(NodeId, NodeId, &GraphEdge)> {
    let mut arcs = Vec::with_capacity(graph.edge_count() * 2);
    for edge in &graph.edges {
        arcs.push((edge.source, edge.target, edge));
        if !graph.directed && !edge.is_self_loop() {
            arcs.push((edge.target, edge.source, edge));
        }
    }
    arcs
}

fn relaxed_distance(distances: &[Distance], from: NodeId, to: NodeId, weight: i64) -> Option<i64> {
    let base = distances[from.index()].finite()?;
    let candidate = base + weight;
    match distances[to.index()] {
        Distance::Finite(current) if candidate >= current => None,
        _ => Some(candidate),
    }
}

pub fn bellman_ford(
    graph: &Graph,
    source: NodeId,
    destination: Option<NodeId>,
) -> Recording<GraphFrame> {
    let n = graph.node_count();
    let arcs = arcs(graph);
    let mut log = StepLog::new();
    let mut frame = GraphFrame {
        distances: vec![Distance::Unreachable; n],
        ..Default::default()
    };
    let mut predecessors: Vec<Option<(NodeId, EdgeId)>> = vec![None; n];

    frame.distances[source.index()] = Distance::Finite(0);
    frame.current_node = Some(source);
    log.record(
        format!(
            "Initializing distances: {} = 0, others = ∞",
            graph.label(source)
        ),
        frame.clone(),
    );

    let rounds = n.saturating_sub(1);
    for round in 1..=rounds {
        frame.current_node = None;
        frame.current_edge = None;
        log.record(format!("Starting round {round}/{rounds}"), frame.clone());

        let mut relaxed = 0;
        for &(from, to, edge) in &arcs {
            let Some(candidate) = relaxed_distance(&frame.distances, from, to, edge.weight) else {
                continue;
            };
            let previous = frame.distances[to.index()];
            frame.distances[to.index()] = Distance::Finite(candidate);
            predecessors[to.index()] = Some((from, edge.id));
            frame.visited_edges.insert(edge.id);
            frame.current_edge = Some(edge.id);
            frame.current_node = Some(to);
            relaxed += 1;
            log.record(
                format!(
                    "Relaxed edge {}: {}\nUpdated {} from {previous} to {candidate}",
                    edge.id,
                    edge_label(graph, from, to),
                    graph.label(to)
                ),
                frame.clone(),
            );
        }

        if relaxed == 0 {
            frame.current_node = None;
            frame.current_edge = None;
            log.record(
                format!("No updates in round {round}, terminating early"),
                frame.clone(),
            );
            break;
        }
    }

    frame.current_node = None;
    frame.current_edge = None;
    log.record("Checking for negative weight cycles...", frame.clone());

    let witnesses: Vec<(NodeId, NodeId, EdgeId)> = arcs
        .iter()
        .filter(|(from, to, edge)| relaxed_distance(&frame.distances, *from, *to, edge.weight).is_some())
        .map(|(from, to, edge)| (*from, *to, edge.id))
        .collect();

    if let Some(&(from, to, edge)) = witnesses.first() {
        // Everything reachable from a still-relaxable node has no shortest
        // distance.
        let mut queue: VecDeque<NodeId> = witnesses.iter().map(|w| w.1).collect();
        while let Some(node) = queue.pop_front() {
            if frame.distances[node.index()] == Distance::NegativeCycle {
                continue;
            }
            frame.distances[node.index()] = Distance::NegativeCycle;
            for neighbor in graph.neighbors(node) {
                if frame.distances[neighbor.node.index()] != Distance::NegativeCycle {
                    queue.push_back(neighbor.node);
                }
            }
        }
        frame.visited_edges.insert(edge);
        frame.current_edge = Some(edge);
        log.record(
            format!(
                "Negative cycle detected at edge {edge}: {}\nDistances through the cycle are unbounded",
                edge_label(graph, from, to)
            ),
            frame,
        );
        return Recording::completed(log);
    }

    let status = match destination {
        Some(dest) => match frame.distances[dest.index()] {
            Distance::Finite(total) => {
                let (nodes, edges) = walk_back(&predecessors, dest);
                let route = graph.path_labels(&nodes);
                frame.path_nodes = nodes;
                frame.path_edges = edges;
                frame.total_weight = Some(total);
                format!(
                    "Shortest path found\nTotal distance to {}: {total}\nPath: {route}",
                    graph.label(dest)
                )
            }
            _ => format!(
                "Node {} is unreachable from {}",
                graph.label(dest),
                graph.label(source)
            ),
        },
        None => format!(
            "Bellman-Ford completed. Distances: {}",
            distance_summary(graph, &frame.distances)
        ),
    };
    log.record(status, frame);
    Recording::completed(log)
}
