//! Runs the adapter for an [`AlgorithmId`] against an [`AlgorithmInput`].
//!
//! This is the only place input misuse is checked: the wrong input kind,
//! a missing target or source, or a graph whose ids do not line up. The
//! adapters below it assume well-formed input.

use algoviz_core::{BinaryTree, Frame, Graph, NodeId};

use crate::backtracking::{nqueens, rat_maze, subset_sum, sudoku};
use crate::dp::{fibonacci, knapsack, lcs, lis, matrix_chain};
use crate::error::AlgorithmError;
use crate::graph::{
    bellman_ford, bfs, detect_cycle, dfs, dijkstra, kruskal, prim, topological_sort,
};
use crate::input::AlgorithmInput;
use crate::recording::Recording;
use crate::registry::AlgorithmId;
use crate::searching::{binary_search, linear_search};
use crate::sorting::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
};
use crate::tree::{avl_insert, bst_delete, bst_insert, bst_search, traverse, TraversalOrder};

fn require<T>(
    algorithm: AlgorithmId,
    value: Option<T>,
    parameter: &'static str,
) -> Result<T, AlgorithmError> {
    value.ok_or(AlgorithmError::MissingParameter {
        algorithm,
        parameter,
    })
}

fn check_node(graph: &Graph, id: NodeId) -> Result<NodeId, AlgorithmError> {
    match graph.node(id) {
        Some(_) => Ok(id),
        None => Err(algoviz_core::CoreError::NodeNotFound { id }.into()),
    }
}

/// Records `algorithm` on `input`, converting payloads into [`Frame`]s.
pub fn record(
    algorithm: AlgorithmId,
    input: &AlgorithmInput,
) -> Result<Recording<Frame>, AlgorithmError> {
    use AlgorithmId as A;
    use AlgorithmInput as I;

    let recording = match (algorithm, input) {
        (A::LinearSearch, I::Array { values, target }) => {
            let target = require(algorithm, *target, "target")?;
            linear_search(values, target).map_payload(Frame::from)
        }
        (A::BinarySearch, I::Array { values, target }) => {
            let target = require(algorithm, *target, "target")?;
            binary_search(values, target).map_payload(Frame::from)
        }
        (A::BubbleSort, I::Array { values, .. }) => bubble_sort(values).map_payload(Frame::from),
        (A::SelectionSort, I::Array { values, .. }) => {
            selection_sort(values).map_payload(Frame::from)
        }
        (A::InsertionSort, I::Array { values, .. }) => {
            insertion_sort(values).map_payload(Frame::from)
        }
        (A::MergeSort, I::Array { values, .. }) => merge_sort(values).map_payload(Frame::from),
        (A::QuickSort, I::Array { values, .. }) => quick_sort(values).map_payload(Frame::from),
        (A::HeapSort, I::Array { values, .. }) => heap_sort(values).map_payload(Frame::from),

        (
            _,
            I::Graph {
                graph,
                source,
                destination,
            },
        ) if input_matches(algorithm, input) => {
            graph.validate()?;
            record_graph(algorithm, graph, *source, *destination)?
        }

        (_, I::Tree { values, target }) if input_matches(algorithm, input) => {
            let tree = BinaryTree::from_values(values);
            record_tree(algorithm, &tree, *target)?
        }

        (A::Fibonacci, I::Fibonacci { n }) => fibonacci(*n).map_payload(Frame::from),
        (A::Lcs, I::Lcs { first, second }) => lcs(first, second).map_payload(Frame::from),
        (
            A::Knapsack,
            I::Knapsack {
                weights,
                values,
                capacity,
            },
        ) => knapsack(weights, values, *capacity).map_payload(Frame::from),
        (A::Lis, I::Sequence { values }) => lis(values).map_payload(Frame::from),
        (A::MatrixChain, I::MatrixChain { dims }) => matrix_chain(dims).map_payload(Frame::from),
        (A::NQueens, I::NQueens { n }) => nqueens(*n).map_payload(Frame::from),
        (A::Sudoku, I::Sudoku { board }) => sudoku(board).map_payload(Frame::from),
        (A::RatMaze, I::Maze { grid }) => rat_maze(grid).map_payload(Frame::from),
        (A::SubsetSum, I::SubsetSum { nums, target }) => {
            subset_sum(nums, *target).map_payload(Frame::from)
        }

        _ => {
            return Err(AlgorithmError::InputMismatch {
                algorithm,
                expected: AlgorithmInput::expected_kind(algorithm),
                got: input.kind_name(),
            })
        }
    };
    Ok(recording)
}

fn input_matches(algorithm: AlgorithmId, input: &AlgorithmInput) -> bool {
    AlgorithmInput::expected_kind(algorithm) == input.kind_name()
}

fn record_graph(
    algorithm: AlgorithmId,
    graph: &Graph,
    source: Option<NodeId>,
    destination: Option<NodeId>,
) -> Result<Recording<Frame>, AlgorithmError> {
    let info = algorithm.info();
    let source = if info.needs_source {
        Some(check_node(graph, require(algorithm, source, "source node")?)?)
    } else {
        source.map(|s| check_node(graph, s)).transpose()?
    };
    let destination = destination.map(|d| check_node(graph, d)).transpose()?;
    // Prim and cycle detection start from the first node unless told otherwise.
    let start = || check_node(graph, source.unwrap_or(NodeId(0)));

    let recording = match algorithm {
        AlgorithmId::Bfs => bfs(graph, start()?),
        AlgorithmId::Dfs => dfs(graph, start()?),
        AlgorithmId::Dijkstra => dijkstra(graph, start()?, destination),
        AlgorithmId::BellmanFord => bellman_ford(graph, start()?, destination),
        AlgorithmId::Kruskal => kruskal(graph),
        AlgorithmId::Prim => prim(graph, start()?),
        AlgorithmId::TopologicalSort => topological_sort(graph),
        AlgorithmId::CycleDetection => detect_cycle(graph, start()?),
        _ => {
            return Err(AlgorithmError::InputMismatch {
                algorithm,
                expected: AlgorithmInput::expected_kind(algorithm),
                got: "graph",
            })
        }
    };
    Ok(recording.map_payload(Frame::from))
}

fn record_tree(
    algorithm: AlgorithmId,
    tree: &BinaryTree,
    target: Option<i64>,
) -> Result<Recording<Frame>, AlgorithmError> {
    let target = || require(algorithm, target, "target");
    let recording = match algorithm {
        AlgorithmId::BstSearch => bst_search(tree, target()?),
        AlgorithmId::BstInsert => bst_insert(tree, target()?),
        AlgorithmId::BstDelete => bst_delete(tree, target()?),
        AlgorithmId::AvlInsert => avl_insert(tree, target()?),
        AlgorithmId::InorderTraversal => traverse(tree, TraversalOrder::InOrder),
        AlgorithmId::PreorderTraversal => traverse(tree, TraversalOrder::PreOrder),
        AlgorithmId::PostorderTraversal => traverse(tree, TraversalOrder::PostOrder),
        _ => {
            return Err(AlgorithmError::InputMismatch {
                algorithm,
                expected: AlgorithmInput::expected_kind(algorithm),
                got: "tree",
            })
        }
    };
    Ok(recording.map_payload(Frame::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::Outcome;

    fn array(values: &[i64], target: Option<i64>) -> AlgorithmInput {
        AlgorithmInput::Array {
            values: values.to_vec(),
            target,
        }
    }

    #[test]
    fn sorts_accept_arrays_without_target() {
        let rec = record(AlgorithmId::QuickSort, &array(&[3, 1, 2], None)).unwrap();
        let last = rec.final_payload().unwrap().as_array().unwrap();
        assert_eq!(last.array, vec![1, 2, 3]);
    }

    #[test]
    fn searches_require_target() {
        let err = record(AlgorithmId::LinearSearch, &array(&[1, 2], None)).unwrap_err();
        assert!(matches!(
            err,
            AlgorithmError::MissingParameter {
                algorithm: AlgorithmId::LinearSearch,
                parameter: "target"
            }
        ));
    }

    #[test]
    fn wrong_input_kind_is_reported() {
        let err = record(AlgorithmId::Bfs, &array(&[1], None)).unwrap_err();
        assert_eq!(err.to_string(), "bfs expects graph input, got array");

        let err = record(AlgorithmId::BubbleSort, &AlgorithmInput::NQueens { n: 4 }).unwrap_err();
        assert!(matches!(err, AlgorithmError::InputMismatch { got: "n_queens", .. }));
    }

    #[test]
    fn graph_source_is_required_and_checked() {
        let graph = Graph::sample();
        let input = |source| AlgorithmInput::Graph {
            graph: graph.clone(),
            source,
            destination: None,
        };
        assert!(matches!(
            record(AlgorithmId::Dijkstra, &input(None)),
            Err(AlgorithmError::MissingParameter { .. })
        ));
        assert!(matches!(
            record(AlgorithmId::Bfs, &input(Some(NodeId(42)))),
            Err(AlgorithmError::Core(_))
        ));
        assert!(record(AlgorithmId::Bfs, &input(Some(NodeId(0)))).is_ok());
        // Prim and cycle detection fall back to the first node.
        assert!(record(AlgorithmId::Prim, &input(None)).is_ok());
        assert!(record(AlgorithmId::CycleDetection, &input(None)).is_ok());
    }

    #[test]
    fn topological_sort_on_undirected_graph_is_unsatisfiable() {
        let input = AlgorithmInput::Graph {
            graph: Graph::sample(),
            source: None,
            destination: None,
        };
        let rec = record(AlgorithmId::TopologicalSort, &input).unwrap();
        assert_eq!(rec.outcome, Outcome::Unsatisfiable);
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn tree_inputs_build_a_bst_first() {
        let input = AlgorithmInput::Tree {
            values: vec![50, 30, 70, 30],
            target: None,
        };
        let rec = record(AlgorithmId::InorderTraversal, &input).unwrap();
        let last = rec.final_payload().unwrap().as_tree().unwrap();
        assert_eq!(last.output, vec![30, 50, 70]);

        assert!(matches!(
            record(AlgorithmId::BstSearch, &input),
            Err(AlgorithmError::MissingParameter { .. })
        ));
    }

    #[test]
    fn every_algorithm_rejects_a_foreign_input() {
        let foreign = AlgorithmInput::Fibonacci { n: 3 };
        for id in AlgorithmId::ALL {
            if id == AlgorithmId::Fibonacci {
                assert!(record(id, &foreign).is_ok());
            } else {
                assert!(record(id, &foreign).is_err(), "{id}");
            }
        }
    }
}
