//! Algorithm inputs.
//!
//! One variant per input shape. Several algorithms share a shape (every
//! sort takes an `Array`, every graph algorithm a `Graph`); [`record`]
//! pairs an [`AlgorithmId`] with its input and reports a typed error when
//! they do not fit together.
//!
//! [`record`]: crate::dispatch::record

use algoviz_core::{Graph, NodeId};
use serde::{Deserialize, Serialize};

use crate::registry::AlgorithmId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmInput {
    /// Searching and sorting. `target` is required by the searches.
    Array {
        values: Vec<i64>,
        #[serde(default)]
        target: Option<i64>,
    },
    Graph {
        graph: Graph,
        #[serde(default)]
        source: Option<NodeId>,
        #[serde(default)]
        destination: Option<NodeId>,
    },
    /// Values are inserted into an empty BST in order, duplicates ignored.
    /// `target` is the value searched for, inserted, or deleted.
    Tree {
        values: Vec<i64>,
        #[serde(default)]
        target: Option<i64>,
    },
    Fibonacci {
        n: u64,
    },
    Lcs {
        first: String,
        second: String,
    },
    Knapsack {
        weights: Vec<usize>,
        values: Vec<i64>,
        capacity: usize,
    },
    /// Longest increasing subsequence.
    Sequence {
        values: Vec<i64>,
    },
    MatrixChain {
        dims: Vec<i64>,
    },
    NQueens {
        n: usize,
    },
    /// 9x9, `0` for empty cells.
    Sudoku {
        board: Vec<Vec<u8>>,
    },
    /// `0` open, `1` wall.
    Maze {
        grid: Vec<Vec<u8>>,
    },
    SubsetSum {
        nums: Vec<i64>,
        target: i64,
    },
}

impl AlgorithmInput {
    /// The serialized `kind` tag of this input.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AlgorithmInput::Array { .. } => "array",
            AlgorithmInput::Graph { .. } => "graph",
            AlgorithmInput::Tree { .. } => "tree",
            AlgorithmInput::Fibonacci { .. } => "fibonacci",
            AlgorithmInput::Lcs { .. } => "lcs",
            AlgorithmInput::Knapsack { .. } => "knapsack",
            AlgorithmInput::Sequence { .. } => "sequence",
            AlgorithmInput::MatrixChain { .. } => "matrix_chain",
            AlgorithmInput::NQueens { .. } => "n_queens",
            AlgorithmInput::Sudoku { .. } => "sudoku",
            AlgorithmInput::Maze { .. } => "maze",
            AlgorithmInput::SubsetSum { .. } => "subset_sum",
        }
    }

    /// The input kind `id` consumes.
    pub fn expected_kind(id: AlgorithmId) -> &'static str {
        use crate::registry::Category;
        match id.category() {
            Category::Searching | Category::Sorting => "array",
            Category::Graph => "graph",
            Category::Tree => "tree",
            Category::DynamicProgramming | Category::Backtracking => match id {
                AlgorithmId::Fibonacci => "fibonacci",
                AlgorithmId::Lcs => "lcs",
                AlgorithmId::Knapsack => "knapsack",
                AlgorithmId::Lis => "sequence",
                AlgorithmId::MatrixChain => "matrix_chain",
                AlgorithmId::NQueens => "n_queens",
                AlgorithmId::Sudoku => "sudoku",
                AlgorithmId::RatMaze => "maze",
                _ => "subset_sum",
            },
        }
    }

    /// The search target or tree operand, for inputs that carry one.
    pub fn target(&self) -> Option<i64> {
        match self {
            AlgorithmInput::Array { target, .. } | AlgorithmInput::Tree { target, .. } => *target,
            AlgorithmInput::SubsetSum { target, .. } => Some(*target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_match_serde_tags() {
        let inputs = [
            AlgorithmInput::Array {
                values: vec![1],
                target: None,
            },
            AlgorithmInput::Graph {
                graph: Graph::sample(),
                source: Some(NodeId(0)),
                destination: None,
            },
            AlgorithmInput::Fibonacci { n: 5 },
            AlgorithmInput::MatrixChain { dims: vec![1, 2] },
            AlgorithmInput::NQueens { n: 4 },
            AlgorithmInput::SubsetSum {
                nums: vec![1],
                target: 1,
            },
        ];
        for input in inputs {
            let json = serde_json::to_value(&input).unwrap();
            assert_eq!(json["kind"], input.kind_name());
        }
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let input: AlgorithmInput =
            serde_json::from_str(r#"{"kind":"array","values":[3,1,2]}"#).unwrap();
        assert_eq!(
            input,
            AlgorithmInput::Array {
                values: vec![3, 1, 2],
                target: None
            }
        );
    }

    #[test]
    fn expected_kind_covers_every_algorithm() {
        assert_eq!(AlgorithmInput::expected_kind(AlgorithmId::HeapSort), "array");
        assert_eq!(AlgorithmInput::expected_kind(AlgorithmId::Prim), "graph");
        assert_eq!(AlgorithmInput::expected_kind(AlgorithmId::Lis), "sequence");
        assert_eq!(AlgorithmInput::expected_kind(AlgorithmId::SubsetSum), "subset_sum");
        assert_eq!(AlgorithmInput::expected_kind(AlgorithmId::NQueens), "n_queens");
    }
}
