//! Frame payloads: the snapshot types carried by every [`Step`](crate::step::Step).
//!
//! Each algorithm family has its own frame type. [`Frame`] unifies them so
//! that a single controller and a single sink type can replay any
//! recording. All frames are plain owned data: cloning one is a deep copy.
//!
//! Fields that an algorithm does not use are left at their defaults
//! (empty collections, `None`), so renderers can draw any frame without
//! knowing which algorithm produced it.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::id::{EdgeId, NodeId};
use crate::tree::BinaryTree;

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// A row/column position in a 2-D table, board, or maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub const fn new(row: usize, col: usize) -> Self {
        GridPos { row, col }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Arrays: searching and sorting
// ---------------------------------------------------------------------------

/// The active `[low, high]` interval of a binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchWindow {
    pub low: usize,
    pub mid: usize,
    pub high: usize,
}

/// Snapshot of an array algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayFrame {
    pub array: Vec<i64>,
    /// Indices being compared in this step.
    pub compared: SmallVec<[usize; 2]>,
    /// Indices that were just swapped, shifted, or written.
    pub swapped: SmallVec<[usize; 2]>,
    /// Indices known to be in their final position.
    pub sorted: Vec<usize>,
    pub pivot: Option<usize>,
    /// Insertion sort key position.
    pub key_index: Option<usize>,
    /// Selection sort running minimum.
    pub min_index: Option<usize>,
    /// Inclusive sub-range being worked on (merge and quick sort).
    pub range: Option<(usize, usize)>,
    pub window: Option<SearchWindow>,
    /// Index of the element currently examined by a search.
    pub current: Option<usize>,
    /// Indices a search has already ruled out.
    pub examined: Vec<usize>,
    pub found: Option<usize>,
    pub target: Option<i64>,
}

impl ArrayFrame {
    pub fn new(array: &[i64]) -> Self {
        ArrayFrame {
            array: array.to_vec(),
            ..Default::default()
        }
    }

    pub fn comparing(mut self, i: usize, j: usize) -> Self {
        self.compared = SmallVec::from_buf([i, j]);
        self
    }

    pub fn swapping(mut self, i: usize, j: usize) -> Self {
        self.swapped = SmallVec::from_buf([i, j]);
        self
    }

    /// Marks a single written index (merge writes, insertion shifts).
    pub fn writing(mut self, i: usize) -> Self {
        self.swapped = SmallVec::new();
        self.swapped.push(i);
        self
    }

    pub fn with_sorted(mut self, sorted: impl IntoIterator<Item = usize>) -> Self {
        self.sorted = sorted.into_iter().collect();
        self
    }

    pub fn all_sorted(mut self) -> Self {
        self.sorted = (0..self.array.len()).collect();
        self
    }

    pub fn with_pivot(mut self, pivot: usize) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn with_key(mut self, key: usize) -> Self {
        self.key_index = Some(key);
        self
    }

    pub fn with_min(mut self, min: usize) -> Self {
        self.min_index = Some(min);
        self
    }

    pub fn with_range(mut self, low: usize, high: usize) -> Self {
        self.range = Some((low, high));
        self
    }

    pub fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }
}

// ---------------------------------------------------------------------------
// Graphs
// ---------------------------------------------------------------------------

/// A tentative or final shortest-path distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    Finite(i64),
    Unreachable,
    /// The node is reachable through a negative-weight cycle, so it has no
    /// shortest distance.
    NegativeCycle,
}

impl Distance {
    pub fn finite(self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => write!(f, "∞"),
            Distance::NegativeCycle => write!(f, "-∞"),
        }
    }
}

/// The pending-work structure of a traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum Frontier {
    #[default]
    None,
    /// BFS queue, front first.
    Queue(Vec<NodeId>),
    /// DFS stack, top last.
    Stack(Vec<NodeId>),
    /// Priority queue entries `(node, key)`, smallest key first.
    Priority(Vec<(NodeId, i64)>),
}

/// Snapshot of a graph algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFrame {
    pub current_node: Option<NodeId>,
    pub current_edge: Option<EdgeId>,
    pub visited_nodes: IndexSet<NodeId>,
    pub visited_edges: IndexSet<EdgeId>,
    /// Order in which nodes were first reached. Tracked separately from
    /// `visited_nodes` because some algorithms mark before they visit.
    pub visit_order: Vec<NodeId>,
    pub frontier: Frontier,
    /// Per-node distances, indexed by node id. Empty when unused.
    pub distances: Vec<Distance>,
    /// Per-node in-degrees (topological sort). Empty when unused.
    pub in_degrees: Vec<usize>,
    /// A highlighted path or cycle.
    pub path_nodes: Vec<NodeId>,
    pub path_edges: Vec<EdgeId>,
    pub mst_edges: Vec<EdgeId>,
    pub rejected_edges: Vec<EdgeId>,
    /// Edges under consideration but not yet decided.
    pub candidate_edges: Vec<EdgeId>,
    pub total_weight: Option<i64>,
}

impl GraphFrame {
    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(node.index()).copied()
    }
}

// ---------------------------------------------------------------------------
// Trees
// ---------------------------------------------------------------------------

/// AVL rebalancing case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    LeftLeft,
    RightRight,
    LeftRight,
    RightLeft,
}

impl Rotation {
    pub fn short_name(self) -> &'static str {
        match self {
            Rotation::LeftLeft => "LL",
            Rotation::RightRight => "RR",
            Rotation::LeftRight => "LR",
            Rotation::RightLeft => "RL",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Snapshot of a tree algorithm.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeFrame {
    pub tree: BinaryTree,
    /// Value of the node being visited.
    pub current: Option<i64>,
    /// Values visited so far, in visit order.
    pub path: Vec<i64>,
    /// Traversal output, or the node a search ended on.
    pub output: Vec<i64>,
    pub found: Option<i64>,
    /// A secondary node of interest (in-order successor, new leaf).
    pub highlight: Option<i64>,
    pub rotation: Option<Rotation>,
}

impl TreeFrame {
    pub fn new(tree: &BinaryTree) -> Self {
        TreeFrame {
            tree: tree.clone(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Dynamic programming
// ---------------------------------------------------------------------------

/// A DP table in one of three shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "cells", rename_all = "snake_case")]
pub enum DpTable {
    /// One row, `None` for cells not yet computed.
    Linear(Vec<Option<i64>>),
    /// Rows by columns.
    Grid(Vec<Vec<Option<i64>>>),
    /// Sparse memo keyed by subproblem. Serialized as `[key, value]` pairs
    /// so it survives the buffering done for the internally tagged
    /// [`Frame`].
    Keyed(#[serde(with = "memo_entries")] BTreeMap<u64, i64>),
}

mod memo_entries {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(memo: &BTreeMap<u64, i64>, s: S) -> Result<S::Ok, S::Error> {
        let entries: Vec<(u64, i64)> = memo.iter().map(|(&k, &v)| (k, v)).collect();
        entries.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeMap<u64, i64>, D::Error> {
        let entries = Vec::<(u64, i64)>::deserialize(d)?;
        Ok(entries.into_iter().collect())
    }
}

impl DpTable {
    pub fn grid(rows: usize, cols: usize, fill: Option<i64>) -> Self {
        DpTable::Grid(vec![vec![fill; cols]; rows])
    }

    /// Reads a cell. Linear tables ignore `row`.
    pub fn get(&self, pos: GridPos) -> Option<i64> {
        match self {
            DpTable::Linear(cells) => cells.get(pos.col).copied().flatten(),
            DpTable::Grid(rows) => rows.get(pos.row)?.get(pos.col).copied().flatten(),
            DpTable::Keyed(memo) => memo.get(&(pos.col as u64)).copied(),
        }
    }

    /// Writes a cell, ignoring positions outside the table.
    pub fn set(&mut self, pos: GridPos, value: i64) {
        match self {
            DpTable::Linear(cells) => {
                if let Some(slot) = cells.get_mut(pos.col) {
                    *slot = Some(value);
                }
            }
            DpTable::Grid(rows) => {
                if let Some(slot) = rows.get_mut(pos.row).and_then(|r| r.get_mut(pos.col)) {
                    *slot = Some(value);
                }
            }
            DpTable::Keyed(memo) => {
                memo.insert(pos.col as u64, value);
            }
        }
    }
}

/// Snapshot of a dynamic-programming algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpFrame {
    pub table: DpTable,
    /// Cell being computed or read.
    pub current: Option<GridPos>,
    /// Cells the current value is derived from.
    pub dependencies: Vec<GridPos>,
    /// Cells on the reconstructed answer (LCS backtrace, LIS members).
    pub highlight: Vec<GridPos>,
    /// Matrix chain split point.
    pub split: Option<usize>,
    /// Reconstructed values (LIS members, chosen knapsack items).
    pub sequence: Vec<i64>,
    /// Reconstructed text (LCS).
    pub text: String,
    pub result: Option<i64>,
}

impl DpFrame {
    pub fn new(table: DpTable) -> Self {
        DpFrame {
            table,
            current: None,
            dependencies: Vec::new(),
            highlight: Vec::new(),
            split: None,
            sequence: Vec::new(),
            text: String::new(),
            result: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Backtracking
// ---------------------------------------------------------------------------

/// Snapshot of a board search (N-Queens, Sudoku).
///
/// For N-Queens a cell is `1` when it holds a queen. For Sudoku it holds
/// the digit, `0` meaning empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardFrame {
    pub cells: Vec<Vec<u8>>,
    pub current: Option<GridPos>,
    /// Cells that conflict with `current`.
    pub conflicts: Vec<GridPos>,
    /// Cells fixed by the puzzle (Sudoku givens).
    pub fixed: Vec<GridPos>,
    pub solutions: usize,
}

/// Snapshot of a rat-in-a-maze search. `0` is open, `1` is a wall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeFrame {
    pub grid: Vec<Vec<u8>>,
    /// Cells on the current path, start first.
    pub path: Vec<GridPos>,
    pub current: Option<GridPos>,
    /// Cells abandoned after backtracking.
    pub dead_ends: Vec<GridPos>,
    pub solutions: usize,
}

/// Snapshot of a subset-sum search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetFrame {
    /// Candidate numbers, ascending.
    pub nums: Vec<i64>,
    /// Indices of the numbers in the current partial subset.
    pub chosen: Vec<usize>,
    pub current: Option<usize>,
    pub sum: i64,
    pub target: i64,
    /// Every subset accepted so far.
    pub solutions: Vec<Vec<i64>>,
}

impl SubsetFrame {
    pub fn chosen_values(&self) -> Vec<i64> {
        self.chosen
            .iter()
            .filter_map(|&i| self.nums.get(i).copied())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// Any payload an adapter can record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Frame {
    Array(ArrayFrame),
    Graph(GraphFrame),
    Tree(TreeFrame),
    Dp(DpFrame),
    Board(BoardFrame),
    Maze(MazeFrame),
    Subset(SubsetFrame),
}

macro_rules! frame_variant {
    ($variant:ident, $ty:ty, $as_fn:ident) => {
        impl From<$ty> for Frame {
            fn from(frame: $ty) -> Self {
                Frame::$variant(frame)
            }
        }

        impl Frame {
            pub fn $as_fn(&self) -> Option<&$ty> {
                match self {
                    Frame::$variant(frame) => Some(frame),
                    _ => None,
                }
            }
        }
    };
}

frame_variant!(Array, ArrayFrame, as_array);
frame_variant!(Graph, GraphFrame, as_graph);
frame_variant!(Tree, TreeFrame, as_tree);
frame_variant!(Dp, DpFrame, as_dp);
frame_variant!(Board, BoardFrame, as_board);
frame_variant!(Maze, MazeFrame, as_maze);
frame_variant!(Subset, SubsetFrame, as_subset);

impl Frame {
    pub fn kind(&self) -> &'static str {
        match self {
            Frame::Array(_) => "array",
            Frame::Graph(_) => "graph",
            Frame::Tree(_) => "tree",
            Frame::Dp(_) => "dp",
            Frame::Board(_) => "board",
            Frame::Maze(_) => "maze",
            Frame::Subset(_) => "subset",
        }
    }
}
