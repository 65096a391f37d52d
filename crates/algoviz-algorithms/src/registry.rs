//! The algorithm catalogue: identifiers, categories, and per-algorithm
//! metadata (display name, explanation, complexity, pacing, input needs).
//!
//! Identifiers are the kebab-case names used on the command line and in
//! serialized inputs (`bubble-sort`, `bellman-ford`, `mcm`, ...).

use std::fmt;
use std::str::FromStr;

use algoviz_core::Pace;
use serde::{Deserialize, Serialize};

use crate::error::AlgorithmError;

// ---------------------------------------------------------------------------
// AlgorithmId
// ---------------------------------------------------------------------------

/// Every algorithm the workspace can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AlgorithmId {
    LinearSearch,
    BinarySearch,
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    HeapSort,
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    Kruskal,
    Prim,
    TopologicalSort,
    CycleDetection,
    BstSearch,
    BstInsert,
    BstDelete,
    AvlInsert,
    InorderTraversal,
    PreorderTraversal,
    PostorderTraversal,
    Fibonacci,
    Lcs,
    Knapsack,
    Lis,
    MatrixChain,
    NQueens,
    Sudoku,
    RatMaze,
    SubsetSum,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 32] = [
        AlgorithmId::LinearSearch,
        AlgorithmId::BinarySearch,
        AlgorithmId::BubbleSort,
        AlgorithmId::SelectionSort,
        AlgorithmId::InsertionSort,
        AlgorithmId::MergeSort,
        AlgorithmId::QuickSort,
        AlgorithmId::HeapSort,
        AlgorithmId::Bfs,
        AlgorithmId::Dfs,
        AlgorithmId::Dijkstra,
        AlgorithmId::BellmanFord,
        AlgorithmId::Kruskal,
        AlgorithmId::Prim,
        AlgorithmId::TopologicalSort,
        AlgorithmId::CycleDetection,
        AlgorithmId::BstSearch,
        AlgorithmId::BstInsert,
        AlgorithmId::BstDelete,
        AlgorithmId::AvlInsert,
        AlgorithmId::InorderTraversal,
        AlgorithmId::PreorderTraversal,
        AlgorithmId::PostorderTraversal,
        AlgorithmId::Fibonacci,
        AlgorithmId::Lcs,
        AlgorithmId::Knapsack,
        AlgorithmId::Lis,
        AlgorithmId::MatrixChain,
        AlgorithmId::NQueens,
        AlgorithmId::Sudoku,
        AlgorithmId::RatMaze,
        AlgorithmId::SubsetSum,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmId::LinearSearch => "linear-search",
            AlgorithmId::BinarySearch => "binary-search",
            AlgorithmId::BubbleSort => "bubble-sort",
            AlgorithmId::SelectionSort => "selection-sort",
            AlgorithmId::InsertionSort => "insertion-sort",
            AlgorithmId::MergeSort => "merge-sort",
            AlgorithmId::QuickSort => "quick-sort",
            AlgorithmId::HeapSort => "heap-sort",
            AlgorithmId::Bfs => "bfs",
            AlgorithmId::Dfs => "dfs",
            AlgorithmId::Dijkstra => "dijkstra",
            AlgorithmId::BellmanFord => "bellman-ford",
            AlgorithmId::Kruskal => "kruskal",
            AlgorithmId::Prim => "prim",
            AlgorithmId::TopologicalSort => "topological",
            AlgorithmId::CycleDetection => "cycle",
            AlgorithmId::BstSearch => "bst-search",
            AlgorithmId::BstInsert => "bst-insert",
            AlgorithmId::BstDelete => "bst-delete",
            AlgorithmId::AvlInsert => "avl-insert",
            AlgorithmId::InorderTraversal => "inorder-traversal",
            AlgorithmId::PreorderTraversal => "preorder-traversal",
            AlgorithmId::PostorderTraversal => "postorder-traversal",
            AlgorithmId::Fibonacci => "fibonacci",
            AlgorithmId::Lcs => "lcs",
            AlgorithmId::Knapsack => "knapsack",
            AlgorithmId::Lis => "lis",
            AlgorithmId::MatrixChain => "mcm",
            AlgorithmId::NQueens => "nqueens",
            AlgorithmId::Sudoku => "sudoku",
            AlgorithmId::RatMaze => "ratmaze",
            AlgorithmId::SubsetSum => "subsetsum",
        }
    }

    pub fn category(self) -> Category {
        use AlgorithmId::*;
        match self {
            LinearSearch | BinarySearch => Category::Searching,
            BubbleSort | SelectionSort | InsertionSort | MergeSort | QuickSort | HeapSort => {
                Category::Sorting
            }
            Bfs | Dfs | Dijkstra | BellmanFord | Kruskal | Prim | TopologicalSort
            | CycleDetection => Category::Graph,
            BstSearch | BstInsert | BstDelete | AvlInsert | InorderTraversal
            | PreorderTraversal | PostorderTraversal => Category::Tree,
            Fibonacci | Lcs | Knapsack | Lis | MatrixChain => Category::DynamicProgramming,
            NQueens | Sudoku | RatMaze | SubsetSum => Category::Backtracking,
        }
    }

    /// Full catalogue entry.
    pub fn info(self) -> AlgorithmInfo {
        use AlgorithmId::*;

        let (name, explanation, time, space) = describe(self);
        let pace = match self {
            LinearSearch | BubbleSort | QuickSort => Pace::new(1000),
            MergeSort | Dfs => Pace::new(2000),
            Kruskal | Prim | TopologicalSort | CycleDetection => Pace::new(1800),
            _ => Pace::new(1500),
        };
        let graph = match self {
            Bfs | Dfs | CycleDetection => Some(GraphRequirements::new(false, false)),
            Dijkstra | Kruskal | Prim => Some(GraphRequirements::new(false, true)),
            BellmanFord => Some(GraphRequirements::new(true, true)),
            TopologicalSort => Some(GraphRequirements::new(true, false)),
            _ => None,
        };

        AlgorithmInfo {
            id: self,
            name,
            category: self.category(),
            explanation,
            time_complexity: time,
            space_complexity: space,
            pace,
            graph,
            needs_target: matches!(
                self,
                LinearSearch | BinarySearch | BstSearch | BstInsert | BstDelete | AvlInsert
            ),
            needs_source: matches!(self, Bfs | Dfs | Dijkstra | BellmanFord),
            uses_destination: matches!(self, Dijkstra | BellmanFord),
            listed: !matches!(
                self,
                HeapSort | Kruskal | Prim | BstInsert | BstDelete | AvlInsert | Sudoku
            ),
        }
    }
}

fn describe(id: AlgorithmId) -> (&'static str, &'static str, &'static str, &'static str) {
    use AlgorithmId::*;
    match id {
        LinearSearch => (
            "Linear Search",
            "Checks every element in turn until the target is found or the array ends.",
            "O(n)",
            "O(1)",
        ),
        BinarySearch => (
            "Binary Search",
            "Repeatedly halves the search interval of a sorted array by comparing the target with the middle element.",
            "O(log n)",
            "O(1)",
        ),
        BubbleSort => (
            "Bubble Sort",
            "Repeatedly swaps adjacent out-of-order elements; stops early when a pass makes no swaps.",
            "O(n²)",
            "O(1)",
        ),
        SelectionSort => (
            "Selection Sort",
            "Selects the minimum of the unsorted suffix and swaps it into place.",
            "O(n²)",
            "O(1)",
        ),
        InsertionSort => (
            "Insertion Sort",
            "Grows a sorted prefix by shifting larger elements right and inserting each key into its slot.",
            "O(n²)",
            "O(1)",
        ),
        MergeSort => (
            "Merge Sort",
            "Splits the array in halves, sorts each half, and merges the sorted halves.",
            "O(n log n)",
            "O(n)",
        ),
        QuickSort => (
            "Quick Sort",
            "Partitions around a pivot so smaller elements precede it, then sorts each side.",
            "O(n log n) avg, O(n²) worst",
            "O(log n)",
        ),
        HeapSort => (
            "Heap Sort",
            "Builds a max heap, then repeatedly moves the maximum to the end and restores the heap.",
            "O(n log n)",
            "O(1)",
        ),
        Bfs => (
            "Breadth-First Search",
            "Explores the graph level by level from the source using a FIFO queue.",
            "O(V + E)",
            "O(V)",
        ),
        Dfs => (
            "Depth-First Search",
            "Explores as far as possible along each branch before backtracking, using a stack.",
            "O(V + E)",
            "O(V)",
        ),
        Dijkstra => (
            "Dijkstra's Algorithm",
            "Settles nodes in order of distance from the source using a priority queue; requires non-negative weights.",
            "O((V + E) log V)",
            "O(V)",
        ),
        BellmanFord => (
            "Bellman-Ford Algorithm",
            "Relaxes every edge |V|-1 times, then checks once more to detect negative weight cycles.",
            "O(VE)",
            "O(V)",
        ),
        Kruskal => (
            "Kruskal's MST",
            "Adds edges in ascending weight order, skipping any edge that would close a cycle.",
            "O(E log E)",
            "O(V)",
        ),
        Prim => (
            "Prim's MST",
            "Grows a spanning tree from one node, always adding the cheapest edge leaving the tree.",
            "O(E log V)",
            "O(V)",
        ),
        TopologicalSort => (
            "Topological Sort",
            "Orders the nodes of a directed acyclic graph so every edge points forward (Kahn's algorithm).",
            "O(V + E)",
            "O(V)",
        ),
        CycleDetection => (
            "Cycle Detection",
            "Depth-first search that reports a cycle when it meets an already visited node other than its parent.",
            "O(V + E)",
            "O(V)",
        ),
        BstSearch => (
            "BST Search",
            "Walks down from the root, going left or right by comparison with the target.",
            "O(h)",
            "O(1)",
        ),
        BstInsert => (
            "BST Insertion",
            "Walks down to the empty slot where the value belongs and attaches a new leaf.",
            "O(h)",
            "O(1)",
        ),
        BstDelete => (
            "BST Deletion",
            "Removes a node, replacing it with its child or its in-order successor.",
            "O(h)",
            "O(h)",
        ),
        AvlInsert => (
            "AVL Insertion",
            "BST insertion followed by rotations that keep every balance factor within -1..=1.",
            "O(log n)",
            "O(log n)",
        ),
        InorderTraversal => (
            "Inorder Traversal",
            "Visits the left subtree, the node, then the right subtree; yields a BST in sorted order.",
            "O(n)",
            "O(h)",
        ),
        PreorderTraversal => (
            "Preorder Traversal",
            "Visits the node before its left and right subtrees.",
            "O(n)",
            "O(h)",
        ),
        PostorderTraversal => (
            "Postorder Traversal",
            "Visits the left and right subtrees before the node.",
            "O(n)",
            "O(h)",
        ),
        Fibonacci => (
            "Fibonacci Sequence",
            "Computes fib(n) top-down, memoizing each subproblem so it is solved once.",
            "O(n)",
            "O(n)",
        ),
        Lcs => (
            "Longest Common Subsequence",
            "Fills a table of prefix LCS lengths, then backtracks from the corner to recover the sequence.",
            "O(m*n)",
            "O(m*n)",
        ),
        Knapsack => (
            "0/1 Knapsack Problem",
            "For each item and capacity, takes the better of including or excluding the item.",
            "O(n*W)",
            "O(n*W)",
        ),
        Lis => (
            "Longest Increasing Subsequence",
            "For each element, extends the longest increasing subsequence ending at any smaller earlier element.",
            "O(n²)",
            "O(n)",
        ),
        MatrixChain => (
            "Matrix Chain Multiplication",
            "Finds the parenthesization that minimizes scalar multiplications over chains of growing length.",
            "O(n³)",
            "O(n²)",
        ),
        NQueens => (
            "N-Queens Problem",
            "Places N queens on an N×N board so that no two attack each other, enumerating every solution.",
            "O(N!)",
            "O(N²)",
        ),
        Sudoku => (
            "Sudoku Solver",
            "Fills empty cells with digits 1-9 so each row, column, and box holds every digit once.",
            "O(9^(n*n))",
            "O(n*n)",
        ),
        RatMaze => (
            "Rat in a Maze",
            "Finds a path from the top-left to the bottom-right corner moving only right or down.",
            "O(2^(n^2))",
            "O(n^2)",
        ),
        SubsetSum => (
            "Subset Sum",
            "Explores subsets of the numbers in ascending order, pruning once the running sum overshoots.",
            "O(2^n)",
            "O(n)",
        ),
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for AlgorithmId {
    type Error = AlgorithmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AlgorithmId> for &'static str {
    fn from(id: AlgorithmId) -> Self {
        id.as_str()
    }
}

// ---------------------------------------------------------------------------
// Category and metadata
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Searching,
    Sorting,
    Graph,
    Tree,
    DynamicProgramming,
    Backtracking,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Searching,
        Category::Sorting,
        Category::Graph,
        Category::Tree,
        Category::DynamicProgramming,
        Category::Backtracking,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Searching => "Searching Algorithms",
            Category::Sorting => "Sorting Algorithms",
            Category::Graph => "Graph Algorithms",
            Category::Tree => "Tree Algorithms",
            Category::DynamicProgramming => "Dynamic Programming",
            Category::Backtracking => "Backtracking Algorithms",
        }
    }

    /// Algorithms in this category, in catalogue order.
    pub fn algorithms(self) -> impl Iterator<Item = AlgorithmId> {
        AlgorithmId::ALL
            .into_iter()
            .filter(move |id| id.category() == self)
    }
}

/// The graph shape an algorithm expects its input to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRequirements {
    pub directed: bool,
    pub weighted: bool,
}

impl GraphRequirements {
    pub const fn new(directed: bool, weighted: bool) -> Self {
        GraphRequirements { directed, weighted }
    }
}

/// Catalogue entry for one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub id: AlgorithmId,
    pub name: &'static str,
    pub category: Category,
    pub explanation: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    /// Base playback delays.
    pub pace: Pace,
    /// Present for graph algorithms only.
    pub graph: Option<GraphRequirements>,
    /// A search target or value to insert/delete is required.
    pub needs_target: bool,
    /// A source node is required.
    pub needs_source: bool,
    /// An optional destination node narrows the reported path.
    pub uses_destination: bool,
    /// Shown in menus by default. Unlisted algorithms are fully functional.
    pub listed: bool,
}
