//! Seeded random input producer.
//!
//! Produces a well-formed [`AlgorithmInput`] for any [`AlgorithmId`]. The
//! same seed always yields the same sequence of inputs, so a run can be
//! reproduced from the seed alone.

use algoviz_core::{graph::letter_label, Graph, NodeId, Position};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::input::AlgorithmInput;
use crate::registry::{AlgorithmId, Category};

const CENTER: (f64, f64) = (400.0, 300.0);
const RADIUS: f64 = 200.0;

pub struct InputGenerator {
    seed: u64,
    rng: ChaCha8Rng,
}

impl InputGenerator {
    pub fn new(seed: u64) -> Self {
        InputGenerator {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A generator with a fresh random seed. Read it back with [`seed`](Self::seed).
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&mut self, id: AlgorithmId) -> AlgorithmInput {
        match id.category() {
            Category::Searching | Category::Sorting => self.array(id),
            Category::Graph => self.graph(id),
            Category::Tree => self.tree(id),
            Category::DynamicProgramming | Category::Backtracking => self.puzzle(id),
        }
    }

    // -----------------------------------------------------------------------
    // Arrays
    // -----------------------------------------------------------------------

    fn values(&mut self, len: usize, range: std::ops::RangeInclusive<i64>) -> Vec<i64> {
        (0..len).map(|_| self.rng.gen_range(range.clone())).collect()
    }

    fn array(&mut self, id: AlgorithmId) -> AlgorithmInput {
        let len = self.rng.gen_range(5..=19);
        let mut values = self.values(len, 1..=100);
        if id == AlgorithmId::BinarySearch {
            values.sort_unstable();
        }
        let target = (id.category() == Category::Searching)
            .then(|| values[self.rng.gen_range(0..values.len())]);
        AlgorithmInput::Array { values, target }
    }

    // -----------------------------------------------------------------------
    // Graphs
    // -----------------------------------------------------------------------

    fn weight(&mut self, id: AlgorithmId, weighted: bool) -> i64 {
        match (weighted, id) {
            (false, _) => 1,
            (true, AlgorithmId::BellmanFord) => self.rng.gen_range(-5..=10),
            (true, _) => self.rng.gen_range(1..=9),
        }
    }

    fn graph(&mut self, id: AlgorithmId) -> AlgorithmInput {
        let requirements = id.info().graph.unwrap_or_else(|| {
            crate::registry::GraphRequirements::new(false, false)
        });
        let n = self.rng.gen_range(5..=8);
        let mut graph = Graph::new(requirements.directed, requirements.weighted);
        let step = std::f64::consts::TAU / n as f64;
        for i in 0..n {
            let angle = i as f64 * step;
            graph.add_node(
                letter_label(i),
                Position::new(
                    CENTER.0 + RADIUS * angle.cos(),
                    CENTER.1 + RADIUS * angle.sin(),
                ),
            );
        }

        // Topological sort gets a DAG: every edge points forward in a
        // random node order.
        let order: Vec<u32> = if id == AlgorithmId::TopologicalSort {
            let mut order: Vec<u32> = (0..n as u32).collect();
            order.shuffle(&mut self.rng);
            order
        } else {
            (0..n as u32).collect()
        };

        let mut pairs: Vec<(u32, u32)> = Vec::new();
        for i in 1..n {
            let parent = self.rng.gen_range(0..i);
            pairs.push((order[parent], order[i]));
        }

        let max_edges = if graph.directed { n * (n - 1) } else { n * (n - 1) / 2 };
        let extra = self.rng.gen_range(1..=2);
        for _ in 0..extra {
            if pairs.len() >= max_edges {
                break;
            }
            let candidate = (0..100).find_map(|_| {
                let (a, b) = if id == AlgorithmId::TopologicalSort {
                    let a = self.rng.gen_range(0..n - 1);
                    let b = self.rng.gen_range(a + 1..n);
                    (order[a], order[b])
                } else {
                    (self.rng.gen_range(0..n) as u32, self.rng.gen_range(0..n) as u32)
                };
                let duplicate = pairs.iter().any(|&(s, t)| {
                    (s, t) == (a, b) || (!graph.directed && (t, s) == (a, b))
                });
                (a != b && !duplicate).then_some((a, b))
            });
            match candidate {
                Some(pair) => pairs.push(pair),
                None => break,
            }
        }

        for (s, t) in pairs {
            let weight = self.weight(id, requirements.weighted);
            // Endpoints are always in range, so this cannot fail.
            let _ = graph.add_edge(NodeId(s), NodeId(t), weight);
        }

        let info = id.info();
        let source = info
            .needs_source
            .then(|| NodeId(self.rng.gen_range(0..n) as u32));
        let destination = match (info.uses_destination, source) {
            (true, Some(src)) => {
                let mut dst = src;
                while dst == src {
                    dst = NodeId(self.rng.gen_range(0..n) as u32);
                }
                Some(dst)
            }
            _ => None,
        };

        AlgorithmInput::Graph {
            graph,
            source,
            destination,
        }
    }

    // -----------------------------------------------------------------------
    // Trees
    // -----------------------------------------------------------------------

    fn tree(&mut self, id: AlgorithmId) -> AlgorithmInput {
        let len = self.rng.gen_range(5..=10);
        let mut values: Vec<i64> = Vec::with_capacity(len);
        while values.len() < len {
            let v = self.rng.gen_range(10..=99);
            if !values.contains(&v) {
                values.push(v);
            }
        }

        let target = if matches!(id, AlgorithmId::BstInsert | AlgorithmId::AvlInsert) {
            let mut t = self.rng.gen_range(10..=99);
            while values.contains(&t) {
                t = self.rng.gen_range(10..=99);
            }
            t
        } else {
            values[self.rng.gen_range(0..values.len())]
        };

        AlgorithmInput::Tree {
            values,
            target: Some(target),
        }
    }

    // -----------------------------------------------------------------------
    // Dynamic programming and backtracking
    // -----------------------------------------------------------------------

    fn letters(&mut self) -> String {
        let len = self.rng.gen_range(3..=10);
        (0..len)
            .map(|_| char::from(b'a' + self.rng.gen_range(0..4u8)))
            .collect()
    }

    fn puzzle(&mut self, id: AlgorithmId) -> AlgorithmInput {
        match id {
            AlgorithmId::Fibonacci => AlgorithmInput::Fibonacci {
                n: self.rng.gen_range(5..=19),
            },
            AlgorithmId::Lcs => AlgorithmInput::Lcs {
                first: self.letters(),
                second: self.letters(),
            },
            AlgorithmId::Knapsack => {
                let weights: Vec<usize> = (0..5).map(|_| self.rng.gen_range(1..=10)).collect();
                let values = self.values(5, 5..=24);
                let capacity = weights.iter().sum::<usize>() * 7 / 10;
                AlgorithmInput::Knapsack {
                    weights,
                    values,
                    capacity,
                }
            }
            AlgorithmId::Lis => {
                let len = self.rng.gen_range(5..=14);
                AlgorithmInput::Sequence {
                    values: self.values(len, 1..=100),
                }
            }
            AlgorithmId::MatrixChain => {
                let len = self.rng.gen_range(4..=8);
                AlgorithmInput::MatrixChain {
                    dims: self.values(len, 1..=10),
                }
            }
            AlgorithmId::NQueens => AlgorithmInput::NQueens {
                n: self.rng.gen_range(4..=6),
            },
            AlgorithmId::Sudoku => AlgorithmInput::Sudoku {
                board: self.sudoku(),
            },
            AlgorithmId::RatMaze => {
                let size = self.rng.gen_range(5..=7);
                let mut grid: Vec<Vec<u8>> = (0..size)
                    .map(|_| {
                        (0..size)
                            .map(|_| u8::from(self.rng.gen_ratio(3, 10)))
                            .collect()
                    })
                    .collect();
                grid[0][0] = 0;
                grid[size - 1][size - 1] = 0;
                AlgorithmInput::Maze { grid }
            }
            _ => {
                let len = self.rng.gen_range(5..=10);
                let nums = self.values(len, 1..=20);
                let target = nums.iter().sum::<i64>() / 2;
                AlgorithmInput::SubsetSum { nums, target }
            }
        }
    }

    /// 10 to 15 clues taken from a shuffled valid grid, so the puzzle always
    /// has at least one solution.
    fn sudoku(&mut self) -> Vec<Vec<u8>> {
        let mut digits: Vec<u8> = (1..=9).collect();
        digits.shuffle(&mut self.rng);

        // Band/stack shuffles preserve validity of the base pattern.
        let mut rows: Vec<usize> = Vec::with_capacity(9);
        let mut bands = [0usize, 1, 2];
        bands.shuffle(&mut self.rng);
        for band in bands {
            let mut within = [0usize, 1, 2];
            within.shuffle(&mut self.rng);
            rows.extend(within.iter().map(|r| band * 3 + r));
        }
        let mut cols: Vec<usize> = Vec::with_capacity(9);
        let mut stacks = [0usize, 1, 2];
        stacks.shuffle(&mut self.rng);
        for stack in stacks {
            let mut within = [0usize, 1, 2];
            within.shuffle(&mut self.rng);
            cols.extend(within.iter().map(|c| stack * 3 + c));
        }

        let pattern = |r: usize, c: usize| (r % 3 * 3 + r / 3 + c) % 9;
        let full: Vec<Vec<u8>> = rows
            .iter()
            .map(|&r| cols.iter().map(|&c| digits[pattern(r, c)]).collect())
            .collect();

        let mut cells: Vec<usize> = (0..81).collect();
        cells.shuffle(&mut self.rng);
        let clues = self.rng.gen_range(10..=15);
        let mut board = vec![vec![0u8; 9]; 9];
        for &cell in cells.iter().take(clues) {
            board[cell / 9][cell % 9] = full[cell / 9][cell % 9];
        }
        board
    }
}
