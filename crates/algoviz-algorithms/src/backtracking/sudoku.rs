//! 9x9 Sudoku by first-empty-cell backtracking. `0` marks an empty cell.
//!
//! Sparse random puzzles can make plain backtracking explode, so the search
//! gives up once it has recorded [`SUDOKU_STEP_BUDGET`] steps and reports
//! that instead of a solution.

use algoviz_core::{BoardFrame, GridPos, StepLog};

use crate::recording::Recording;

pub const SUDOKU_STEP_BUDGET: usize = 20_000;

type Board = [[u8; 9]; 9];

enum Search {
    Solved,
    DeadEnd,
    Exhausted,
}

struct Solver {
    board: Board,
    fixed: Vec<GridPos>,
    log: StepLog<BoardFrame>,
}

impl Solver {
    fn frame(
        &self,
        current: Option<GridPos>,
        conflicts: Vec<GridPos>,
        solutions: usize,
    ) -> BoardFrame {
        BoardFrame {
            cells: self.board.iter().map(|row| row.to_vec()).collect(),
            current,
            conflicts,
            fixed: self.fixed.clone(),
            solutions,
        }
    }

    /// Cells in the row, column, or box of `(row, col)` already holding `digit`.
    fn conflicts(&self, row: usize, col: usize, digit: u8) -> Vec<GridPos> {
        let (box_row, box_col) = (row / 3 * 3, col / 3 * 3);
        let mut out = Vec::new();
        for r in 0..9 {
            for c in 0..9 {
                let same_box = r / 3 * 3 == box_row && c / 3 * 3 == box_col;
                let peer = r == row || c == col || same_box;
                if peer && (r, c) != (row, col) && self.board[r][c] == digit {
                    out.push(GridPos::new(r, c));
                }
            }
        }
        out
    }

    fn first_empty(&self) -> Option<(usize, usize)> {
        (0..81)
            .map(|i| (i / 9, i % 9))
            .find(|&(r, c)| self.board[r][c] == 0)
    }

    fn solve(&mut self) -> Search {
        let Some((row, col)) = self.first_empty() else {
            return Search::Solved;
        };
        let here = GridPos::new(row, col);

        for digit in 1..=9u8 {
            if self.log.len() >= SUDOKU_STEP_BUDGET {
                return Search::Exhausted;
            }
            let conflicts = self.conflicts(row, col, digit);
            if !conflicts.is_empty() {
                let frame = self.frame(Some(here), conflicts, 0);
                self.log
                    .record(format!("Trying {digit} at {here}: conflict"), frame);
                continue;
            }

            self.board[row][col] = digit;
            let frame = self.frame(Some(here), Vec::new(), 0);
            self.log.record(format!("Placed {digit} at {here}"), frame);

            match self.solve() {
                Search::DeadEnd => {}
                done => return done,
            }

            self.board[row][col] = 0;
            let frame = self.frame(Some(here), Vec::new(), 0);
            self.log.record(format!("Backtracking at {here}"), frame);
        }
        Search::DeadEnd
    }

    /// Givens that already clash with each other.
    fn invalid_givens(&self) -> Vec<GridPos> {
        self.fixed
            .iter()
            .copied()
            .filter(|p| !self.conflicts(p.row, p.col, self.board[p.row][p.col]).is_empty())
            .collect()
    }
}

/// Solves `board`. Rows or cells beyond 9x9 are ignored, missing ones are
/// treated as empty, and values above 9 are cleared.
pub fn sudoku(board: &[Vec<u8>]) -> Recording<BoardFrame> {
    let mut grid: Board = [[0; 9]; 9];
    let mut fixed = Vec::new();
    for (r, row) in board.iter().take(9).enumerate() {
        for (c, &cell) in row.iter().take(9).enumerate() {
            if (1..=9).contains(&cell) {
                grid[r][c] = cell;
                fixed.push(GridPos::new(r, c));
            }
        }
    }

    let mut solver = Solver {
        board: grid,
        fixed,
        log: StepLog::new(),
    };
    let frame = solver.frame(None, Vec::new(), 0);
    solver.log.record("Starting Sudoku solver", frame);

    let clashes = solver.invalid_givens();
    if !clashes.is_empty() {
        let frame = solver.frame(None, clashes, 0);
        solver
            .log
            .record("No solution: the given digits conflict", frame);
        return Recording::completed(solver.log);
    }

    match solver.solve() {
        Search::Solved => {
            let frame = solver.frame(None, Vec::new(), 1);
            solver
                .log
                .record_solution("Sudoku solved successfully", frame.clone());
            solver.log.record("Found 1 solution", frame);
        }
        Search::DeadEnd => {
            let frame = solver.frame(None, Vec::new(), 0);
            solver
                .log
                .record("No solution found for this Sudoku puzzle", frame);
        }
        Search::Exhausted => {
            let frame = solver.frame(None, Vec::new(), 0);
            solver.log.record(
                format!("Search abandoned after {SUDOKU_STEP_BUDGET} steps without a solution"),
                frame,
            );
        }
    }
    Recording::completed(solver.log)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid_solution(cells: &[Vec<u8>]) -> bool {
        let full = |digits: Vec<u8>| {
            let mut d = digits;
            d.sort_unstable();
            d == (1..=9).collect::<Vec<u8>>()
        };
        (0..9).all(|i| {
            full(cells[i].clone())
                && full((0..9).map(|r| cells[r][i]).collect())
                && full(
                    (0..9)
                        .map(|k| cells[i / 3 * 3 + k / 3][i % 3 * 3 + k % 3])
                        .collect(),
                )
        })
    }

    fn parse(rows: [&str; 9]) -> Vec<Vec<u8>> {
        rows.iter()
            .map(|r| r.bytes().map(|b| if b == b'.' { 0 } else { b - b'0' }).collect())
            .collect()
    }

    const SOLVED: [&str; 9] = [
        "534678912",
        "672195348",
        "198342567",
        "859761423",
        "426853791",
        "713924856",
        "961537284",
        "287419635",
        "345286179",
    ];

    #[test]
    fn solves_one_blank_per_row_column_and_box() {
        let mut board = parse(SOLVED);
        let blanks = [(0, 0), (1, 3), (2, 6), (3, 1), (4, 4), (5, 7), (6, 2), (7, 5), (8, 8)];
        for (r, c) in blanks {
            board[r][c] = 0;
        }
        let rec = sudoku(&board);
        let last = rec.final_payload().unwrap();
        assert_eq!(last.solutions, 1);
        assert!(is_valid_solution(&last.cells));
        assert_eq!(last.cells, parse(SOLVED));
        assert_eq!(last.fixed.len(), 72);
        assert_eq!(rec.last().unwrap().status, "Found 1 solution");
        assert_eq!(rec.steps.iter().filter(|s| s.is_solution()).count(), 1);
        assert!(!rec.statuses().iter().any(|s| s.starts_with("Backtracking")));
    }

    #[test]
    fn nearly_solved_board_fills_last_cell() {
        let mut board = parse(SOLVED);
        board[4][4] = 0;
        let rec = sudoku(&board);
        assert!(rec.statuses().contains(&"Placed 5 at (4, 4)"));
        assert_eq!(rec.final_payload().unwrap().cells[4][4], 5);
    }

    #[test]
    fn conflicting_givens_have_no_solution() {
        let mut board = vec![vec![0u8; 9]; 9];
        board[0][0] = 7;
        board[0][8] = 7;
        let rec = sudoku(&board);
        assert_eq!(rec.len(), 2);
        assert_eq!(
            rec.final_payload().unwrap().conflicts,
            vec![GridPos::new(0, 0), GridPos::new(0, 8)]
        );
    }
}
