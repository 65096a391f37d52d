//! N-Queens, enumerating every placement row by row.

use algoviz_core::{BoardFrame, GridPos, StepLog};

use super::plural;
use crate::recording::Recording;

struct Queens {
    n: usize,
    /// `cols[row]` is the column of the queen in `row`, for rows placed so far.
    cols: Vec<usize>,
    solutions: usize,
    log: StepLog<BoardFrame>,
}

impl Queens {
    fn frame(&self, current: Option<GridPos>, conflicts: Vec<GridPos>) -> BoardFrame {
        let mut cells = vec![vec![0u8; self.n]; self.n];
        for (row, &col) in self.cols.iter().enumerate() {
            cells[row][col] = 1;
        }
        BoardFrame {
            cells,
            current,
            conflicts,
            fixed: Vec::new(),
            solutions: self.solutions,
        }
    }

    /// Queens already placed that attack `(row, col)`.
    fn attackers(&self, row: usize, col: usize) -> Vec<GridPos> {
        self.cols
            .iter()
            .enumerate()
            .filter(|&(r, &c)| c == col || row - r == col.abs_diff(c))
            .map(|(r, &c)| GridPos::new(r, c))
            .collect()
    }

    fn place(&mut self, row: usize) {
        if row == self.n {
            self.solutions += 1;
            let frame = self.frame(None, Vec::new());
            self.log
                .record_solution(format!("Solution #{} found", self.solutions), frame);
            return;
        }

        for col in 0..self.n {
            let here = GridPos::new(row, col);
            let conflicts = self.attackers(row, col);
            if !conflicts.is_empty() {
                let frame = self.frame(Some(here), conflicts);
                self.log.record(
                    format!("Checking row {row}, col {col}: under attack"),
                    frame,
                );
                continue;
            }

            self.cols.push(col);
            let frame = self.frame(Some(here), Vec::new());
            self.log
                .record(format!("Placed queen at ({row}, {col})"), frame);

            self.place(row + 1);

            self.cols.pop();
            let frame = self.frame(Some(here), Vec::new());
            self.log
                .record(format!("Backtracking: removed queen from ({row}, {col})"), frame);
        }
    }
}

pub fn nqueens(n: usize) -> Recording<BoardFrame> {
    let mut queens = Queens {
        n,
        cols: Vec::with_capacity(n),
        solutions: 0,
        log: StepLog::new(),
    };
    let frame = queens.frame(None, Vec::new());
    queens
        .log
        .record(format!("Initializing {n}x{n} chessboard"), frame);

    queens.place(0);

    let status = if queens.solutions == 0 {
        format!("No solution exists for N = {n}")
    } else {
        format!("Found {} for N = {n}", plural(queens.solutions, "solution"))
    };
    let frame = queens.frame(None, Vec::new());
    queens.log.record(status, frame);
    Recording::completed(queens.log)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_queens_has_two_solutions() {
        let rec = nqueens(4);
        let solutions: Vec<_> = rec.steps.iter().filter(|s| s.is_solution()).collect();
        assert_eq!(solutions.len(), 2);
        assert_eq!(rec.last().unwrap().status, "Found 2 solutions for N = 4");
        assert_eq!(rec.final_payload().unwrap().solutions, 2);

        // First solution in column-major search order is [1, 3, 0, 2].
        let first = &solutions[0].payload.cells;
        let cols: Vec<usize> = first
            .iter()
            .map(|row| row.iter().position(|&c| c == 1).unwrap())
            .collect();
        assert_eq!(cols, vec![1, 3, 0, 2]);
    }

    #[test]
    fn known_solution_counts() {
        for (n, expected) in [(1, 1), (2, 0), (3, 0), (5, 10), (6, 4)] {
            let rec = nqueens(n);
            assert_eq!(rec.final_payload().unwrap().solutions, expected, "n={n}");
        }
        assert_eq!(nqueens(3).last().unwrap().status, "No solution exists for N = 3");
    }

    #[test]
    fn attacked_cells_list_their_attackers() {
        let rec = nqueens(4);
        let step = rec
            .steps
            .iter()
            .find(|s| s.status == "Checking row 1, col 0: under attack")
            .unwrap();
        assert_eq!(step.payload.conflicts, vec![GridPos::new(0, 0)]);
    }
}
