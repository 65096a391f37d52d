//! Rat in a maze: find a path from the top-left to the bottom-right corner
//! moving only right or down. `0` is an open cell, `1` a wall.
//!
//! The search stops at the first path found.

use algoviz_core::{GridPos, MazeFrame, StepLog};

use crate::recording::Recording;

struct Maze<'a> {
    grid: &'a [Vec<u8>],
    path: Vec<GridPos>,
    dead_ends: Vec<GridPos>,
    log: StepLog<MazeFrame>,
}

impl Maze<'_> {
    fn frame(&self, current: Option<GridPos>, solutions: usize) -> MazeFrame {
        MazeFrame {
            grid: self.grid.to_vec(),
            path: self.path.clone(),
            current,
            dead_ends: self.dead_ends.clone(),
            solutions,
        }
    }

    fn is_open(&self, pos: GridPos) -> bool {
        self.grid
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .is_some_and(|&cell| cell == 0)
    }

    fn is_exit(&self, pos: GridPos) -> bool {
        let rows = self.grid.len();
        let cols = self.grid.last().map_or(0, Vec::len);
        pos.row + 1 == rows && pos.col + 1 == cols
    }

    fn walk(&mut self, pos: GridPos) -> bool {
        if !self.is_open(pos) {
            return false;
        }

        self.path.push(pos);
        if self.is_exit(pos) {
            let frame = self.frame(Some(pos), 1);
            self.log
                .record_solution(format!("Reached destination at {pos}"), frame);
            return true;
        }

        let frame = self.frame(Some(pos), 0);
        self.log.record(format!("Moving to {pos}"), frame);

        if self.walk(GridPos::new(pos.row, pos.col + 1))
            || self.walk(GridPos::new(pos.row + 1, pos.col))
        {
            return true;
        }

        self.path.pop();
        self.dead_ends.push(pos);
        let frame = self.frame(Some(pos), 0);
        self.log.record(format!("Backtracking from {pos}"), frame);
        false
    }
}

pub fn rat_maze(grid: &[Vec<u8>]) -> Recording<MazeFrame> {
    let mut maze = Maze {
        grid,
        path: Vec::new(),
        dead_ends: Vec::new(),
        log: StepLog::new(),
    };
    let frame = maze.frame(None, 0);
    maze.log.record("Starting maze solver", frame);

    let solved = !grid.is_empty() && maze.walk(GridPos::new(0, 0));

    let (status, solutions) = if solved {
        (format!("Found path through maze ({} cells)", maze.path.len()), 1)
    } else {
        ("No path found through maze".to_string(), 0)
    };
    let frame = maze.frame(None, solutions);
    maze.log.record(status, frame);
    Recording::completed(maze.log)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_path_preferring_right() {
        let grid = vec![
            vec![0, 0, 1, 1],
            vec![1, 0, 0, 1],
            vec![1, 1, 0, 1],
            vec![1, 1, 0, 0],
        ];
        let rec = rat_maze(&grid);
        let last = rec.final_payload().unwrap();
        assert_eq!(last.solutions, 1);
        let expected: Vec<GridPos> = [(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (3, 2), (3, 3)]
            .into_iter()
            .map(|(r, c)| GridPos::new(r, c))
            .collect();
        assert_eq!(last.path, expected);
        assert_eq!(rec.steps.iter().filter(|s| s.is_solution()).count(), 1);
    }

    #[test]
    fn dead_ends_are_backtracked() {
        let grid = vec![vec![0, 0, 0], vec![0, 1, 1], vec![0, 0, 0]];
        let rec = rat_maze(&grid);
        let statuses = rec.statuses();
        assert!(statuses.contains(&"Backtracking from (0, 2)"));
        let last = rec.final_payload().unwrap();
        assert_eq!(last.solutions, 1);
        assert!(last.dead_ends.contains(&GridPos::new(0, 2)));
        assert_eq!(last.path.first(), Some(&GridPos::new(0, 0)));
        assert_eq!(last.path.last(), Some(&GridPos::new(2, 2)));
    }

    #[test]
    fn blocked_maze_reports_no_path() {
        let grid = vec![vec![0, 1], vec![1, 0]];
        let rec = rat_maze(&grid);
        assert_eq!(rec.last().unwrap().status, "No path found through maze");
        assert_eq!(rec.final_payload().unwrap().solutions, 0);
        assert!(rec.final_payload().unwrap().path.is_empty());
    }

    #[test]
    fn open_grid_walks_the_top_row_then_down() {
        let grid = vec![vec![0; 3]; 3];
        let rec = rat_maze(&grid);
        let last = rec.final_payload().unwrap();
        assert_eq!(last.solutions, 1);
        assert_eq!(last.path.last(), Some(&GridPos::new(2, 2)));
        assert_eq!(last.path.len(), 5);
        assert_eq!(
            rec.last().unwrap().status,
            "Found path through maze (5 cells)"
        );
    }

    #[test]
    fn walled_entrance_fails_immediately() {
        let rec = rat_maze(&[vec![1, 0], vec![0, 0]]);
        assert_eq!(
            rec.statuses(),
            vec!["Starting maze solver", "No path found through maze"]
        );
    }
}
