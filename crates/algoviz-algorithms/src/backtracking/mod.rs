//! Backtracking adapters.
//!
//! One step per candidate tried or placed and one per backtrack. Accepted
//! solutions are recorded with [`algoviz_core::Emphasis::Solution`] so
//! playback holds them longer. The last step always reports the solution
//! count or that none exists.

pub mod nqueens;
pub mod rat_maze;
pub mod subset_sum;
pub mod sudoku;

pub use nqueens::nqueens;
pub use rat_maze::rat_maze;
pub use subset_sum::subset_sum;
pub use sudoku::{sudoku, SUDOKU_STEP_BUDGET};

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
