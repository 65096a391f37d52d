//! 0/1 knapsack over an `(n+1) x (capacity+1)` table.
//!
//! Row `i` holds the best value using the first `i` items. One step per
//! cell; the final step carries the chosen item indices in `sequence` and
//! their cells in `highlight`.

use algoviz_core::{DpFrame, DpTable, GridPos, StepLog};

use crate::recording::Recording;

/// `weights` and `values` are paired by index; extra entries in the longer
/// slice are ignored.
pub fn knapsack(weights: &[usize], values: &[i64], capacity: usize) -> Recording<DpFrame> {
    let n = weights.len().min(values.len());
    let mut dp = vec![vec![0i64; capacity + 1]; n + 1];
    let mut log = StepLog::new();

    let snapshot = |dp: &[Vec<i64>]| {
        DpFrame::new(DpTable::Grid(
            dp.iter()
                .map(|row| row.iter().map(|&v| Some(v)).collect())
                .collect(),
        ))
    };

    log.record("Initialized DP table for 0/1 knapsack", snapshot(&dp));

    for i in 1..=n {
        let (weight, value) = (weights[i - 1], values[i - 1]);
        for w in 1..=capacity {
            let exclude = dp[i - 1][w];
            let mut dependencies = vec![GridPos::new(i - 1, w)];
            let status = if weight <= w {
                let include = value + dp[i - 1][w - weight];
                dependencies.push(GridPos::new(i - 1, w - weight));
                dp[i][w] = include.max(exclude);
                format!(
                    "Item {} (weight {weight}, value {value}) at capacity {w}: \
                     max(include={include}, exclude={exclude}) = {}",
                    i - 1,
                    dp[i][w]
                )
            } else {
                dp[i][w] = exclude;
                format!(
                    "Item {} (weight {weight}) does not fit capacity {w}: carrying {exclude}",
                    i - 1
                )
            };
            let mut frame = snapshot(&dp);
            frame.current = Some(GridPos::new(i, w));
            frame.dependencies = dependencies;
            log.record(status, frame);
        }
    }

    // Walk back up the table to recover which items were taken.
    let mut chosen = Vec::new();
    let mut highlight = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        if dp[i][w] != dp[i - 1][w] {
            chosen.push((i - 1) as i64);
            highlight.push(GridPos::new(i, w));
            w -= weights[i - 1];
        }
    }
    chosen.reverse();
    highlight.reverse();

    let best = dp[n][capacity];
    let mut frame = snapshot(&dp);
    frame.result = Some(best);
    frame.highlight = highlight;
    let items = chosen
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    frame.sequence = chosen;
    log.record(
        format!("Maximum value: {best} (items taken: [{items}])"),
        frame,
    );
    Recording::completed(log)
}
