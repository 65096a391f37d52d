//! Matrix-chain multiplication order.
//!
//! `dims` has one more entry than there are matrices: matrix `i` is
//! `dims[i] x dims[i+1]`. Cells stay empty until their minimum is known, so
//! the table never shows a sentinel "infinity".

use algoviz_core::{DpFrame, DpTable, GridPos, StepLog};

use crate::recording::Recording;

fn snapshot(dp: &[Vec<Option<i64>>]) -> DpFrame {
    DpFrame::new(DpTable::Grid(dp.to_vec()))
}

pub fn matrix_chain(dims: &[i64]) -> Recording<DpFrame> {
    let n = dims.len().saturating_sub(1);
    let mut dp: Vec<Vec<Option<i64>>> = vec![vec![None; n]; n];
    for (i, row) in dp.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    let mut log = StepLog::new();

    log.record(
        "Initialized DP table for matrix chain multiplication",
        snapshot(&dp),
    );

    for len in 2..=n {
        log.record(format!("Processing chains of length {len}"), snapshot(&dp));

        for i in 0..=n - len {
            let j = i + len - 1;
            let mut frame = snapshot(&dp);
            frame.current = Some(GridPos::new(i, j));
            log.record(
                format!("Calculating optimal cost for matrices {}..{}", i + 1, j + 1),
                frame,
            );

            let mut best: Option<i64> = None;
            for k in i..j {
                let left = dp[i][k].unwrap_or(0);
                let right = dp[k + 1][j].unwrap_or(0);
                let cost = left + right + dims[i] * dims[k + 1] * dims[j + 1];
                let improved = best.map_or(true, |b| cost < b);

                let mut frame = snapshot(&dp);
                frame.current = Some(GridPos::new(i, j));
                frame.dependencies = vec![GridPos::new(i, k), GridPos::new(k + 1, j)];
                frame.split = Some(k);
                let verdict = if improved { ", new minimum" } else { "" };
                log.record(
                    format!(
                        "Split at {}: cost = {left} + {right} + {}*{}*{} = {cost}{verdict}",
                        k + 1,
                        dims[i],
                        dims[k + 1],
                        dims[j + 1]
                    ),
                    frame,
                );
                if improved {
                    best = Some(cost);
                    dp[i][j] = Some(cost);
                }
            }

            let mut frame = snapshot(&dp);
            frame.current = Some(GridPos::new(i, j));
            log.record(
                format!(
                    "Minimum cost for matrices {}..{} is {}",
                    i + 1,
                    j + 1,
                    best.unwrap_or(0)
                ),
                frame,
            );
        }
    }

    let result = if n == 0 { 0 } else { dp[0][n - 1].unwrap_or(0) };
    let mut frame = snapshot(&dp);
    frame.result = Some(result);
    log.record(format!("Minimum multiplications: {result}"), frame);
    Recording::completed(log)
}
