//! Longest increasing subsequence, quadratic DP.
//!
//! `dp[i]` is the length of the longest strictly increasing subsequence
//! ending at `i`. A predecessor array rebuilds one witness sequence.

use algoviz_core::{DpFrame, DpTable, GridPos, StepLog};

use crate::recording::Recording;

fn snapshot(dp: &[i64]) -> DpFrame {
    DpFrame::new(DpTable::Linear(dp.iter().map(|&v| Some(v)).collect()))
}

pub fn lis(values: &[i64]) -> Recording<DpFrame> {
    let n = values.len();
    let mut dp = vec![1i64; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut log = StepLog::new();

    log.record("Initialized DP array with 1s", snapshot(&dp));

    for i in 1..n {
        let mut frame = snapshot(&dp);
        frame.current = Some(GridPos::new(0, i));
        log.record(format!("Processing element {i}: {}", values[i]), frame);

        for j in 0..i {
            let mut frame = snapshot(&dp);
            frame.current = Some(GridPos::new(0, i));
            frame.dependencies = vec![GridPos::new(0, j)];
            log.record(
                format!(
                    "Comparing with element {j}: {} {} {}",
                    values[j],
                    if values[j] < values[i] { "<" } else { ">=" },
                    values[i]
                ),
                frame,
            );

            if values[j] < values[i] && dp[j] + 1 > dp[i] {
                dp[i] = dp[j] + 1;
                prev[i] = Some(j);
                let mut frame = snapshot(&dp);
                frame.current = Some(GridPos::new(0, i));
                frame.dependencies = vec![GridPos::new(0, j)];
                log.record(
                    format!("Updated LIS ending at {i} to {} (extends element {j})", dp[i]),
                    frame,
                );
            }
        }
    }

    // First index with the maximal length, then follow predecessors.
    let best_end = (0..n).fold(None, |best: Option<usize>, i| match best {
        Some(b) if dp[b] >= dp[i] => Some(b),
        _ => Some(i),
    });
    let mut members = Vec::new();
    let mut cursor = best_end;
    while let Some(i) = cursor {
        members.push(i);
        cursor = prev[i];
    }
    members.reverse();

    let length = best_end.map_or(0, |i| dp[i]);
    let mut frame = snapshot(&dp);
    frame.result = Some(length);
    frame.highlight = members.iter().map(|&i| GridPos::new(0, i)).collect();
    frame.sequence = members.iter().map(|&i| values[i]).collect();
    let listed = frame
        .sequence
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    log.record(format!("LIS length: {length}, sequence: [{listed}]"), frame);
    Recording::completed(log)
}
