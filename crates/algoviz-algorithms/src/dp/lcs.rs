//! Longest common subsequence.
//!
//! Two phases: filling the `(m+1) x (n+1)` table, then a separate
//! backtrace from the bottom-right corner that reconstructs the sequence.

use algoviz_core::{DpFrame, DpTable, GridPos, StepLog};

use crate::recording::Recording;

pub fn lcs(first: &str, second: &str) -> Recording<DpFrame> {
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();
    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0i64; n + 1]; m + 1];
    let mut log = StepLog::new();

    let snapshot = |dp: &[Vec<i64>]| {
        DpFrame::new(DpTable::Grid(
            dp.iter()
                .map(|row| row.iter().map(|&v| Some(v)).collect())
                .collect(),
        ))
    };

    log.record("Initialized DP table for LCS", snapshot(&dp));

    for i in 1..=m {
        for j in 1..=n {
            let cell = GridPos::new(i, j);
            let (ca, cb) = (a[i - 1], b[j - 1]);
            if ca == cb {
                dp[i][j] = dp[i - 1][j - 1] + 1;
                let mut frame = snapshot(&dp);
                frame.current = Some(cell);
                frame.dependencies = vec![GridPos::new(i - 1, j - 1)];
                log.record(
                    format!("Comparing '{ca}' and '{cb}': match, dp[{i}][{j}] = {}", dp[i][j]),
                    frame,
                );
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
                let mut frame = snapshot(&dp);
                frame.current = Some(cell);
                frame.dependencies = vec![GridPos::new(i - 1, j), GridPos::new(i, j - 1)];
                log.record(
                    format!(
                        "Comparing '{ca}' and '{cb}': no match, dp[{i}][{j}] = max({}, {}) = {}",
                        dp[i - 1][j],
                        dp[i][j - 1],
                        dp[i][j]
                    ),
                    frame,
                );
            }
        }
    }

    log.record("Starting LCS reconstruction", snapshot(&dp));

    let mut sequence: Vec<char> = Vec::new();
    let mut trail: Vec<GridPos> = Vec::new();
    let (mut i, mut j) = (m, n);
    while i > 0 && j > 0 {
        trail.push(GridPos::new(i, j));
        let mut frame = snapshot(&dp);
        frame.current = Some(GridPos::new(i, j));
        frame.highlight = trail.clone();

        if a[i - 1] == b[j - 1] {
            sequence.insert(0, a[i - 1]);
            frame.text = sequence.iter().collect();
            log.record(
                format!(
                    "At dp[{i}][{j}]: '{}' matches, added to LCS ({})",
                    a[i - 1],
                    frame.text
                ),
                frame,
            );
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            frame.text = sequence.iter().collect();
            log.record(
                format!("At dp[{i}][{j}]: moving up (dp[{}][{j}] > dp[{i}][{}])", i - 1, j - 1),
                frame,
            );
            i -= 1;
        } else {
            frame.text = sequence.iter().collect();
            log.record(
                format!("At dp[{i}][{j}]: moving left (dp[{i}][{}] >= dp[{}][{j}])", j - 1, i - 1),
                frame,
            );
            j -= 1;
        }
    }

    let mut frame = snapshot(&dp);
    frame.highlight = trail;
    frame.text = sequence.iter().collect();
    frame.result = Some(dp[m][n]);
    log.record(
        format!("LCS length: {}, sequence: \"{}\"", dp[m][n], frame.text),
        frame,
    );
    Recording::completed(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(a: &[char], b: &[char]) -> usize {
        if a.is_empty() || b.is_empty() {
            return 0;
        }
        if a[0] == b[0] {
            1 + reference(&a[1..], &b[1..])
        } else {
            reference(&a[1..], b).max(reference(a, &b[1..]))
        }
    }

    #[test]
    fn classic_example() {
        let rec = lcs("ABCBDAB", "BDCABA");
        let last = rec.final_payload().unwrap();
        assert_eq!(last.result, Some(4));
        assert_eq!(last.text.len(), 4);
    }

    #[test]
    fn reconstruction_is_a_common_subsequence() {
        fn is_subsequence(needle: &str, hay: &str) -> bool {
            let mut it = hay.chars();
            needle.chars().all(|c| it.any(|h| h == c))
        }
        for (x, y) in [("abcd", "acbd"), ("aaaa", "aa"), ("dcba", "abcd"), ("", "abc")] {
            let rec = lcs(x, y);
            let last = rec.final_payload().unwrap();
            let xs: Vec<char> = x.chars().collect();
            let ys: Vec<char> = y.chars().collect();
            assert_eq!(last.result, Some(reference(&xs, &ys) as i64), "{x} / {y}");
            assert!(is_subsequence(&last.text, x) && is_subsequence(&last.text, y));
        }
    }

    #[test]
    fn backtrace_follows_fill_phase() {
        let rec = lcs("ab", "b");
        let statuses = rec.statuses();
        let start = statuses
            .iter()
            .position(|s| *s == "Starting LCS reconstruction")
            .unwrap();
        assert!(statuses[..start].iter().all(|s| !s.starts_with("At dp")));
        assert!(statuses[start + 1..].iter().all(|s| !s.starts_with("Comparing")));
    }
}
