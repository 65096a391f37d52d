//! Subset sum over non-negative integers.
//!
//! Numbers are sorted ascending before the search. Every subset reaching
//! the target is collected; a branch is pruned as soon as adding the next
//! number would overshoot.

use algoviz_core::{StepLog, SubsetFrame};

use crate::recording::Recording;

fn list(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

struct Search {
    frame: SubsetFrame,
    log: StepLog<SubsetFrame>,
}

impl Search {
    fn snapshot(&self, current: Option<usize>) -> SubsetFrame {
        SubsetFrame {
            current,
            ..self.frame.clone()
        }
    }

    fn backtrack(&mut self, start: usize) {
        if self.frame.sum == self.frame.target {
            let subset = self.frame.chosen_values();
            self.frame.solutions.push(subset.clone());
            let snapshot = self.snapshot(None);
            self.log.record_solution(
                format!("Found subset: [{}] = {}", list(&subset), self.frame.target),
                snapshot,
            );
            return;
        }

        for i in start..self.frame.nums.len() {
            let value = self.frame.nums[i];
            if self.frame.sum + value > self.frame.target {
                continue;
            }

            self.frame.chosen.push(i);
            self.frame.sum += value;
            let snapshot = self.snapshot(Some(i));
            self.log.record(
                format!("Added {value} → current sum: {}", self.frame.sum),
                snapshot,
            );

            self.backtrack(i + 1);

            self.frame.chosen.pop();
            self.frame.sum -= value;
            let snapshot = self.snapshot(Some(i));
            self.log.record(
                format!("Backtracked → current sum: {}", self.frame.sum),
                snapshot,
            );
        }
    }
}

pub fn subset_sum(nums: &[i64], target: i64) -> Recording<SubsetFrame> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let mut search = Search {
        frame: SubsetFrame {
            nums: sorted,
            target,
            ..SubsetFrame::default()
        },
        log: StepLog::new(),
    };
    let snapshot = search.snapshot(None);
    search
        .log
        .record(format!("Starting subset sum for target {target}"), snapshot);

    search.backtrack(0);

    let solutions = &search.frame.solutions;
    let status = if solutions.is_empty() {
        format!("No subset found for target {target}")
    } else {
        let lines = solutions
            .iter()
            .enumerate()
            .map(|(k, s)| format!("Solution {}: [{}]", k + 1, list(s)))
            .collect::<Vec<_>>()
            .join("\n");
        format!("Found {} solution(s):\n{lines}", solutions.len())
    };
    let snapshot = search.snapshot(None);
    search.log.record(status, snapshot);
    Recording::completed(search.log)
}
