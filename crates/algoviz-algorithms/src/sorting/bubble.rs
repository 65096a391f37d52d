//! Bubble sort with early exit on a swap-free pass.

use algoviz_core::{ArrayFrame, StepLog};

use super::record_complete;
use crate::recording::Recording;

pub fn bubble_sort(input: &[i64]) -> Recording<ArrayFrame> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut log = StepLog::new();
    // Indices settled at the tail, one per pass.
    let mut settled: Vec<usize> = Vec::new();

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            log.record(
                format!("Comparing {} and {}", arr[j], arr[j + 1]),
                ArrayFrame::new(&arr)
                    .comparing(j, j + 1)
                    .with_sorted(settled.iter().copied()),
            );
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                log.record(
                    format!("Swapped {} and {}", arr[j + 1], arr[j]),
                    ArrayFrame::new(&arr)
                        .swapping(j, j + 1)
                        .with_sorted(settled.iter().copied()),
                );
            }
        }

        settled.push(n - 1 - pass);
        log.record(
            format!("Pass {} completed", pass + 1),
            ArrayFrame::new(&arr).with_sorted(settled.iter().copied()),
        );

        if !swapped {
            log.record(
                format!("Sorting complete (early exit after pass {})", pass + 1),
                ArrayFrame::new(&arr).all_sorted(),
            );
            return Recording::completed(log);
        }
    }

    record_complete(&mut log, &arr);
    Recording::completed(log)
}
