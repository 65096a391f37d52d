//! Binary search.
//!
//! The input is sorted first (a copy; the caller's array is untouched).
//! One step per interval halving with the `low`/`mid`/`high` window, then a
//! terminal step.

use algoviz_core::{ArrayFrame, SearchWindow, StepLog};

use crate::recording::Recording;

pub fn binary_search(array: &[i64], target: i64) -> Recording<ArrayFrame> {
    let mut sorted = array.to_vec();
    sorted.sort_unstable();

    let mut log = StepLog::new();
    let base = ArrayFrame::new(&sorted).with_target(target);

    // Signed bounds so `high` can drop below zero on a miss at index 0.
    let mut low: i64 = 0;
    let mut high: i64 = sorted.len() as i64 - 1;
    let mut steps = 0;

    while low <= high {
        steps += 1;
        let mid = ((low + high) / 2) as usize;
        let window = SearchWindow {
            low: low as usize,
            mid,
            high: high as usize,
        };

        let mut frame = base.clone();
        frame.window = Some(window);
        frame.current = Some(mid);
        frame.compared.push(mid);
        log.record(format!("Step {steps}: low={low}, high={high}, mid={mid}"), frame);

        if sorted[mid] == target {
            let mut frame = base.clone();
            frame.window = Some(window);
            frame.current = Some(mid);
            frame.found = Some(mid);
            log.record(format!("Found {target} at position {mid}"), frame);
            return Recording::completed(log);
        } else if sorted[mid] < target {
            low = mid as i64 + 1;
        } else {
            high = mid as i64 - 1;
        }
    }

    log.record(
        format!("Element {target} not found after {steps} steps"),
        base,
    );
    Recording::completed(log)
}
