//! Top-down merge sort.
//!
//! Each merge announces its two runs, then records one comparison step and
//! one write step per element placed, and closes with a "merged" step.

use algoviz_core::{ArrayFrame, StepLog};

use super::record_complete;
use crate::recording::Recording;

pub fn merge_sort(input: &[i64]) -> Recording<ArrayFrame> {
    let mut arr = input.to_vec();
    let mut log = StepLog::new();
    if !arr.is_empty() {
        let high = arr.len() - 1;
        sort_range(&mut arr, 0, high, &mut log);
    }
    record_complete(&mut log, &arr);
    Recording::completed(log)
}

fn sort_range(arr: &mut [i64], low: usize, high: usize, log: &mut StepLog<ArrayFrame>) {
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    sort_range(arr, low, mid, log);
    sort_range(arr, mid + 1, high, log);
    merge(arr, low, mid, high, log);
}

fn merge(arr: &mut [i64], low: usize, mid: usize, high: usize, log: &mut StepLog<ArrayFrame>) {
    let left = arr[low..=mid].to_vec();
    let right = arr[mid + 1..=high].to_vec();
    let (mut i, mut j, mut k) = (0, 0, low);

    log.record(
        format!(
            "Merging [{low}-{mid}] and [{}-{high}]",
            mid + 1
        ),
        ArrayFrame::new(arr).with_range(low, high),
    );

    while i < left.len() && j < right.len() {
        let mut frame = ArrayFrame::new(arr).with_range(low, high);
        // Right-run elements have not been overwritten yet.
        frame.compared.push(mid + 1 + j);
        log.record(format!("Comparing {} and {}", left[i], right[j]), frame);

        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        log.record(
            format!("Writing {} to index {k}", arr[k]),
            ArrayFrame::new(arr).writing(k).with_range(low, high),
        );
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        arr[k] = value;
        log.record(
            format!("Writing {value} to index {k}"),
            ArrayFrame::new(arr).writing(k).with_range(low, high),
        );
        k += 1;
    }

    log.record(
        format!("Merged [{low}-{high}]"),
        ArrayFrame::new(arr).with_range(low, high),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_element_merge_transcript() {
        let rec = merge_sort(&[5, 2]);
        assert_eq!(
            rec.statuses(),
            vec![
                "Merging [0-0] and [1-1]",
                "Comparing 5 and 2",
                "Writing 2 to index 0",
                "Writing 5 to index 1",
                "Merged [0-1]",
                "Sorting complete in 6 steps",
            ]
        );
    }

    #[test]
    fn one_write_per_element_per_merge_level() {
        // Four elements: two merges of 2 and one of 4.
        let rec = merge_sort(&[4, 3, 2, 1]);
        let writes = rec
            .statuses()
            .iter()
            .filter(|s| s.starts_with("Writing"))
            .count();
        assert_eq!(writes, 8);
        let merged = rec
            .statuses()
            .iter()
            .filter(|s| s.starts_with("Merged"))
            .count();
        assert_eq!(merged, 3);
    }
}
