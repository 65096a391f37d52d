//! Selection sort.

use algoviz_core::{ArrayFrame, StepLog};

use super::record_complete;
use crate::recording::Recording;

pub fn selection_sort(input: &[i64]) -> Recording<ArrayFrame> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut log = StepLog::new();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            log.record(
                format!("Comparing {} with current minimum {}", arr[j], arr[min]),
                ArrayFrame::new(&arr)
                    .comparing(j, min)
                    .with_min(min)
                    .with_sorted(0..i),
            );
            if arr[j] < arr[min] {
                min = j;
                log.record(
                    format!("New minimum {} at index {min}", arr[min]),
                    ArrayFrame::new(&arr).with_min(min).with_sorted(0..i),
                );
            }
        }

        if min != i {
            arr.swap(i, min);
            log.record(
                format!("Swapped {} and {}", arr[i], arr[min]),
                ArrayFrame::new(&arr).swapping(i, min).with_sorted(0..i),
            );
        }
        log.record(
            format!("Pass {} completed: {} placed at index {i}", i + 1, arr[i]),
            ArrayFrame::new(&arr).with_sorted(0..=i),
        );
    }

    record_complete(&mut log, &arr);
    Recording::completed(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_places_minimum_at_front() {
        let rec = selection_sort(&[4, 1, 3]);
        let first_pass = rec
            .steps
            .iter()
            .find(|s| s.status.starts_with("Pass 1"))
            .unwrap();
        assert_eq!(first_pass.payload.array[0], 1);
        assert_eq!(first_pass.payload.sorted, vec![0]);
    }

    #[test]
    fn no_swap_step_when_minimum_already_in_place() {
        let rec = selection_sort(&[1, 2]);
        assert_eq!(
            rec.statuses(),
            vec![
                "Comparing 2 with current minimum 1",
                "Pass 1 completed: 1 placed at index 0",
                "Sorting complete in 3 steps",
            ]
        );
    }
}
