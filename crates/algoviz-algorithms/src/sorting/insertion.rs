//! Insertion sort.

use algoviz_core::{ArrayFrame, StepLog};

use super::record_complete;
use crate::recording::Recording;

pub fn insertion_sort(input: &[i64]) -> Recording<ArrayFrame> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut log = StepLog::new();

    for i in 1..n {
        let key = arr[i];
        log.record(
            format!("Inserting {key} from position {i}"),
            ArrayFrame::new(&arr).with_key(i).with_sorted(0..i),
        );

        let mut j = i;
        while j > 0 {
            log.record(
                format!("Comparing {} with key {key}", arr[j - 1]),
                ArrayFrame::new(&arr)
                    .comparing(j - 1, j)
                    .with_key(j)
                    .with_sorted(0..i),
            );
            if arr[j - 1] <= key {
                break;
            }
            arr[j] = arr[j - 1];
            log.record(
                format!("Shifting {} from {} to {j}", arr[j], j - 1),
                ArrayFrame::new(&arr).writing(j).with_key(j - 1).with_sorted(0..i),
            );
            j -= 1;
        }

        arr[j] = key;
        log.record(
            format!("Inserted {key} at position {j}"),
            ArrayFrame::new(&arr).writing(j).with_sorted(0..=i),
        );
    }

    record_complete(&mut log, &arr);
    Recording::completed(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_larger_elements_right() {
        let rec = insertion_sort(&[2, 1]);
        assert_eq!(
            rec.statuses(),
            vec![
                "Inserting 1 from position 1",
                "Comparing 2 with key 1",
                "Shifting 2 from 0 to 1",
                "Inserted 1 at position 0",
                "Sorting complete in 5 steps",
            ]
        );
        // Mid-shift the key is held aside, so the array shows a duplicate.
        assert_eq!(rec.steps[2].payload.array, vec![2, 2]);
    }

    #[test]
    fn already_placed_key_needs_one_comparison() {
        let rec = insertion_sort(&[1, 2]);
        assert_eq!(rec.len(), 4);
    }
}
