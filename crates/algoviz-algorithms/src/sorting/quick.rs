//! Quick sort with Lomuto partitioning (last element as pivot).

use algoviz_core::{ArrayFrame, StepLog};

use super::record_complete;
use crate::recording::Recording;

struct QuickSort {
    arr: Vec<i64>,
    /// Indices known to hold their final value.
    placed: Vec<usize>,
    log: StepLog<ArrayFrame>,
}

impl QuickSort {
    fn frame(&self) -> ArrayFrame {
        ArrayFrame::new(&self.arr).with_sorted(self.placed.iter().copied())
    }

    fn sort(&mut self, low: usize, high: usize) {
        if low > high {
            return;
        }
        if low == high {
            self.placed.push(low);
            return;
        }
        let pi = self.partition(low, high);
        if pi > low {
            self.sort(low, pi - 1);
        }
        self.sort(pi + 1, high);
    }

    fn partition(&mut self, low: usize, high: usize) -> usize {
        let pivot = self.arr[high];
        self.log.record(
            format!("Partitioning [{low}-{high}] with pivot {pivot}"),
            self.frame().with_pivot(high).with_range(low, high),
        );

        // Next slot for an element smaller than the pivot.
        let mut store = low;
        for j in low..high {
            self.log.record(
                format!("Comparing {} with pivot {pivot}", self.arr[j]),
                self.frame()
                    .comparing(j, high)
                    .with_pivot(high)
                    .with_range(low, high),
            );
            if self.arr[j] < pivot {
                if store != j {
                    self.arr.swap(store, j);
                    self.log.record(
                        format!("Swapped {} and {}", self.arr[store], self.arr[j]),
                        self.frame()
                            .swapping(store, j)
                            .with_pivot(high)
                            .with_range(low, high),
                    );
                }
                store += 1;
            }
        }

        self.arr.swap(store, high);
        self.placed.push(store);
        self.log.record(
            format!("Pivot {pivot} placed at index {store}"),
            self.frame().swapping(store, high).with_range(low, high),
        );
        store
    }
}

pub fn quick_sort(input: &[i64]) -> Recording<ArrayFrame> {
    let mut qs = QuickSort {
        arr: input.to_vec(),
        placed: Vec::new(),
        log: StepLog::new(),
    };
    if !qs.arr.is_empty() {
        let high = qs.arr.len() - 1;
        qs.sort(0, high);
    }
    let QuickSort { arr, mut log, .. } = qs;
    record_complete(&mut log, &arr);
    Recording::completed(log)
}
