//! Heap sort: build a max heap bottom-up, then repeatedly move the root to
//! the end of the shrinking heap.

use algoviz_core::{ArrayFrame, StepLog};

use super::record_complete;
use crate::recording::Recording;

struct HeapSort {
    arr: Vec<i64>,
    /// Start of the sorted tail.
    boundary: usize,
    log: StepLog<ArrayFrame>,
}

impl HeapSort {
    fn frame(&self) -> ArrayFrame {
        ArrayFrame::new(&self.arr).with_sorted(self.boundary..self.arr.len())
    }

    fn sift_down(&mut self, mut root: usize, size: usize) {
        loop {
            let mut largest = root;
            for child in [2 * root + 1, 2 * root + 2] {
                if child >= size {
                    continue;
                }
                self.log.record(
                    format!("Comparing {} with {}", self.arr[child], self.arr[largest]),
                    self.frame().comparing(child, largest),
                );
                if self.arr[child] > self.arr[largest] {
                    largest = child;
                }
            }
            if largest == root {
                return;
            }
            self.arr.swap(root, largest);
            self.log.record(
                format!(
                    "Heapify: swapped {} and {}",
                    self.arr[largest], self.arr[root]
                ),
                self.frame().swapping(root, largest),
            );
            root = largest;
        }
    }
}

pub fn heap_sort(input: &[i64]) -> Recording<ArrayFrame> {
    let n = input.len();
    let mut hs = HeapSort {
        arr: input.to_vec(),
        boundary: n,
        log: StepLog::new(),
    };

    for i in (0..n / 2).rev() {
        hs.sift_down(i, n);
        let frame = hs.frame();
        hs.log.record(format!("Heapified subtree at index {i}"), frame);
    }
    if n > 1 {
        let frame = hs.frame();
        hs.log.record("Max heap built", frame);
    }

    for end in (1..n).rev() {
        hs.arr.swap(0, end);
        hs.boundary = end;
        let frame = hs.frame().swapping(0, end);
        hs.log
            .record(format!("Extracted max {} to index {end}", hs.arr[end]), frame);
        hs.sift_down(0, end);
    }

    let HeapSort { arr, mut log, .. } = hs;
    record_complete(&mut log, &arr);
    Recording::completed(log)
}
