//! Comparison sorts.
//!
//! Every sort works on a copy of its input and records one step per
//! comparison and per swap, shift, or merge write, plus one step each time
//! an outer iteration (a pass, a partition, a merge, an extraction)
//! finishes. The final step always shows the fully sorted array.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

use algoviz_core::{ArrayFrame, StepLog};

/// Records the terminal "sorted" step.
pub(crate) fn record_complete(log: &mut StepLog<ArrayFrame>, array: &[i64]) {
    let status = format!("Sorting complete in {} steps", log.len() + 1);
    log.record(status, ArrayFrame::new(array).all_sorted());
}
