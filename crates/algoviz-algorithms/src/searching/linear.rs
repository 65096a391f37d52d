//! Linear search.
//!
//! One "checking" step per examined element, the match included, then a
//! terminal step reporting the found index or exhaustion. The search is
//! also offered as a lazy iterator so playback can start before the scan
//! is done.

use algoviz_core::{ArrayFrame, Step};

use crate::recording::{Outcome, Recording};

/// Lazily produced linear-search steps.
#[derive(Debug, Clone)]
pub struct LinearSearchSteps {
    array: Vec<i64>,
    target: i64,
    next: usize,
    done: bool,
}

impl LinearSearchSteps {
    pub fn new(array: &[i64], target: i64) -> Self {
        LinearSearchSteps {
            array: array.to_vec(),
            target,
            next: 0,
            done: false,
        }
    }

    fn frame(&self) -> ArrayFrame {
        let mut frame = ArrayFrame::new(&self.array).with_target(self.target);
        frame.examined = (0..self.next).collect();
        frame
    }
}

impl Iterator for LinearSearchSteps {
    type Item = Step<ArrayFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // The previous step checked `next - 1`; report a match there.
        if let Some(last) = self.next.checked_sub(1) {
            if self.array[last] == self.target {
                self.done = true;
                let mut frame = self.frame();
                frame.examined.pop();
                frame.current = Some(last);
                frame.found = Some(last);
                return Some(Step::new(
                    format!("Found {} at index {last} in {} steps", self.target, self.next),
                    frame,
                ));
            }
        }

        if self.next >= self.array.len() {
            self.done = true;
            return Some(Step::new(
                format!(
                    "Element {} not found after {} steps",
                    self.target,
                    self.array.len()
                ),
                self.frame(),
            ));
        }

        let index = self.next;
        let mut frame = self.frame();
        frame.current = Some(index);
        frame.compared.push(index);
        self.next += 1;
        Some(Step::new(
            format!("Checking index {index} ({})", self.array[index]),
            frame,
        ))
    }
}

/// Records a full linear search of `array` for `target`.
pub fn linear_search(array: &[i64], target: i64) -> Recording<ArrayFrame> {
    Recording {
        steps: LinearSearchSteps::new(array, target).collect(),
        outcome: Outcome::Completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_every_index_up_to_the_match() {
        let rec = linear_search(&[19, 85, 36, 68, 31, 41, 29], 41);
        let statuses = rec.statuses();
        assert_eq!(statuses.len(), 7);
        for (i, status) in statuses[..6].iter().enumerate() {
            assert!(status.starts_with(&format!("Checking index {i} ")), "{status}");
        }
        assert_eq!(statuses[6], "Found 41 at index 5 in 6 steps");
        assert_eq!(rec.final_payload().unwrap().found, Some(5));
    }

    #[test]
    fn exhaustion_reports_not_found() {
        let rec = linear_search(&[1, 2, 3], 9);
        assert_eq!(rec.len(), 4);
        assert_eq!(rec.last().unwrap().status, "Element 9 not found after 3 steps");
        assert_eq!(rec.final_payload().unwrap().found, None);
        assert_eq!(rec.final_payload().unwrap().examined, vec![0, 1, 2]);
    }

    #[test]
    fn empty_array_yields_single_step() {
        let rec = linear_search(&[], 4);
        assert_eq!(rec.statuses(), vec!["Element 4 not found after 0 steps"]);
    }

    #[test]
    fn lazy_iterator_stops_after_terminal_step() {
        let mut steps = LinearSearchSteps::new(&[7], 7);
        assert!(steps.next().is_some());
        assert!(steps.next().unwrap().payload.found.is_some());
        assert!(steps.next().is_none());
        assert!(steps.next().is_none());
    }
}
