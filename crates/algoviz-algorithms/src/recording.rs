//! The output of one adapter run.

use algoviz_core::{Step, StepLog};
use serde::{Deserialize, Serialize};

/// How a recording ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The algorithm ran to completion. "Not found" and "no solution" are
    /// normal completions.
    Completed,
    /// A precondition did not hold (e.g. topological sort of an undirected
    /// graph). The recording holds a single explanatory step and playback
    /// completes without scheduling a timer.
    Unsatisfiable,
}

/// An ordered, immutable step sequence plus its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording<P> {
    pub steps: Vec<Step<P>>,
    pub outcome: Outcome,
}

impl<P> Recording<P> {
    pub fn completed(log: StepLog<P>) -> Self {
        Recording {
            steps: log.finish(),
            outcome: Outcome::Completed,
        }
    }

    /// A one-step recording explaining why the algorithm cannot run.
    pub fn unsatisfiable(status: impl Into<String>, payload: P) -> Self {
        Recording {
            steps: vec![Step::new(status, payload)],
            outcome: Outcome::Unsatisfiable,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step<P>> {
        self.steps.last()
    }

    /// The final payload, i.e. the state a full replay ends in.
    pub fn final_payload(&self) -> Option<&P> {
        self.steps.last().map(|s| &s.payload)
    }

    pub fn statuses(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.status.as_str()).collect()
    }

    /// Converts every payload, e.g. into the unified `Frame`.
    pub fn map_payload<Q>(self, f: impl Fn(P) -> Q) -> Recording<Q> {
        Recording {
            steps: self.steps.into_iter().map(|s| s.map(&f)).collect(),
            outcome: self.outcome,
        }
    }
}
