//! Step records and the recorder adapters write them through.
//!
//! A [`Step`] pairs an owned payload snapshot with a human-readable status
//! line. Steps are created once, in order, during a single synchronous
//! adapter run and are immutable afterwards. Because the payload is owned
//! by value, mutating the adapter's working state after recording can never
//! reach back into a recorded step.

use serde::{Deserialize, Serialize};

/// How strongly a step should be held on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Regular step, shown for the algorithm's base delay.
    #[default]
    Normal,
    /// An accepted solution (backtracking). Held for the solution delay.
    Solution,
}

/// One immutable snapshot plus its status annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<P> {
    /// Status text. May span several lines.
    pub status: String,
    /// Algorithm-specific snapshot.
    pub payload: P,
    #[serde(default)]
    pub emphasis: Emphasis,
}

impl<P> Step<P> {
    pub fn new(status: impl Into<String>, payload: P) -> Self {
        Step {
            status: status.into(),
            payload,
            emphasis: Emphasis::Normal,
        }
    }

    pub fn solution(status: impl Into<String>, payload: P) -> Self {
        Step {
            status: status.into(),
            payload,
            emphasis: Emphasis::Solution,
        }
    }

    pub fn is_solution(&self) -> bool {
        self.emphasis == Emphasis::Solution
    }

    /// Converts the payload, keeping status and emphasis.
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> Step<Q> {
        Step {
            status: self.status,
            payload: f(self.payload),
            emphasis: self.emphasis,
        }
    }
}

/// Append-only step recorder.
///
/// Adapters call [`StepLog::record`] with a freshly built payload each time
/// something observable happens, then hand the finished log to the caller
/// with [`StepLog::finish`].
#[derive(Debug, Clone)]
pub struct StepLog<P> {
    steps: Vec<Step<P>>,
}

impl<P> Default for StepLog<P> {
    fn default() -> Self {
        StepLog { steps: Vec::new() }
    }
}

impl<P> StepLog<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, status: impl Into<String>, payload: P) {
        self.steps.push(Step::new(status, payload));
    }

    pub fn record_solution(&mut self, status: impl Into<String>, payload: P) {
        self.steps.push(Step::solution(status, payload));
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

    pub fn steps(&self) -> &[Step<P>] {
        &self.steps
    }

    pub fn finish(self) -> Vec<Step<P>> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_payloads_are_independent_of_working_state() {
        let mut working = vec![3, 1, 2];
        let mut log = StepLog::new();
        log.record("before", working.clone());
        working.sort();
        log.record("after", working.clone());
        working.clear();

        let steps = log.finish();
        assert_eq!(steps[0].payload, vec![3, 1, 2]);
        assert_eq!(steps[1].payload, vec![1, 2, 3]);
    }

    #[test]
    fn solution_steps_carry_emphasis() {
        let mut log = StepLog::new();
        log.record("try", ());
        log.record_solution("found", ());
        assert_eq!(log.len(), 2);
        assert!(!log.steps()[0].is_solution());
        assert!(log.last().unwrap().is_solution());
    }

    #[test]
    fn map_keeps_status_and_emphasis() {
        let step = Step::solution("done", 2).map(|n| n * 10);
        assert_eq!(step.status, "done");
        assert_eq!(step.payload, 20);
        assert_eq!(step.emphasis, Emphasis::Solution);
    }

    #[test]
    fn emphasis_defaults_when_missing_from_json() {
        let step: Step<u8> = serde_json::from_str(r#"{"status":"x","payload":1}"#).unwrap();
        assert_eq!(step.emphasis, Emphasis::Normal);
    }
}
