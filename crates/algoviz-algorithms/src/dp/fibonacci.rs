//! Top-down memoized Fibonacci.
//!
//! The memo is a keyed table (`n -> fib(n)`). One step per subproblem:
//! base cases, memo hits, the split into two recursive calls, and each
//! computed value. Values saturate at `i64::MAX` rather than overflow.

use std::collections::BTreeMap;

use algoviz_core::{DpFrame, DpTable, GridPos, StepLog};

use crate::recording::Recording;

struct Memo {
    memo: BTreeMap<u64, i64>,
    log: StepLog<DpFrame>,
}

impl Memo {
    fn frame(&self, current: Option<u64>, dependencies: &[u64]) -> DpFrame {
        let mut frame = DpFrame::new(DpTable::Keyed(self.memo.clone()));
        frame.current = current.map(|n| GridPos::new(0, n as usize));
        frame.dependencies = dependencies
            .iter()
            .map(|&n| GridPos::new(0, n as usize))
            .collect();
        frame
    }

    fn fib(&mut self, n: u64) -> i64 {
        if n <= 1 {
            self.memo.insert(n, n as i64);
            let frame = self.frame(Some(n), &[]);
            self.log.record(format!("Base case: fib({n}) = {n}"), frame);
            return n as i64;
        }
        if let Some(&value) = self.memo.get(&n) {
            let frame = self.frame(Some(n), &[]);
            self.log
                .record(format!("Using memoized value: fib({n}) = {value}"), frame);
            return value;
        }

        let frame = self.frame(Some(n), &[n - 1, n - 2]);
        self.log.record(
            format!("Calculating fib({n}) = fib({}) + fib({})", n - 1, n - 2),
            frame,
        );
        let left = self.fib(n - 1);
        let right = self.fib(n - 2);
        let value = left.saturating_add(right);
        self.memo.insert(n, value);
        let frame = self.frame(Some(n), &[n - 1, n - 2]);
        self.log
            .record(format!("Computed fib({n}) = {left} + {right} = {value}"), frame);
        value
    }
}

pub fn fibonacci(n: u64) -> Recording<DpFrame> {
    let mut memo = Memo {
        memo: BTreeMap::new(),
        log: StepLog::new(),
    };
    let frame = memo.frame(None, &[]);
    memo.log
        .record(format!("Starting Fibonacci calculation for fib({n})"), frame);

    let result = memo.fib(n);

    let mut frame = memo.frame(None, &[]);
    frame.result = Some(result);
    let Memo { mut log, .. } = memo;
    log.record(format!("Final result: fib({n}) = {result}"), frame);
    Recording::completed(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(n: u64) -> i64 {
        let (mut a, mut b) = (0i64, 1i64);
        for _ in 0..n {
            (a, b) = (b, a + b);
        }
        a
    }

    #[test]
    fn matches_iterative_reference() {
        for n in 0..30 {
            let rec = fibonacci(n);
            assert_eq!(rec.final_payload().unwrap().result, Some(reference(n)), "n={n}");
        }
    }

    #[test]
    fn small_transcript() {
        let rec = fibonacci(3);
        assert_eq!(
            rec.statuses(),
            vec![
                "Starting Fibonacci calculation for fib(3)",
                "Calculating fib(3) = fib(2) + fib(1)",
                "Calculating fib(2) = fib(1) + fib(0)",
                "Base case: fib(1) = 1",
                "Base case: fib(0) = 0",
                "Computed fib(2) = 1 + 0 = 1",
                "Base case: fib(1) = 1",
                "Computed fib(3) = 1 + 1 = 2",
                "Final result: fib(3) = 2",
            ]
        );
    }

    #[test]
    fn memo_hits_are_recorded() {
        let rec = fibonacci(5);
        assert!(rec
            .statuses()
            .contains(&"Using memoized value: fib(3) = 2"));
        let DpTable::Keyed(memo) = &rec.final_payload().unwrap().table else {
            panic!("expected keyed table");
        };
        assert_eq!(memo.len(), 6);
    }
}
