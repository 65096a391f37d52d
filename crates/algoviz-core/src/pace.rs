//! Playback pacing: a validated speed factor and per-algorithm base delays.
//!
//! The delay before the next step is `base / speed`, so speed `2.0` plays
//! twice as fast and `0.5` half as fast. Solution steps use a separate,
//! longer base so an accepted solution stays on screen.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::step::Emphasis;

/// Default hold for backtracking solution steps.
pub const SOLUTION_HOLD_MILLIS: u64 = 5000;

/// A playback speed factor within [`Speed::MIN`]..=[`Speed::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Speed(f64);

impl Speed {
    pub const NORMAL: Speed = Speed(1.0);
    pub const MIN: Speed = Speed(0.25);
    pub const MAX: Speed = Speed(10.0);

    pub fn new(value: f64) -> Result<Self, CoreError> {
        // NaN fails both comparisons.
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Ok(Speed(value))
        } else {
            Err(CoreError::InvalidSpeed { value })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Doubles the speed, capped at [`Speed::MAX`].
    pub fn faster(self) -> Speed {
        Speed((self.0 * 2.0).min(Self::MAX.0))
    }

    /// Halves the speed, floored at [`Speed::MIN`].
    pub fn slower(self) -> Speed {
        Speed((self.0 / 2.0).max(Self::MIN.0))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::NORMAL
    }
}

impl TryFrom<f64> for Speed {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Speed::new(value)
    }
}

impl From<Speed> for f64 {
    fn from(speed: Speed) -> f64 {
        speed.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// Base delays for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pace {
    pub base_millis: u64,
    pub solution_millis: u64,
}

impl Pace {
    pub const fn new(base_millis: u64) -> Self {
        Pace {
            base_millis,
            solution_millis: SOLUTION_HOLD_MILLIS,
        }
    }

    pub const fn with_solution_hold(base_millis: u64, solution_millis: u64) -> Self {
        Pace {
            base_millis,
            solution_millis,
        }
    }

    /// Delay after a step with the given emphasis at `speed`.
    pub fn delay(&self, emphasis: Emphasis, speed: Speed) -> Duration {
        let base = match emphasis {
            Emphasis::Normal => self.base_millis,
            Emphasis::Solution => self.solution_millis,
        };
        let secs = base as f64 / 1000.0 / speed.get();
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

impl Default for Pace {
    fn default() -> Self {
        Pace::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_rejects_non_positive_and_non_finite() {
        assert!(Speed::new(0.0).is_err());
        assert!(Speed::new(-1.0).is_err());
        assert!(Speed::new(f64::NAN).is_err());
        assert!(Speed::new(f64::INFINITY).is_err());
        assert_eq!(Speed::new(1.5).unwrap().get(), 1.5);
    }

    #[test]
    fn speed_is_bounded_to_the_supported_range() {
        assert!(Speed::new(1e-20).is_err());
        assert!(Speed::new(0.2).is_err());
        assert!(Speed::new(10.5).is_err());
        assert_eq!(Speed::new(0.25).unwrap(), Speed::MIN);
        assert_eq!(Speed::new(10.0).unwrap(), Speed::MAX);

        let err = Speed::new(1e-20).unwrap_err();
        assert!(err.to_string().contains("between 0.25 and 10"));
    }

    #[test]
    fn slowest_delay_does_not_overflow() {
        let pace = Pace::with_solution_hold(u64::MAX, u64::MAX);
        let delay = pace.delay(Emphasis::Solution, Speed::MIN);
        assert!(delay > Duration::from_secs(u64::MAX / 1000));
        assert_eq!(
            Pace::new(1000).delay(Emphasis::Normal, Speed::MIN),
            Duration::from_millis(4000)
        );
    }

    #[test]
    fn delay_scales_inversely_with_speed() {
        let pace = Pace::new(1000);
        assert_eq!(
            pace.delay(Emphasis::Normal, Speed::NORMAL),
            Duration::from_millis(1000)
        );
        assert_eq!(
            pace.delay(Emphasis::Normal, Speed::new(2.0).unwrap()),
            Duration::from_millis(500)
        );
        assert_eq!(
            pace.delay(Emphasis::Solution, Speed::new(2.0).unwrap()),
            Duration::from_millis(2500)
        );
    }

    #[test]
    fn faster_and_slower_are_clamped() {
        assert_eq!(Speed::MAX.faster(), Speed::MAX);
        assert_eq!(Speed::MIN.slower(), Speed::MIN);
        assert_eq!(Speed::NORMAL.faster().get(), 2.0);

        // Live pace doubling from 1x lands on the top of the UI range.
        let mut speed = Speed::NORMAL;
        for _ in 0..4 {
            speed = speed.faster();
        }
        assert_eq!(speed, Speed::MAX);
        assert_eq!(Speed::new(8.0).unwrap().faster().get(), 10.0);
    }

    #[test]
    fn speed_deserialization_validates() {
        let ok: Speed = serde_json::from_str("2.0").unwrap();
        assert_eq!(ok.get(), 2.0);
        assert!(serde_json::from_str::<Speed>("0.0").is_err());
    }
}
