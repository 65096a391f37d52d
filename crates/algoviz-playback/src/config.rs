//! Playback configuration.
//!
//! Read from the environment:
//! - `ALGOVIZ_SPEED`: default speed factor (default: `1.0`)
//! - `ALGOVIZ_LIVE_PACE`: allow speed changes during playback
//!   (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`; default: `false`)
//!
//! Command-line flags override both.

use algoviz_core::Speed;
use serde::{Deserialize, Serialize};

use crate::error::PlaybackError;
use crate::handle::Capabilities;

pub const SPEED_VAR: &str = "ALGOVIZ_SPEED";
pub const LIVE_PACE_VAR: &str = "ALGOVIZ_LIVE_PACE";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    pub speed: Speed,
    pub live_pace: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            speed: Speed::NORMAL,
            live_pace: false,
        }
    }
}

impl PlaybackConfig {
    pub fn from_env() -> Result<Self, PlaybackError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Missing
    /// variables fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PlaybackError> {
        let mut config = PlaybackConfig::default();

        if let Some(raw) = lookup(SPEED_VAR) {
            let value: f64 = raw.trim().parse().map_err(|_| PlaybackError::Config {
                key: SPEED_VAR,
                reason: format!("not a number: {raw:?}"),
            })?;
            config.speed = Speed::new(value).map_err(|e| PlaybackError::Config {
                key: SPEED_VAR,
                reason: e.to_string(),
            })?;
        }

        if let Some(raw) = lookup(LIVE_PACE_VAR) {
            config.live_pace = parse_flag(&raw).ok_or_else(|| PlaybackError::Config {
                key: LIVE_PACE_VAR,
                reason: format!("expected a boolean, got {raw:?}"),
            })?;
        }

        Ok(config)
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            live_pace: self.live_pace,
            ..Capabilities::default()
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = PlaybackConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PlaybackConfig::default());
        assert!(!config.capabilities().live_pace);
    }

    #[test]
    fn reads_speed_and_live_pace() {
        let config =
            PlaybackConfig::from_lookup(lookup(&[(SPEED_VAR, "2.5"), (LIVE_PACE_VAR, "Yes")]))
                .unwrap();
        assert_eq!(config.speed.get(), 2.5);
        assert!(config.live_pace);
        assert!(config.capabilities().live_pace);
        assert!(config.capabilities().supports_pause);
    }

    #[test]
    fn rejects_bad_values() {
        let err = PlaybackConfig::from_lookup(lookup(&[(SPEED_VAR, "fast")])).unwrap_err();
        assert!(matches!(err, PlaybackError::Config { key: SPEED_VAR, .. }));

        let err = PlaybackConfig::from_lookup(lookup(&[(SPEED_VAR, "-1")])).unwrap_err();
        assert!(err.to_string().contains("ALGOVIZ_SPEED"));

        let err = PlaybackConfig::from_lookup(lookup(&[(LIVE_PACE_VAR, "maybe")])).unwrap_err();
        assert!(matches!(err, PlaybackError::Config { key: LIVE_PACE_VAR, .. }));
    }

    #[test]
    fn rejects_speeds_outside_the_playable_range() {
        for raw in ["1e-20", "0.1", "11", "1e300"] {
            let err = PlaybackConfig::from_lookup(lookup(&[(SPEED_VAR, raw)])).unwrap_err();
            assert!(
                matches!(err, PlaybackError::Config { key: SPEED_VAR, .. }),
                "{raw} should be rejected"
            );
        }
        let config = PlaybackConfig::from_lookup(lookup(&[(SPEED_VAR, "10")])).unwrap();
        assert_eq!(config.speed, Speed::MAX);
    }
}
