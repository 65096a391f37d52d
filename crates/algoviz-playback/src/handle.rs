//! The control surface shared by every playback controller.

use std::fmt;

use algoviz_core::Speed;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Playback lifecycle.
///
/// `Idle → Playing ⇄ Paused → (Finished | Stopped)`. `Finished` and
/// `Stopped` are terminal until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Idle,
    Playing,
    Paused,
    Stopped,
    Finished,
}

impl Mode {
    pub fn is_terminal(self) -> bool {
        matches!(self, Mode::Stopped | Mode::Finished)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Idle => "idle",
            Mode::Playing => "playing",
            Mode::Paused => "paused",
            Mode::Stopped => "stopped",
            Mode::Finished => "finished",
        })
    }
}

/// What a controller supports. Unsupported operations are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub supports_pause: bool,
    pub supports_reset: bool,
    /// Speed may change mid-run; the new speed applies from the next delay.
    pub live_pace: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities {
            supports_pause: true,
            supports_reset: true,
            live_pace: false,
        }
    }
}

/// Identifies one playback run in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        RunId(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pause/resume/stop/reset against a running playback.
///
/// All operations are synchronous and safe to call in any mode; calls that
/// make no sense in the current mode (pausing a paused run, stopping a
/// finished one) do nothing.
pub trait ControlHandle: Send + Sync {
    /// Freezes the cursor. No-op unless playing.
    fn pause(&self);
    /// Continues from the frozen cursor. No-op unless paused.
    fn resume(&self);
    /// Cancels the pending timer. No step and no completion is delivered
    /// after this returns. Idempotent.
    fn stop(&self);
    /// Stops, then notifies the sink with a reset step.
    fn reset(&self);
    /// Changes speed for the next delay. No-op without `live_pace`.
    fn set_speed(&self, speed: Speed);
    fn capabilities(&self) -> Capabilities;
    fn mode(&self) -> Mode;
}
