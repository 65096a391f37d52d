//! Keyboard commands accepted on stdin during `play`.

use algoviz_core::Speed;
use algoviz_playback::{ControlHandle, Mode, VisualizationSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Pause,
    /// Resumes a paused run, or replays an idle (reset) one.
    Resume,
    Stop,
    Reset,
    Faster,
    Slower,
}

pub const HELP: &str = "controls: p pause, r resume/replay, s stop, x reset, + faster, - slower";

impl Control {
    pub fn parse(line: &str) -> Option<Control> {
        match line.trim() {
            "p" | "pause" => Some(Control::Pause),
            "r" | "resume" => Some(Control::Resume),
            "s" | "stop" | "q" => Some(Control::Stop),
            "x" | "reset" => Some(Control::Reset),
            "+" | "faster" => Some(Control::Faster),
            "-" | "slower" => Some(Control::Slower),
            _ => None,
        }
    }

    /// Applies the command. Returns a line of feedback for stderr.
    pub fn apply(self, session: &mut VisualizationSession) -> Option<String> {
        match self {
            Control::Pause => {
                session.pause();
                Some("paused".to_string())
            }
            Control::Resume => {
                match session.controller() {
                    Some(controller) if controller.mode() == Mode::Idle => controller.start(),
                    _ => session.resume(),
                }
                None
            }
            Control::Stop => {
                session.stop();
                None
            }
            Control::Reset => {
                session.reset();
                Some("reset; press r to replay".to_string())
            }
            Control::Faster | Control::Slower => {
                if !session.config().live_pace {
                    return Some("speed is fixed for this run (use --live-pace)".to_string());
                }
                let speed = adjust(session.config().speed, self);
                session.set_speed(speed);
                Some(format!("speed {speed}"))
            }
        }
    }
}

fn adjust(speed: Speed, control: Control) -> Speed {
    match control {
        Control::Faster => speed.faster(),
        Control::Slower => speed.slower(),
        _ => speed,
    }
}
