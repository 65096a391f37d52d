//! Where emitted steps go.

use algoviz_core::Step;
use tokio::sync::mpsc;

/// Status line carried by the reset notification.
pub const RESET_STATUS: &str = "Reset to initial state";

/// Receives steps from a controller.
///
/// Callbacks run on the playback task while the controller's state is
/// locked, so they must be quick and must not call back into the
/// controller. Forward to a channel ([`ChannelSink`]) when the consumer
/// needs to do either.
pub trait StepSink<P>: Send {
    /// Called once per step, in recorded order, with the step's index.
    fn on_step(&mut self, index: usize, step: &Step<P>);

    /// Called once after the last step's delay has elapsed. Never called
    /// for a stopped or reset run.
    fn on_complete(&mut self);

    /// Called on reset with a [`RESET_STATUS`] step whose payload is the
    /// first step's payload, when the controller has seen one.
    fn on_reset(&mut self, reset: &Step<Option<P>>) {
        let _ = reset;
    }
}

/// Everything a controller can tell a sink, as an owned value.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent<P> {
    Step { index: usize, step: Step<P> },
    Complete,
    Reset(Step<Option<P>>),
}

/// Forwards every callback into an unbounded channel.
#[derive(Debug)]
pub struct ChannelSink<P> {
    tx: mpsc::UnboundedSender<PlaybackEvent<P>>,
}

impl<P> ChannelSink<P> {
    pub fn new(tx: mpsc::UnboundedSender<PlaybackEvent<P>>) -> Self {
        ChannelSink { tx }
    }

    /// A sink plus the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<PlaybackEvent<P>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChannelSink { tx }, rx)
    }
}

// Sends fail only once the receiver is gone; the event is dropped.
impl<P: Clone + Send> StepSink<P> for ChannelSink<P> {
    fn on_step(&mut self, index: usize, step: &Step<P>) {
        let _ = self.tx.send(PlaybackEvent::Step {
            index,
            step: step.clone(),
        });
    }

    fn on_complete(&mut self) {
        let _ = self.tx.send(PlaybackEvent::Complete);
    }

    fn on_reset(&mut self, reset: &Step<Option<P>>) {
        let _ = self.tx.send(PlaybackEvent::Reset(reset.clone()));
    }
}
