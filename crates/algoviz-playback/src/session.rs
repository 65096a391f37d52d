//! The currently selected algorithm, its input, and its running playback.
//!
//! A session runs at most one playback at a time. Starting a new run stops
//! the previous one first, and the input is snapshotted at run start so
//! [`VisualizationSession::reset`] can undo edits made while it played.

use algoviz_algorithms::{AlgorithmId, AlgorithmInput};
use algoviz_core::{Frame, Speed};

use crate::config::PlaybackConfig;
use crate::controller::PlaybackController;
use crate::error::PlaybackError;
use crate::handle::{ControlHandle, Mode, RunId};
use crate::sink::StepSink;
use crate::visualize::visualize_with;

#[derive(Default)]
pub struct VisualizationSession {
    config: PlaybackConfig,
    algorithm: Option<AlgorithmId>,
    input: Option<AlgorithmInput>,
    /// Input as it was when the current run started.
    snapshot: Option<AlgorithmInput>,
    current: Option<PlaybackController<Frame>>,
}

impl VisualizationSession {
    pub fn new(config: PlaybackConfig) -> Self {
        VisualizationSession {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Selects an algorithm and its input, stopping any running playback.
    pub fn select(&mut self, algorithm: AlgorithmId, input: AlgorithmInput) {
        self.stop();
        self.current = None;
        self.snapshot = None;
        self.algorithm = Some(algorithm);
        self.input = Some(input);
    }

    pub fn algorithm(&self) -> Option<AlgorithmId> {
        self.algorithm
    }

    pub fn input(&self) -> Option<&AlgorithmInput> {
        self.input.as_ref()
    }

    /// Edits made here are undone by [`reset`](Self::reset).
    pub fn input_mut(&mut self) -> Option<&mut AlgorithmInput> {
        self.input.as_mut()
    }

    pub fn controller(&self) -> Option<&PlaybackController<Frame>> {
        self.current.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.current.as_ref().map_or(Mode::Idle, |c| c.mode())
    }

    /// Stops the previous run, snapshots the input, and starts playing.
    pub fn start<S>(&mut self, sink: S) -> Result<RunId, PlaybackError>
    where
        S: StepSink<Frame> + 'static,
    {
        let (algorithm, input) = match (self.algorithm, &self.input) {
            (Some(algorithm), Some(input)) => (algorithm, input),
            _ => return Err(PlaybackError::NothingSelected),
        };
        if let Some(previous) = self.current.take() {
            previous.stop();
        }

        let controller = visualize_with(algorithm, input, &self.config, sink)?;
        let run_id = controller.run_id();
        self.snapshot = Some(input.clone());
        self.current = Some(controller);
        tracing::info!("Session started {} as run {}", algorithm, run_id);
        Ok(run_id)
    }

    pub fn pause(&self) {
        if let Some(controller) = &self.current {
            controller.pause();
        }
    }

    pub fn resume(&self) {
        if let Some(controller) = &self.current {
            controller.resume();
        }
    }

    pub fn stop(&self) {
        if let Some(controller) = &self.current {
            controller.stop();
        }
    }

    /// Resets the current run and restores the run-start input.
    pub fn reset(&mut self) {
        if let Some(controller) = &self.current {
            controller.reset();
        }
        if let Some(snapshot) = &self.snapshot {
            self.input = Some(snapshot.clone());
        }
    }

    /// Changes the session default and, with live pace, the running
    /// playback.
    pub fn set_speed(&mut self, speed: Speed) {
        self.config.speed = speed;
        if let Some(controller) = &self.current {
            controller.set_speed(speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{ChannelSink, PlaybackEvent};
    use algoviz_algorithms::AlgorithmError;
    use std::time::Duration;

    fn array(values: &[i64], target: Option<i64>) -> AlgorithmInput {
        AlgorithmInput::Array {
            values: values.to_vec(),
            target,
        }
    }

    #[test]
    fn start_needs_a_selection() {
        let mut session = VisualizationSession::default();
        let (sink, _rx) = ChannelSink::channel();
        assert!(matches!(
            session.start(sink),
            Err(PlaybackError::NothingSelected)
        ));
    }

    #[test]
    fn bad_input_surfaces_as_algorithm_error() {
        let mut session = VisualizationSession::default();
        session.select(AlgorithmId::BinarySearch, array(&[1, 2, 3], None));
        let (sink, _rx) = ChannelSink::channel();
        let err = session.start(sink).unwrap_err();
        assert!(matches!(
            err,
            PlaybackError::Algorithm(AlgorithmError::MissingParameter { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn starting_again_stops_the_previous_run() {
        let mut session = VisualizationSession::default();
        session.select(AlgorithmId::BubbleSort, array(&[5, 4, 3, 2, 1], None));

        let (first, mut first_rx) = ChannelSink::channel();
        let first_run = session.start(first).unwrap();
        assert!(matches!(first_rx.recv().await, Some(PlaybackEvent::Step { index: 0, .. })));

        let (second, mut second_rx) = ChannelSink::channel();
        let second_run = session.start(second).unwrap();
        assert_ne!(first_run, second_run);

        // The first sink is released with its stopped controller.
        assert!(first_rx.recv().await.is_none());
        assert!(matches!(second_rx.recv().await, Some(PlaybackEvent::Step { index: 0, .. })));
        assert_eq!(session.mode(), Mode::Playing);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_restores_the_run_start_input() {
        let mut session = VisualizationSession::default();
        session.select(AlgorithmId::QuickSort, array(&[3, 1, 2], None));
        let (sink, mut rx) = ChannelSink::channel();
        session.start(sink).unwrap();
        assert!(rx.recv().await.is_some());

        if let Some(AlgorithmInput::Array { values, .. }) = session.input_mut() {
            values.push(99);
        }
        session.reset();
        assert_eq!(session.input(), Some(&array(&[3, 1, 2], None)));
        assert_eq!(session.mode(), Mode::Idle);

        match rx.recv().await {
            Some(PlaybackEvent::Reset(step)) => {
                let frame = step.payload.unwrap();
                assert_eq!(frame.as_array().unwrap().array, vec![3, 1, 2]);
            }
            other => panic!("expected reset, got {other:?}"),
        }
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn pause_and_speed_pass_through() {
        let mut session = VisualizationSession::new(PlaybackConfig {
            speed: Speed::NORMAL,
            live_pace: true,
        });
        session.select(AlgorithmId::LinearSearch, array(&[4, 5, 6], Some(6)));
        let (sink, mut rx) = ChannelSink::channel();
        session.start(sink).unwrap();
        assert!(rx.recv().await.is_some());

        session.pause();
        assert_eq!(session.mode(), Mode::Paused);
        session.set_speed(Speed::new(2.0).unwrap());
        assert_eq!(session.controller().unwrap().speed().get(), 2.0);
        session.resume();
        assert_eq!(session.mode(), Mode::Playing);
        session.stop();
        assert_eq!(session.mode(), Mode::Stopped);
    }
}
