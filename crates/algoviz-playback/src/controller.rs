//! Timer-driven step replay.
//!
//! A [`PlaybackController`] owns a [`StepSource`] and a [`StepSink`] and
//! emits one step at a time on a tokio task. The first step goes out as
//! soon as playback starts; each following step waits for the previous
//! step's delay (`Pace::delay(emphasis, speed)`), and completion waits for
//! the last step's delay.
//!
//! Steps are emitted while holding the state lock and only in `Playing`
//! mode. `stop()` flips the mode under the same lock, so once it returns
//! nothing else reaches the sink even if the aborted task has not been
//! torn down yet. Each `start` also bumps a run generation, and a task
//! whose generation is stale exits without emitting, so a task left over
//! from before a `reset` cannot interleave with the restarted run.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use algoviz_core::{Pace, Speed, Step};
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;

use crate::handle::{Capabilities, ControlHandle, Mode, RunId};
use crate::sink::{StepSink, RESET_STATUS};
use crate::source::StepSource;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

struct State<P> {
    mode: Mode,
    cursor: usize,
    speed: Speed,
    source: StepSource<P>,
    /// Payload of step 0, used for the reset notification.
    initial: Option<P>,
    sink: Box<dyn StepSink<P>>,
    /// Bumped on every `start`; tasks from earlier starts exit on mismatch.
    generation: u64,
}

struct Shared<P> {
    run_id: RunId,
    pace: Pace,
    capabilities: Capabilities,
    state: Mutex<State<P>>,
    resume: Notify,
    mode_tx: watch::Sender<Mode>,
}

enum Next {
    Sleep(Duration),
    WaitForResume,
    Done,
}

impl<P> Shared<P> {
    fn set_mode(&self, state: &mut State<P>, mode: Mode) {
        state.mode = mode;
        self.mode_tx.send_replace(mode);
    }

    /// Moves a live run to `Stopped`. Returns whether anything changed.
    fn halt(&self) -> bool {
        let mut state = lock(&self.state);
        if state.mode.is_terminal() {
            return false;
        }
        self.set_mode(&mut state, Mode::Stopped);
        true
    }
}

impl<P: Clone> Shared<P> {
    /// Emits the step under the cursor, or completes the run when the
    /// source is exhausted.
    fn emit_next(&self, state: &mut State<P>) -> Next {
        let index = state.cursor;
        match state.source.next(index) {
            Some(step) => {
                if state.initial.is_none() {
                    state.initial = Some(step.payload.clone());
                }
                state.sink.on_step(index, &step);
                state.cursor += 1;
                Next::Sleep(self.pace.delay(step.emphasis, state.speed))
            }
            None => {
                self.set_mode(state, Mode::Finished);
                state.sink.on_complete();
                tracing::info!("Playback {} finished after {} steps", self.run_id, index);
                Next::Done
            }
        }
    }
}

async fn drive<P: Clone>(shared: Arc<Shared<P>>, generation: u64) {
    loop {
        let next = {
            let mut state = lock(&shared.state);
            if state.generation != generation {
                return;
            }
            match state.mode {
                Mode::Playing => shared.emit_next(&mut state),
                Mode::Paused => Next::WaitForResume,
                Mode::Idle | Mode::Stopped | Mode::Finished => Next::Done,
            }
        };

        match next {
            Next::Sleep(delay) => tokio::time::sleep(delay).await,
            // A stale permit only costs one extra trip round the loop.
            Next::WaitForResume => shared.resume.notified().await,
            Next::Done => return,
        }
    }
}

// ---------------------------------------------------------------------------
// PlaybackController
// ---------------------------------------------------------------------------

/// Replays a step source into a sink on a timer.
///
/// Dropping the controller stops playback.
pub struct PlaybackController<P> {
    shared: Arc<Shared<P>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<P> PlaybackController<P>
where
    P: Clone + Send + Sync + 'static,
{
    /// Creates an idle controller. Nothing is emitted until [`start`].
    ///
    /// [`start`]: PlaybackController::start
    pub fn new(
        source: StepSource<P>,
        pace: Pace,
        speed: Speed,
        capabilities: Capabilities,
        sink: impl StepSink<P> + 'static,
    ) -> Self {
        let (mode_tx, _) = watch::channel(Mode::Idle);
        let initial = source.first_payload().cloned();
        let shared = Shared {
            run_id: RunId::new(),
            pace,
            capabilities,
            state: Mutex::new(State {
                mode: Mode::Idle,
                cursor: 0,
                speed,
                source,
                initial,
                sink: Box::new(sink),
                generation: 0,
            }),
            resume: Notify::new(),
            mode_tx,
        };
        PlaybackController {
            shared: Arc::new(shared),
            task: Mutex::new(None),
        }
    }

    /// Starts the playback task. No-op unless idle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) {
        let generation = {
            let mut state = lock(&self.shared.state);
            if state.mode != Mode::Idle {
                return;
            }
            state.generation += 1;
            self.shared.set_mode(&mut state, Mode::Playing);
            tracing::info!(
                "Playback {} started at {} ({})",
                self.shared.run_id,
                state.speed,
                match state.source.len() {
                    Some(n) => format!("{n} steps"),
                    None => "lazy source".to_string(),
                }
            );
            state.generation
        };
        let handle = tokio::spawn(drive(Arc::clone(&self.shared), generation));
        if let Some(previous) = lock(&self.task).replace(handle) {
            previous.abort();
        }
    }

    /// Emits every remaining step and completes, without delays or a task.
    /// No-op unless idle.
    pub fn complete_immediately(&self) {
        let mut state = lock(&self.shared.state);
        if state.mode != Mode::Idle {
            return;
        }
        self.shared.set_mode(&mut state, Mode::Playing);
        while let Next::Sleep(_) = self.shared.emit_next(&mut state) {}
    }

    pub fn run_id(&self) -> RunId {
        self.shared.run_id
    }

    /// Index of the next step to emit.
    pub fn cursor(&self) -> usize {
        lock(&self.shared.state).cursor
    }

    /// Total steps, if known up front.
    pub fn len(&self) -> Option<usize> {
        lock(&self.shared.state).source.len()
    }

    pub fn speed(&self) -> Speed {
        lock(&self.shared.state).speed
    }

    pub fn subscribe(&self) -> watch::Receiver<Mode> {
        self.shared.mode_tx.subscribe()
    }

    /// Waits until the run finishes or is stopped, returning that mode.
    pub async fn done(&self) -> Mode {
        let mut rx = self.subscribe();
        let result = rx.wait_for(|mode| mode.is_terminal()).await.map(|mode| *mode);
        result.unwrap_or_else(|_| self.mode())
    }

    fn abort_task(&self) {
        if let Some(handle) = lock(&self.task).take() {
            handle.abort();
        }
    }
}

impl<P> ControlHandle for PlaybackController<P>
where
    P: Clone + Send + Sync + 'static,
{
    fn pause(&self) {
        if !self.shared.capabilities.supports_pause {
            return;
        }
        let mut state = lock(&self.shared.state);
        if state.mode == Mode::Playing {
            self.shared.set_mode(&mut state, Mode::Paused);
            tracing::debug!("Playback {} paused at step {}", self.shared.run_id, state.cursor);
        }
    }

    fn resume(&self) {
        let mut state = lock(&self.shared.state);
        if state.mode == Mode::Paused {
            self.shared.set_mode(&mut state, Mode::Playing);
            self.shared.resume.notify_one();
            tracing::debug!("Playback {} resumed at step {}", self.shared.run_id, state.cursor);
        }
    }

    fn stop(&self) {
        let stopped = self.shared.halt();
        self.abort_task();
        if stopped {
            tracing::info!("Playback {} stopped", self.shared.run_id);
        }
    }

    /// Stops and notifies the sink. A recorded source rewinds to the start
    /// and the controller returns to `Idle`, ready for [`start`]; a lazy one
    /// stays `Stopped`.
    ///
    /// [`start`]: PlaybackController::start
    fn reset(&self) {
        if !self.shared.capabilities.supports_reset {
            return;
        }
        {
            let mut state = lock(&self.shared.state);
            let mode = if state.source.is_rewindable() {
                state.cursor = 0;
                Mode::Idle
            } else {
                Mode::Stopped
            };
            self.shared.set_mode(&mut state, mode);
            let notice = Step::new(RESET_STATUS, state.initial.clone());
            state.sink.on_reset(&notice);
        }
        self.abort_task();
        tracing::info!("Playback {} reset", self.shared.run_id);
    }

    fn set_speed(&self, speed: Speed) {
        if !self.shared.capabilities.live_pace {
            tracing::debug!("Playback {} ignores speed change: pace is fixed", self.shared.run_id);
            return;
        }
        lock(&self.shared.state).speed = speed;
        tracing::debug!("Playback {} speed set to {}", self.shared.run_id, speed);
    }

    fn capabilities(&self) -> Capabilities {
        self.shared.capabilities
    }

    fn mode(&self) -> Mode {
        lock(&self.shared.state).mode
    }
}

impl<P> Drop for PlaybackController<P> {
    fn drop(&mut self) {
        self.shared.halt();
        if let Some(handle) = lock(&self.task).take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{ChannelSink, PlaybackEvent};
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::time::Instant;

    fn numbered(n: usize) -> Vec<Step<usize>> {
        (0..n).map(|i| Step::new(format!("step {i}"), i)).collect()
    }

    fn controller(
        steps: Vec<Step<usize>>,
        capabilities: Capabilities,
    ) -> (PlaybackController<usize>, UnboundedReceiver<PlaybackEvent<usize>>) {
        let (sink, rx) = ChannelSink::channel();
        let controller = PlaybackController::new(
            StepSource::recorded(steps),
            Pace::new(1000),
            Speed::NORMAL,
            capabilities,
            sink,
        );
        (controller, rx)
    }

    /// Paused-clock timers land on millisecond ticks; allow for rounding.
    fn assert_elapsed(since: Instant, expected: Duration) {
        let elapsed = since.elapsed();
        assert!(
            elapsed >= expected && elapsed <= expected + Duration::from_millis(5),
            "elapsed {elapsed:?}, expected {expected:?}"
        );
    }

    async fn next_index(rx: &mut UnboundedReceiver<PlaybackEvent<usize>>) -> usize {
        match rx.recv().await {
            Some(PlaybackEvent::Step { index, .. }) => index,
            other => panic!("expected a step, got {other:?}"),
        }
    }

    // -----------------------------------------------------------------------
    // 1. Timing
    // -----------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn first_step_is_immediate_and_completion_waits_one_delay() {
        let (controller, mut rx) = controller(numbered(3), Capabilities::default());
        let start = Instant::now();
        controller.start();

        for expected in 0..3 {
            assert_eq!(next_index(&mut rx).await, expected);
            assert_elapsed(start, Duration::from_secs(expected as u64));
        }
        assert_eq!(rx.recv().await, Some(PlaybackEvent::Complete));
        assert_elapsed(start, Duration::from_secs(3));
        assert_eq!(controller.done().await, Mode::Finished);
        assert_eq!(controller.cursor(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn solution_steps_are_held_longer() {
        let steps = vec![Step::solution("found", 0), Step::new("done", 1)];
        let (controller, mut rx) = controller(steps, Capabilities::default());
        let start = Instant::now();
        controller.start();

        assert_eq!(next_index(&mut rx).await, 0);
        assert_eq!(next_index(&mut rx).await, 1);
        assert_elapsed(start, Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn completes_exactly_once() {
        let (controller, mut rx) = controller(numbered(2), Capabilities::default());
        controller.start();
        controller.done().await;
        controller.stop();
        controller.start();
        drop(controller);

        let mut completions = 0;
        while let Some(event) = rx.recv().await {
            if event == PlaybackEvent::Complete {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
    }

    // -----------------------------------------------------------------------
    // 2. Stop and pause
    // -----------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn nothing_is_emitted_after_stop() {
        let (controller, mut rx) = controller(numbered(5), Capabilities::default());
        controller.start();
        assert_eq!(next_index(&mut rx).await, 0);

        controller.stop();
        controller.stop();
        assert_eq!(controller.mode(), Mode::Stopped);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(controller.cursor(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_freezes_and_resume_continues() {
        let (controller, mut rx) = controller(numbered(3), Capabilities::default());
        controller.start();
        assert_eq!(next_index(&mut rx).await, 0);

        controller.pause();
        controller.pause();
        assert_eq!(controller.mode(), Mode::Paused);
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(controller.cursor(), 1);

        controller.resume();
        controller.resume();
        assert_eq!(controller.mode(), Mode::Playing);
        let resumed = Instant::now();
        assert_eq!(next_index(&mut rx).await, 1);
        assert_elapsed(resumed, Duration::ZERO);
        assert_eq!(next_index(&mut rx).await, 2);
        assert_eq!(rx.recv().await, Some(PlaybackEvent::Complete));
    }

    #[tokio::test(start_paused = true)]
    async fn pause_is_ignored_without_capability() {
        let capabilities = Capabilities {
            supports_pause: false,
            ..Capabilities::default()
        };
        let (controller, _rx) = controller(numbered(3), capabilities);
        controller.start();
        controller.pause();
        assert_eq!(controller.mode(), Mode::Playing);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_controller_stops_playback() {
        let (controller, mut rx) = controller(numbered(5), Capabilities::default());
        controller.start();
        assert_eq!(next_index(&mut rx).await, 0);
        drop(controller);
        // The sink goes away with the aborted task.
        assert_eq!(rx.recv().await, None);
    }

    // -----------------------------------------------------------------------
    // 3. Speed and reset
    // -----------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn live_speed_change_applies_to_the_next_delay() {
        let capabilities = Capabilities {
            live_pace: true,
            ..Capabilities::default()
        };
        let (controller, mut rx) = controller(numbered(3), capabilities);
        let start = Instant::now();
        controller.start();
        assert_eq!(next_index(&mut rx).await, 0);

        // The delay after step 0 is already running at 1x.
        controller.set_speed(Speed::new(2.0).unwrap());
        assert_eq!(next_index(&mut rx).await, 1);
        assert_elapsed(start, Duration::from_millis(1000));
        assert_eq!(next_index(&mut rx).await, 2);
        assert_elapsed(start, Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn fixed_pace_ignores_speed_changes() {
        let (controller, mut rx) = controller(numbered(3), Capabilities::default());
        let start = Instant::now();
        controller.start();
        assert_eq!(next_index(&mut rx).await, 0);
        controller.set_speed(Speed::new(4.0).unwrap());
        assert_eq!(controller.speed(), Speed::NORMAL);
        assert_eq!(next_index(&mut rx).await, 1);
        assert_eq!(next_index(&mut rx).await, 2);
        assert_elapsed(start, Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn reset_notifies_and_rewinds() {
        let (controller, mut rx) = controller(numbered(4), Capabilities::default());
        controller.start();
        assert_eq!(next_index(&mut rx).await, 0);
        assert_eq!(next_index(&mut rx).await, 1);

        controller.reset();
        assert_eq!(controller.mode(), Mode::Idle);
        assert_eq!(controller.cursor(), 0);
        match rx.recv().await {
            Some(PlaybackEvent::Reset(step)) => {
                assert_eq!(step.status, RESET_STATUS);
                assert_eq!(step.payload, Some(0));
            }
            other => panic!("expected reset, got {other:?}"),
        }
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());

        controller.start();
        assert_eq!(next_index(&mut rx).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn task_from_before_a_reset_never_emits() {
        let (controller, mut rx) = controller(numbered(3), Capabilities::default());
        controller.start();
        assert_eq!(next_index(&mut rx).await, 0);
        let stale = lock(&controller.shared.state).generation;

        controller.reset();
        assert!(matches!(rx.recv().await, Some(PlaybackEvent::Reset(_))));
        controller.start();

        // Stands in for the previous task waking after the restart.
        tokio::spawn(drive(Arc::clone(&controller.shared), stale))
            .await
            .unwrap();

        let start = Instant::now();
        for expected in 0..3 {
            assert_eq!(next_index(&mut rx).await, expected);
        }
        assert_elapsed(start, Duration::from_secs(2));
        assert_eq!(rx.recv().await, Some(PlaybackEvent::Complete));
        assert!(rx.try_recv().is_err());
    }

    // -----------------------------------------------------------------------
    // 4. Sources
    // -----------------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn lazy_source_plays_to_exhaustion() {
        let (sink, mut rx) = ChannelSink::channel();
        let controller = PlaybackController::new(
            StepSource::lazy(numbered(3).into_iter()),
            Pace::new(200),
            Speed::NORMAL,
            Capabilities::default(),
            sink,
        );
        assert_eq!(controller.len(), None);
        controller.start();
        for expected in 0..3 {
            assert_eq!(next_index(&mut rx).await, expected);
        }
        assert_eq!(rx.recv().await, Some(PlaybackEvent::Complete));
    }

    #[tokio::test(start_paused = true)]
    async fn lazy_source_cannot_rewind() {
        let (sink, mut rx) = ChannelSink::channel();
        let controller = PlaybackController::new(
            StepSource::lazy(numbered(3).into_iter()),
            Pace::new(200),
            Speed::NORMAL,
            Capabilities::default(),
            sink,
        );
        controller.start();
        assert_eq!(next_index(&mut rx).await, 0);
        controller.reset();
        assert_eq!(controller.mode(), Mode::Stopped);
        match rx.recv().await {
            Some(PlaybackEvent::Reset(step)) => assert_eq!(step.payload, Some(0)),
            other => panic!("expected reset, got {other:?}"),
        }
    }

    #[test]
    fn complete_immediately_needs_no_runtime() {
        let (controller, mut rx) = controller(numbered(1), Capabilities::default());
        controller.complete_immediately();
        assert_eq!(controller.mode(), Mode::Finished);
        assert!(matches!(rx.try_recv(), Ok(PlaybackEvent::Step { index: 0, .. })));
        assert_eq!(rx.try_recv().ok(), Some(PlaybackEvent::Complete));
        assert!(rx.try_recv().is_err());
    }
}
