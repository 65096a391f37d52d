//! Record an algorithm and start playing it back in one call.

use algoviz_algorithms::{record, AlgorithmId, AlgorithmInput, Outcome};
use algoviz_core::{Frame, Speed};

use crate::config::PlaybackConfig;
use crate::controller::PlaybackController;
use crate::error::PlaybackError;
use crate::sink::StepSink;
use crate::source::StepSource;

/// Records `algorithm` on `input` and plays it into `sink` at a fixed
/// `speed`.
///
/// An unsatisfiable run (e.g. topological sort of an undirected graph)
/// delivers its single explanatory step and completion before this
/// returns; no timer is scheduled. Otherwise the controller is already
/// playing and must be kept alive for playback to continue.
pub fn visualize<S>(
    algorithm: AlgorithmId,
    input: &AlgorithmInput,
    speed: Speed,
    sink: S,
) -> Result<PlaybackController<Frame>, PlaybackError>
where
    S: StepSink<Frame> + 'static,
{
    let config = PlaybackConfig {
        speed,
        live_pace: false,
    };
    visualize_with(algorithm, input, &config, sink)
}

/// Like [`visualize`], with speed and capabilities taken from `config`.
pub fn visualize_with<S>(
    algorithm: AlgorithmId,
    input: &AlgorithmInput,
    config: &PlaybackConfig,
    sink: S,
) -> Result<PlaybackController<Frame>, PlaybackError>
where
    S: StepSink<Frame> + 'static,
{
    let recording = record(algorithm, input)?;
    let outcome = recording.outcome;
    tracing::debug!("Recorded {} steps for {}", recording.len(), algorithm);

    let controller = PlaybackController::new(
        StepSource::recorded(recording.steps),
        algorithm.info().pace,
        config.speed,
        config.capabilities(),
        sink,
    );
    match outcome {
        Outcome::Completed => controller.start(),
        Outcome::Unsatisfiable => {
            tracing::info!("{} cannot run on this input; completing immediately", algorithm);
            controller.complete_immediately();
        }
    }
    Ok(controller)
}
