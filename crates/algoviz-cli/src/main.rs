//! Algorithm visualization CLI.
//!
//! Provides the `algoviz` binary:
//! - `list` prints the algorithm catalogue by category;
//! - `record` runs an algorithm once and prints the recording as JSON;
//! - `play` replays it on a timer, with pause/resume/stop/reset read from
//!   stdin.
//!
//! Inputs come from a JSON file (`--input`) or the seeded generator
//! (`--seed`, random when omitted). Logs go to stderr; set `RUST_LOG` to
//! see them.

mod controls;
mod render;

use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use algoviz_algorithms::{record, AlgorithmId, AlgorithmInput, Category, InputGenerator, Recording};
use algoviz_core::{Frame, Speed};
use algoviz_playback::{
    ChannelSink, Mode, PlaybackConfig, PlaybackError, PlaybackEvent, VisualizationSession,
};

use controls::Control;

/// Step-by-step algorithm visualizer.
#[derive(Parser)]
#[command(name = "algoviz", about = "Step-by-step algorithm visualizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List algorithms by category.
    List {
        /// Include adapters hidden from the menu.
        #[arg(long)]
        all: bool,
    },
    /// Record an algorithm and print the steps as JSON.
    Record {
        /// Algorithm id, e.g. `bubble-sort`, `dijkstra`, `nqueens`.
        algorithm: String,

        /// Seed for the input generator.
        #[arg(long)]
        seed: Option<u64>,

        /// JSON file holding the input instead of a generated one.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Play an algorithm back step by step.
    Play {
        /// Algorithm id, e.g. `bubble-sort`, `dijkstra`, `nqueens`.
        algorithm: String,

        /// Seed for the input generator.
        #[arg(long)]
        seed: Option<u64>,

        /// JSON file holding the input instead of a generated one.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Speed factor (overrides ALGOVIZ_SPEED).
        #[arg(short, long)]
        speed: Option<f64>,

        /// Allow `+`/`-` to change speed during playback.
        #[arg(long)]
        live_pace: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::List { all } => run_list(all),
        Commands::Record {
            algorithm,
            seed,
            input,
        } => run_record(&algorithm, seed, input.as_deref()),
        Commands::Play {
            algorithm,
            seed,
            input,
            speed,
            live_pace,
        } => run_play(&algorithm, seed, input.as_deref(), speed, live_pace).await,
    };
    // Exit here so a pending stdin read cannot hold the runtime open.
    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

fn run_list(all: bool) -> i32 {
    for category in Category::ALL {
        println!("{}", category.title());
        for id in category.algorithms() {
            let info = id.info();
            if !info.listed && !all {
                continue;
            }
            println!(
                "  {:<12} {:<32} time {}, space {}",
                id.as_str(),
                info.name,
                info.time_complexity,
                info.space_complexity
            );
        }
    }
    0
}

// ---------------------------------------------------------------------------
// record
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct RecordOutput<'a> {
    algorithm: AlgorithmId,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    input: &'a AlgorithmInput,
    recording: &'a Recording<Frame>,
}

/// Returns exit code: 0 = success, 1 = usage or input error,
/// 2 = algorithm error.
fn run_record(algorithm: &str, seed: Option<u64>, input_path: Option<&Path>) -> i32 {
    let (algorithm, input, seed) = match resolve(algorithm, seed, input_path) {
        Ok(resolved) => resolved,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };

    let recording = match record(algorithm, &input) {
        Ok(recording) => recording,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 2;
        }
    };

    let output = RecordOutput {
        algorithm,
        seed,
        input: &input,
        recording: &recording,
    };
    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize recording: {}", e);
            2
        }
    }
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

/// Returns exit code: 0 = success (finished or stopped), 1 = usage or
/// input error, 2 = algorithm error.
async fn run_play(
    algorithm: &str,
    seed: Option<u64>,
    input_path: Option<&Path>,
    speed: Option<f64>,
    live_pace: bool,
) -> i32 {
    let config = match play_config(speed, live_pace) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };
    let (algorithm, input, seed) = match resolve(algorithm, seed, input_path) {
        Ok(resolved) => resolved,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };
    if let Some(seed) = seed {
        eprintln!("{} (seed {}) at {}", algorithm.info().name, seed, config.speed);
    }

    let mut session = VisualizationSession::new(config);
    session.select(algorithm, input);
    let (sink, mut events) = ChannelSink::channel();
    match session.start(sink) {
        Ok(_) => {}
        Err(PlaybackError::Algorithm(e)) => {
            eprintln!("Error: {}", e);
            return 2;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    }
    let total = session.controller().and_then(|c| c.len());
    if let Some(controller) = session.controller() {
        tracing::info!("Started {} as run {}", algorithm, controller.run_id());
    }
    eprintln!("{}", controls::HELP);

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(PlaybackEvent::Step { index, step }) => {
                    println!("{}", render::step_line(index, total, &step));
                    for line in render::frame_lines(&step.payload) {
                        println!("      {}", line);
                    }
                }
                Some(PlaybackEvent::Reset(step)) => println!("{}", step.status),
                Some(PlaybackEvent::Complete) | None => break,
            },
            line = stdin.next_line(), if stdin_open => match line {
                Ok(Some(line)) => match Control::parse(&line) {
                    Some(control) => {
                        tracing::debug!("Control {:?} in mode {}", control, session.mode());
                        if let Some(feedback) = control.apply(&mut session) {
                            eprintln!("{}", feedback);
                        }
                    }
                    None if line.trim().is_empty() => {}
                    None => eprintln!("{}", controls::HELP),
                },
                Ok(None) => stdin_open = false,
                Err(e) => {
                    tracing::warn!("Stopped reading controls: {}", e);
                    stdin_open = false;
                }
            },
        }
        if session.mode() == Mode::Stopped {
            eprintln!("stopped");
            break;
        }
    }
    0
}

fn play_config(speed: Option<f64>, live_pace: bool) -> Result<PlaybackConfig, String> {
    let mut config = PlaybackConfig::from_env().map_err(|e| e.to_string())?;
    if let Some(speed) = speed {
        config.speed = Speed::new(speed).map_err(|e| e.to_string())?;
    }
    config.live_pace |= live_pace;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Input resolution
// ---------------------------------------------------------------------------

/// Parses the algorithm id and loads or generates its input. The seed is
/// returned when the input was generated.
fn resolve(
    algorithm: &str,
    seed: Option<u64>,
    input_path: Option<&Path>,
) -> Result<(AlgorithmId, AlgorithmInput, Option<u64>), String> {
    let algorithm = AlgorithmId::from_str(algorithm).map_err(|e| e.to_string())?;

    if let Some(path) = input_path {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
        let input: AlgorithmInput = serde_json::from_str(&text)
            .map_err(|e| format!("invalid input in '{}': {}", path.display(), e))?;
        tracing::debug!("Loaded {} input from {}", algorithm, path.display());
        return Ok((algorithm, input, None));
    }

    let mut generator = match seed {
        Some(seed) => InputGenerator::new(seed),
        None => InputGenerator::from_entropy(),
    };
    let input = generator.generate(algorithm);
    tracing::debug!("Generated {} input with seed {}", algorithm, generator.seed());
    Ok((algorithm, input, Some(generator.seed())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_play_flags() {
        let cli = Cli::try_parse_from([
            "algoviz", "play", "dijkstra", "--seed", "7", "--speed", "2", "--live-pace",
        ])
        .unwrap();
        match cli.command {
            Commands::Play {
                algorithm,
                seed,
                speed,
                live_pace,
                input,
            } => {
                assert_eq!(algorithm, "dijkstra");
                assert_eq!(seed, Some(7));
                assert_eq!(speed, Some(2.0));
                assert!(live_pace);
                assert!(input.is_none());
            }
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn resolve_is_reproducible_for_a_seed() {
        let (id, first, seed) = resolve("bubble-sort", Some(42), None).unwrap();
        let (_, second, _) = resolve("bubble-sort", Some(42), None).unwrap();
        assert_eq!(id, AlgorithmId::BubbleSort);
        assert_eq!(seed, Some(42));
        assert_eq!(first, second);
    }

    #[test]
    fn resolve_rejects_unknown_algorithms_and_missing_files() {
        assert!(resolve("bogosort", None, None).is_err());
        let err = resolve("bubble-sort", None, Some(Path::new("/nonexistent/input.json"))).unwrap_err();
        assert!(err.contains("failed to read"));
    }

    #[test]
    fn play_config_rejects_speeds_outside_the_range() {
        assert!(play_config(Some(1e-20), false).is_err());
        assert!(play_config(Some(11.0), false).is_err());
        let config = play_config(Some(10.0), true).unwrap();
        assert_eq!(config.speed, Speed::MAX);
        assert!(config.live_pace);
    }

    #[test]
    fn record_output_carries_seed_and_recording() {
        let (algorithm, input, seed) = resolve("fibonacci", Some(3), None).unwrap();
        let recording = record(algorithm, &input).unwrap();
        let output = RecordOutput {
            algorithm,
            seed,
            input: &input,
            recording: &recording,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["algorithm"], "fibonacci");
        assert_eq!(json["seed"], 3);
        assert_eq!(json["input"]["kind"], "fibonacci");
        assert_eq!(json["recording"]["outcome"], "completed");
        assert!(json["recording"]["steps"].as_array().unwrap().len() > 1);
    }
}
