pub mod config;
pub mod controller;
pub mod error;
pub mod handle;
pub mod session;
pub mod sink;
pub mod source;
pub mod visualize;

// Re-export commonly used types
pub use config::PlaybackConfig;
pub use controller::PlaybackController;
pub use error::PlaybackError;
pub use handle::{Capabilities, ControlHandle, Mode, RunId};
pub use session::VisualizationSession;
pub use sink::{ChannelSink, PlaybackEvent, StepSink, RESET_STATUS};
pub use source::StepSource;
pub use visualize::{visualize, visualize_with};
