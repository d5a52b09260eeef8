pub mod config;
pub mod layout;
pub mod pacing;
pub mod profile;
pub mod schedule;
pub mod session;
pub mod settings;
pub mod text;

pub use layout::{Axis, CenterTable, FootprintSource};
pub use pacing::{Mode, PacingParameters, Readout};
pub use profile::{AxisProfile, EngineConfig};
pub use schedule::{CallbackId, Scheduler, TimerQueue, Wakeup};
pub use session::{PlaybackSession, PlaybackState, Transform, TransitionPhase};
pub use settings::Settings;
pub use text::{tokenize, Word, WordSequence};
