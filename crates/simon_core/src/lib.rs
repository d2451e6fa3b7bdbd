//! Game model for the color-sequence memory game: colors, the growing
//! sequence, and the turn/phase state machine driven by playback and input.

pub mod domain;
pub mod error;
pub mod game;
pub mod protocol;
pub mod timing;

pub use domain::{Color, ColorSource, RandomColors, ScriptedColors, Sequence};
pub use error::ParseColorError;
pub use game::{Game, Phase, Turn};
pub use protocol::{GameSnapshot, InputOutcome, PlaybackTransition};
pub use timing::Timings;
