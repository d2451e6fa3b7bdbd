use serde::{Deserialize, Serialize};

use crate::domain::Color;

/// Read-only view of the game handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub sequence: Vec<Color>,
    /// `None` while lost.
    pub step: Option<usize>,
    pub machine_turn: bool,
    pub paused: bool,
    pub lost: bool,
    pub score: usize,
    pub highlighted: Option<Color>,
    pub revision: u64,
}

impl GameSnapshot {
    /// Whether the button for `color` should shine.
    pub fn is_shining(&self, color: Color) -> bool {
        self.highlighted == Some(color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputOutcome {
    /// Machine turn or lost: the input had no effect.
    Ignored,
    Advanced { step: usize },
    RoundComplete { score: usize },
    Lost { score: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackTransition {
    Ignored,
    Continued { step: usize },
    HandedToPlayer,
}
