use serde::{Deserialize, Serialize};

use crate::{
    domain::{Color, ColorSource, Sequence},
    protocol::{GameSnapshot, InputOutcome, PlaybackTransition},
};

/// Progress through the current turn. The cursor only exists while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Playing { step: usize },
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    Machine,
    Player,
}

pub struct Game {
    sequence: Sequence,
    phase: Phase,
    turn: Turn,
    paused: bool,
    revision: u64,
    colors: Box<dyn ColorSource>,
}

impl Game {
    pub fn new(mut colors: Box<dyn ColorSource>) -> Self {
        let first = colors.next_color();
        Self {
            sequence: Sequence::starting_with(first),
            phase: Phase::Playing { step: 0 },
            turn: Turn::Machine,
            paused: true,
            revision: 0,
            colors,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn is_machine_turn(&self) -> bool {
        self.turn == Turn::Machine
    }

    pub fn is_lost(&self) -> bool {
        self.phase == Phase::Lost
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn step(&self) -> Option<usize> {
        match self.phase {
            Phase::Playing { step } => Some(step),
            Phase::Lost => None,
        }
    }

    pub fn score(&self) -> usize {
        self.sequence.score()
    }

    /// Bumped on every change to step, phase, turn or sequence. The pause flag
    /// is presentation only and does not count.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Color the machine is currently revealing, if any.
    pub fn highlighted(&self) -> Option<Color> {
        if self.turn != Turn::Machine || self.paused {
            return None;
        }
        self.step().and_then(|step| self.sequence.get(step))
    }

    pub fn begin_pause(&mut self) {
        self.paused = true;
    }

    pub fn end_pause(&mut self) {
        self.paused = false;
    }

    /// Moves the machine's reveal cursor past the color it just showed.
    pub fn advance_playback(&mut self) -> PlaybackTransition {
        let Phase::Playing { step } = self.phase else {
            return PlaybackTransition::Ignored;
        };
        if self.turn != Turn::Machine {
            return PlaybackTransition::Ignored;
        }

        let next = step + 1;
        self.revision += 1;
        if next >= self.sequence.len() {
            self.phase = Phase::Playing { step: 0 };
            self.turn = Turn::Player;
            PlaybackTransition::HandedToPlayer
        } else {
            self.phase = Phase::Playing { step: next };
            PlaybackTransition::Continued { step: next }
        }
    }

    /// Applies one player input, from either the buttons or the voice channel.
    pub fn submit(&mut self, color: Color) -> InputOutcome {
        let Phase::Playing { step } = self.phase else {
            return InputOutcome::Ignored;
        };
        if self.turn != Turn::Player {
            return InputOutcome::Ignored;
        }

        self.revision += 1;
        if self.sequence.get(step) != Some(color) {
            let score = self.sequence.score();
            self.phase = Phase::Lost;
            return InputOutcome::Lost { score };
        }

        let next = step + 1;
        if next < self.sequence.len() {
            self.phase = Phase::Playing { step: next };
            return InputOutcome::Advanced { step: next };
        }

        let appended = self.colors.next_color();
        self.sequence.push(appended);
        self.phase = Phase::Playing { step: 0 };
        self.turn = Turn::Machine;
        self.paused = true;
        InputOutcome::RoundComplete {
            score: self.sequence.score(),
        }
    }

    /// Starts over with a fresh single-color sequence in machine turn.
    pub fn restart(&mut self) {
        let first = self.colors.next_color();
        self.sequence = Sequence::starting_with(first);
        self.phase = Phase::Playing { step: 0 };
        self.turn = Turn::Machine;
        self.paused = true;
        self.revision += 1;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            sequence: self.sequence.colors().to_vec(),
            step: self.step(),
            machine_turn: self.is_machine_turn(),
            paused: self.paused,
            lost: self.is_lost(),
            score: self.score(),
            highlighted: self.highlighted(),
            revision: self.revision,
        }
    }
}

#[cfg(test)]
#[path = "tests/game_tests.rs"]
mod tests;
