use std::{collections::VecDeque, fmt, str::FromStr};

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::ParseColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Yellow,
    Green,
    Red,
    Blue,
}

impl Color {
    /// Button order, also the order used for the speech grammar.
    pub const ALL: [Color; 4] = [Color::Yellow, Color::Green, Color::Red, Color::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| ParseColorError::new(s))
    }
}

/// Supplies the color appended at the start of a game and after every
/// completed round.
pub trait ColorSource: Send {
    fn next_color(&mut self) -> Color;
}

pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        Color::ALL[self.rng.gen_range(0..Color::ALL.len())]
    }
}

/// Replays a fixed list of colors, wrapping around when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedColors {
    queue: VecDeque<Color>,
}

impl ScriptedColors {
    /// An empty script falls back to [`Color::Yellow`].
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            queue: colors.into_iter().collect(),
        }
    }
}

impl ColorSource for ScriptedColors {
    fn next_color(&mut self) -> Color {
        match self.queue.pop_front() {
            Some(color) => {
                self.queue.push_back(color);
                color
            }
            None => Color::Yellow,
        }
    }
}

/// Append-only list of colors the player must reproduce. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence(Vec<Color>);

impl Sequence {
    pub fn starting_with(first: Color) -> Self {
        Self(vec![first])
    }

    pub fn push(&mut self, color: Color) {
        self.0.push(color);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.0.get(index).copied()
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Completed rounds: every color beyond the first was earned.
    pub fn score(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
