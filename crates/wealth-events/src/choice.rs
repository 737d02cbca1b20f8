//! Contest Moves
//!
//! The three symmetric rock-paper-scissors moves and their dominance cycle.

use serde::{Deserialize, Serialize};

/// A contest move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Paper,
    Rock,
    Scissors,
}

impl Choice {
    /// All moves, in draw order.
    pub const ALL: [Choice; 3] = [Choice::Paper, Choice::Rock, Choice::Scissors];

    /// Returns the move this one defeats.
    pub fn defeats(&self) -> Choice {
        match self {
            Choice::Paper => Choice::Rock,
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// Whether this move wins against `other`.
    pub fn beats(&self, other: Choice) -> bool {
        self.defeats() == other
    }

    /// Lowercase move name used in result descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Choice::Paper => "paper",
            Choice::Rock => "rock",
            Choice::Scissors => "scissors",
        }
    }

    /// How this move defeats its victim.
    pub fn verb(&self) -> &'static str {
        match self {
            Choice::Paper => "smothers",
            Choice::Rock => "smashes",
            Choice::Scissors => "slices",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
