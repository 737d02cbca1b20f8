//! Agent Moods
//!
//! Closed set of affect states. Moods are derived from wealth changes and
//! revolution phases; they never feed back into the arithmetic.

use serde::{Deserialize, Serialize};

/// Affect state of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    #[default]
    Neutral,
    Worried,
    Sad,
    Angry,
    Fearful,
    Shocked,
    Exploding,
    Relieved,
}

impl Mood {
    /// Returns all mood variants.
    pub fn all() -> &'static [Mood] {
        &[
            Mood::Happy,
            Mood::Neutral,
            Mood::Worried,
            Mood::Sad,
            Mood::Angry,
            Mood::Fearful,
            Mood::Shocked,
            Mood::Exploding,
            Mood::Relieved,
        ]
    }
}
