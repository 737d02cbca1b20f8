//! Snapshot Types
//!
//! Serialization structs handed to renderers once per frame.
//!
//! A frame captures the whole population plus the summary statistics at one
//! point of the animation. Renderers may display, stream or discard it.

use serde::{Deserialize, Serialize};

use crate::{Choice, Mood};

/// Which step of the animation produced a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Initial state before the first round
    #[default]
    Waiting,
    /// Ordinary round of contests
    Playing,
    /// Revolution: tension builds
    Warning,
    /// Revolution: the uprising itself
    Eruption,
    /// Revolution: wealth has been redistributed
    Redistribution,
}

impl Phase {
    /// True for the three revolution phases.
    pub fn is_revolution(&self) -> bool {
        matches!(self, Phase::Warning | Phase::Eruption | Phase::Redistribution)
    }
}

/// Display fields of one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub name: String,
    pub wealth: i64,
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice: Option<Choice>,
    pub result: String,
}

/// One renderable frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub phase: Phase,
    /// Agents in population order
    pub agents: Vec<AgentSnapshot>,
    pub gini: f64,
    pub total_wealth: i64,
    pub absolute_wealth: i64,
}

impl FrameSnapshot {
    /// Looks up an agent by name.
    pub fn agent(&self, name: &str) -> Option<&AgentSnapshot> {
        self.agents.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> FrameSnapshot {
        FrameSnapshot {
            tick: 3,
            phase: Phase::Playing,
            agents: vec![
                AgentSnapshot {
                    name: "Alice".to_string(),
                    wealth: 6,
                    mood: Mood::Happy,
                    choice: Some(Choice::Rock),
                    result: "A wins B: rock smashes scissors".to_string(),
                },
                AgentSnapshot {
                    name: "Bob".to_string(),
                    wealth: 4,
                    mood: Mood::Worried,
                    choice: None,
                    result: "Waiting to start...".to_string(),
                },
            ],
            gini: 0.1,
            total_wealth: 10,
            absolute_wealth: 10,
        }
    }

    #[test]
    fn test_frame_json_shape() {
        let json = serde_json::to_value(sample_frame()).unwrap();
        assert_eq!(json["phase"], "playing");
        assert_eq!(json["agents"][0]["mood"], "happy");
        assert_eq!(json["agents"][0]["choice"], "rock");
        // Absent choice is omitted rather than null
        assert!(json["agents"][1].get("choice").is_none());
    }

    #[test]
    fn test_agent_lookup() {
        let frame = sample_frame();
        assert_eq!(frame.agent("Bob").map(|a| a.wealth), Some(4));
        assert!(frame.agent("Zed").is_none());
    }

    #[test]
    fn test_revolution_phases() {
        assert!(Phase::Eruption.is_revolution());
        assert!(!Phase::Playing.is_revolution());
        assert!(!Phase::Waiting.is_revolution());
    }
}
