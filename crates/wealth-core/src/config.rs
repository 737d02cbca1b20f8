//! Configuration System
//!
//! Loads the economy and timing parameters from an optional TOML file. The
//! result is validated once at startup and then passed by reference to every
//! component; nothing reads configuration from global state.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Lower bound on wealth below which agents stop playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DebtFloorRepr", into = "DebtFloorRepr")]
pub enum DebtFloor {
    /// No floor: everybody always plays
    Unlimited,
    /// Agents with wealth equal to (or, between rounds, below) this value sit out
    Limit(i64),
}

impl DebtFloor {
    /// The concrete floor, if any.
    pub fn limit(&self) -> Option<i64> {
        match self {
            DebtFloor::Unlimited => None,
            DebtFloor::Limit(value) => Some(*value),
        }
    }
}

impl Default for DebtFloor {
    fn default() -> Self {
        DebtFloor::Limit(0)
    }
}

impl std::fmt::Display for DebtFloor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DebtFloor::Unlimited => f.write_str(UNLIMITED_KEYWORD),
            DebtFloor::Limit(value) => write!(f, "{}", value),
        }
    }
}

const UNLIMITED_KEYWORD: &str = "unlimited";

/// On-disk form: an integer or the keyword `"unlimited"`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum DebtFloorRepr {
    Limit(i64),
    Keyword(String),
}

impl TryFrom<DebtFloorRepr> for DebtFloor {
    type Error = String;

    fn try_from(repr: DebtFloorRepr) -> Result<Self, Self::Error> {
        match repr {
            DebtFloorRepr::Limit(value) => Ok(DebtFloor::Limit(value)),
            DebtFloorRepr::Keyword(word) if word.eq_ignore_ascii_case(UNLIMITED_KEYWORD) => {
                Ok(DebtFloor::Unlimited)
            }
            DebtFloorRepr::Keyword(word) => Err(format!(
                "debt_threshold must be an integer or \"{}\", got \"{}\"",
                UNLIMITED_KEYWORD, word
            )),
        }
    }
}

impl From<DebtFloor> for DebtFloorRepr {
    fn from(floor: DebtFloor) -> Self {
        match floor {
            DebtFloor::Unlimited => DebtFloorRepr::Keyword(UNLIMITED_KEYWORD.to_string()),
            DebtFloor::Limit(value) => DebtFloorRepr::Limit(value),
        }
    }
}

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub economy: EconomyConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Wealth rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Starting wealth of every agent; smaller numbers give more dramatic results
    pub initial_wealth: i64,
    /// Debt floor, `0` by default
    pub debt_threshold: DebtFloor,
    /// Gini value at which a revolution erupts; absent means never
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gini_revolution_threshold: Option<f64>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            initial_wealth: 5,
            debt_threshold: DebtFloor::Limit(0),
            gini_revolution_threshold: None,
        }
    }
}

/// Animation pacing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Pause after the initial frame
    pub start_delay_ms: u64,
    /// Pause between rounds
    pub frame_interval_ms: u64,
    /// Pause after each revolution phase
    pub phase_dwell_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 3000,
            frame_interval_ms: 1000,
            phase_dwell_ms: 2000,
        }
    }
}

impl TimingConfig {
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn phase_dwell(&self) -> Duration {
        Duration::from_millis(self.phase_dwell_ms)
    }
}

/// Run control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Random seed for reproducibility; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Stop after this many rounds; run until stopped when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks: Option<u64>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Toml)
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::TomlSerialize)
    }

    /// Checks the economy values. Call once, before the run starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let economy = &self.economy;
        if economy.initial_wealth < 1 {
            return Err(ConfigError::InitialWealth(economy.initial_wealth));
        }
        if let DebtFloor::Limit(limit) = economy.debt_threshold {
            if limit > 0 {
                return Err(ConfigError::DebtThreshold(limit));
            }
        }
        if let Some(threshold) = economy.gini_revolution_threshold {
            if !threshold.is_finite() || threshold <= 0.0 || threshold >= 1.0 {
                return Err(ConfigError::GiniThreshold(threshold));
            }
        }
        Ok(())
    }
}

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[source] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[source] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[source] toml::ser::Error),

    #[error("initial_wealth must be at least 1, got {0}")]
    InitialWealth(i64),

    #[error("debt_threshold must be 0 or negative (or \"unlimited\"), got {0}")]
    DebtThreshold(i64),

    #[error("gini_revolution_threshold must lie strictly between 0 and 1, got {0}")]
    GiniThreshold(f64),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Wealth RPS configuration

[economy]
# Starting wealth of every player; smaller numbers give more dramatic results
initial_wealth = 5
# 0 or negative, or "unlimited" for no floor
debt_threshold = 0
# Uncomment to let the have-nots revolt once inequality gets this high
# gini_revolution_threshold = 0.5

[timing]
start_delay_ms = 3000
frame_interval_ms = 1000
phase_dwell_ms = 2000

[simulation]
# seed = 42
# max_ticks = 500
"#
    .to_string()
}
