//! Wealth Rock-Paper-Scissors Simulation Engine
//!
//! A fixed population plays rock-paper-scissors with its neighbours every
//! round; each win moves one unit of wealth. Inequality is tracked with the
//! Gini coefficient and, when configured, a revolution redistributes wealth
//! once it climbs too high.
//!
//! The engine never talks to a screen directly. Every frame goes through the
//! [`output::Renderer`] trait, and randomness and time are injected through
//! [`choices::ChoiceSource`] and [`clock::Clock`].

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod choices;
pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod setup;
pub mod simulation;
pub mod systems;

pub use choices::{ChoiceSource, RandomChoices, ScriptedChoices};
pub use clock::{Clock, ManualClock, ThreadClock};
pub use components::{Agent, AgentId, Population};
pub use config::{default_config_toml, Config, ConfigError, DebtFloor};
pub use error::{DivisionSite, SimError};
pub use simulation::Simulation;

/// Move source backed by a seeded small RNG
pub type SimRng = RandomChoices<SmallRng>;

/// Seeds from `seed` for reproducible runs, or from OS entropy.
pub fn seeded_choices(seed: Option<u64>) -> SimRng {
    let rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    RandomChoices::new(rng)
}
