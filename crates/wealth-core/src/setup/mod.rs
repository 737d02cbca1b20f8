//! Population Setup
//!
//! The cast is fixed: fifteen players, created once, in this order.

use crate::components::Population;
use crate::config::EconomyConfig;

pub const PLAYER_NAMES: [&str; 15] = [
    "Alice", "Bob", "Cecil", "Dave", "Emma", "Fred", "George", "Helen", "Ian", "Jane", "Kevin",
    "Lisa", "Michael", "Nina", "Oliver",
];

/// Spawns every player with the configured starting wealth
pub fn create_population(economy: &EconomyConfig) -> Population {
    Population::new(PLAYER_NAMES, economy.initial_wealth)
}
