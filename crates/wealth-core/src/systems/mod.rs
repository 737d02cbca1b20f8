//! Simulation Systems
//!
//! Contest resolution, round scheduling and the revolution state machine.

pub mod contest;
pub mod revolution;
pub mod round;

pub use contest::{resolve_contest, Contest, ContestResult};
pub use revolution::{
    apply_eruption, apply_warning, redistribute, should_revolt, Redistribution, Revolution,
    RevolutionPhase,
};
pub use round::{play_round, PairOutcome, RoundReport};
