//! Shared data types for the wealth simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! Renderers depend on it to consume frames without touching the engine.

pub mod choice;
pub mod mood;
pub mod snapshot;

pub use choice::Choice;
pub use mood::Mood;
pub use snapshot::{AgentSnapshot, FrameSnapshot, Phase};
