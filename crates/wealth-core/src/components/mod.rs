//! Population Components
//!
//! Agents and the arena that owns them.

pub mod agent;

pub use agent::*;
