//! Output
//!
//! Statistics and the renderers that present frames.

pub mod json;
pub mod render;
pub mod stats;
pub mod terminal;

pub use json::JsonRenderer;
pub use render::{NullRenderer, RecordingRenderer, Renderer};
pub use stats::{gini, rebase_to_minimum, PopulationStats, RunStats};
pub use terminal::TerminalRenderer;
