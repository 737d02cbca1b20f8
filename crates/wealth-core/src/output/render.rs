//! Renderer Interface
//!
//! The engine hands every frame to a `Renderer` and polls it for a stop
//! request once per round. Nothing flows back into the population.

use wealth_events::FrameSnapshot;

use crate::error::SimError;

pub trait Renderer {
    /// Presents one frame. Implementations may ignore it.
    fn render(&mut self, frame: &FrameSnapshot) -> Result<(), SimError>;

    /// Whether the user asked the animation to stop.
    fn stop_requested(&mut self) -> bool;
}

/// Discards frames; optionally stops after a frame budget
#[derive(Debug, Clone, Default)]
pub struct NullRenderer {
    frames_seen: usize,
    stop_after: Option<usize>,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop once `frames` frames have been rendered
    pub fn stop_after(frames: usize) -> Self {
        Self {
            frames_seen: 0,
            stop_after: Some(frames),
        }
    }

    pub fn frames_seen(&self) -> usize {
        self.frames_seen
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &FrameSnapshot) -> Result<(), SimError> {
        self.frames_seen += 1;
        Ok(())
    }

    fn stop_requested(&mut self) -> bool {
        self.stop_after.is_some_and(|limit| self.frames_seen >= limit)
    }
}

/// Keeps every frame in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    frames: Vec<FrameSnapshot>,
    stop_after: Option<usize>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_after(frames: usize) -> Self {
        Self {
            frames: Vec::new(),
            stop_after: Some(frames),
        }
    }

    pub fn frames(&self) -> &[FrameSnapshot] {
        &self.frames
    }

    pub fn last(&self) -> Option<&FrameSnapshot> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &FrameSnapshot) -> Result<(), SimError> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn stop_requested(&mut self) -> bool {
        self.stop_after.is_some_and(|limit| self.frames.len() >= limit)
    }
}
