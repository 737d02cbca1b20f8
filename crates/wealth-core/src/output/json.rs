//! JSON Lines Renderer
//!
//! Streams one JSON object per frame, for piping into other tools.

use std::io::{self, Write};

use wealth_events::FrameSnapshot;

use super::render::Renderer;
use crate::error::SimError;

pub struct JsonRenderer<W: Write> {
    out: W,
    frames_written: u64,
}

impl JsonRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames_written: 0,
        }
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, frame: &FrameSnapshot) -> Result<(), SimError> {
        let json = serde_json::to_string(frame).map_err(io::Error::from)?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()?;
        self.frames_written += 1;
        Ok(())
    }

    /// Stops only when the run ends on its own or the pipe closes.
    fn stop_requested(&mut self) -> bool {
        false
    }
}
