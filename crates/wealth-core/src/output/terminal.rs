//! Terminal Renderer
//!
//! Redraws the whole table with ANSI escapes on every frame. Typing `q`
//! followed by Enter requests a stop.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use wealth_events::{AgentSnapshot, FrameSnapshot, Mood, Phase};

use super::render::Renderer;
use crate::error::SimError;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const BOLD_RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";
const SEPARATOR_WIDTH: usize = 70;

/// Display symbol for each mood
pub fn mood_symbol(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "😃",
        Mood::Neutral => "😐",
        Mood::Worried => "😟",
        Mood::Sad => "😞",
        Mood::Angry => "😠",
        Mood::Fearful => "😨",
        Mood::Shocked => "🤯",
        Mood::Exploding => "💥",
        Mood::Relieved => "😌",
    }
}

fn phase_banner(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Waiting => Some("Get ready..."),
        Phase::Playing => None,
        Phase::Warning => Some("!!! Inequality has reached breaking point !!!"),
        Phase::Eruption => Some("!!! REVOLUTION !!!"),
        Phase::Redistribution => Some("The wealth has been redistributed."),
    }
}

/// `$` per unit of wealth, `-` per unit of debt
pub fn wealth_bar(wealth: i64) -> String {
    let symbol = if wealth > 0 { "$" } else { "-" };
    symbol.repeat(wealth.unsigned_abs() as usize)
}

/// One table row
pub fn format_agent_row(agent: &AgentSnapshot) -> String {
    format!(
        "{:7} | {} | {:3} | {:31} | {}",
        agent.name,
        mood_symbol(agent.mood),
        agent.wealth,
        agent.result,
        wealth_bar(agent.wealth)
    )
}

/// Full-screen ANSI renderer
pub struct TerminalRenderer<W: Write> {
    out: W,
    stop: Arc<AtomicBool>,
}

impl TerminalRenderer<io::Stdout> {
    /// Renders to stdout and listens for `q` on stdin
    pub fn stdout() -> io::Result<Self> {
        let stop = spawn_quit_listener()?;
        Ok(Self::new(io::stdout(), stop))
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, stop: Arc<AtomicBool>) -> Self {
        Self { out, stop }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, frame: &FrameSnapshot) -> io::Result<()> {
        write!(self.out, "{}", CLEAR_SCREEN)?;
        for agent in &frame.agents {
            writeln!(self.out, "{}{}{}", BOLD_RED, format_agent_row(agent), RESET)?;
        }
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        writeln!(self.out, "Gini index: {:.4}", frame.gini)?;
        writeln!(self.out, "Total wealth: {}", frame.total_wealth)?;
        writeln!(self.out, "Total absolute wealth: {}", frame.absolute_wealth)?;
        if let Some(banner) = phase_banner(frame.phase) {
            writeln!(self.out)?;
            writeln!(self.out, "{}", banner)?;
        }
        writeln!(self.out, "Round {}  (q + Enter to quit)", frame.tick)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &FrameSnapshot) -> Result<(), SimError> {
        self.draw(frame)?;
        Ok(())
    }

    fn stop_requested(&mut self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("q")
}

/// Watches stdin on a background thread and raises the flag on `q`.
///
/// The simulation itself stays on the calling thread; this only turns key
/// input into a pollable flag.
fn spawn_quit_listener() -> io::Result<Arc<AtomicBool>> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    std::thread::Builder::new()
        .name("quit-listener".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) if is_quit(&line) => {
                        flag.store(true, Ordering::Relaxed);
                        break;
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        })?;
    Ok(stop)
}
