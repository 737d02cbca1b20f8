//! Move Sources
//!
//! Where contest moves come from. Production runs draw uniformly from a
//! seeded RNG; tests script the exact sequence.

use std::collections::VecDeque;

use rand::Rng;
use wealth_events::Choice;

/// Supplies one move per agent per contest
pub trait ChoiceSource {
    fn draw(&mut self) -> Choice;
}

/// Uniform draws from any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomChoices<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomChoices<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> ChoiceSource for RandomChoices<R> {
    fn draw(&mut self) -> Choice {
        Choice::ALL[self.rng.gen_range(0..Choice::ALL.len())]
    }
}

/// Replays a fixed list of moves, then falls back to a constant.
///
/// The fallback keeps long test runs deterministic once the script is spent.
#[derive(Debug, Clone)]
pub struct ScriptedChoices {
    queue: VecDeque<Choice>,
    fallback: Choice,
    drawn: usize,
}

impl ScriptedChoices {
    pub fn new(moves: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            queue: moves.into_iter().collect(),
            fallback: Choice::Rock,
            drawn: 0,
        }
    }

    /// Every draw returns the same move (all contests tie)
    pub fn constant(choice: Choice) -> Self {
        Self {
            queue: VecDeque::new(),
            fallback: choice,
            drawn: 0,
        }
    }

    pub fn with_fallback(mut self, choice: Choice) -> Self {
        self.fallback = choice;
        self
    }

    /// Number of moves handed out so far
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ChoiceSource for ScriptedChoices {
    fn draw(&mut self) -> Choice {
        self.drawn += 1;
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}
