//! Contest System
//!
//! One game of rock-paper-scissors between two agents. The winner takes one
//! unit of wealth from the loser, so the pair's combined wealth never changes.

use tracing::debug;
use wealth_events::Mood;

use crate::choices::ChoiceSource;
use crate::components::Agent;
use crate::config::DebtFloor;

/// Who came out ahead, from the first agent's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContestResult {
    FirstWins,
    SecondWins,
    Tie,
}

/// A resolved contest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contest {
    pub result: ContestResult,
    /// Same text written to both agents' `result`
    pub description: String,
}

/// Plays `a` against `b`, mutating both in place.
///
/// Returns `None` without touching either agent when a debt floor is set and
/// one of them sits exactly on it. An agent below the floor still plays.
pub fn resolve_contest<C: ChoiceSource + ?Sized>(
    a: &mut Agent,
    b: &mut Agent,
    floor: DebtFloor,
    choices: &mut C,
) -> Option<Contest> {
    if let Some(limit) = floor.limit() {
        if a.wealth == limit || b.wealth == limit {
            debug!(first = %a.name, second = %b.name, limit, "pair sits out at debt floor");
            return None;
        }
    }

    let a_choice = choices.draw();
    let b_choice = choices.draw();
    a.choice = Some(a_choice);
    b.choice = Some(b_choice);

    let (result, description) = if a_choice.beats(b_choice) {
        (ContestResult::FirstWins, win_lose(a, b, floor))
    } else if b_choice.beats(a_choice) {
        (ContestResult::SecondWins, win_lose(b, a, floor))
    } else {
        a.mood = Mood::Neutral;
        b.mood = Mood::Neutral;
        let text = format!(
            "{} ties {}: {} and {}",
            a.initial(),
            b.initial(),
            a_choice,
            b_choice
        );
        (ContestResult::Tie, text)
    };

    a.result = description.clone();
    b.result = description.clone();
    debug!(first = %a.name, second = %b.name, ?result, "{}", description);

    Some(Contest {
        result,
        description,
    })
}

/// Moves one unit from `loser` to `winner` and returns the description.
fn win_lose(winner: &mut Agent, loser: &mut Agent, floor: DebtFloor) -> String {
    winner.wealth += 1;
    winner.mood = Mood::Happy;
    loser.wealth -= 1;
    // The floor clause is implied by the first whenever the floor is <= 0;
    // kept as written so a positive floor would still behave.
    let above_floor = floor.limit().is_some_and(|limit| loser.wealth > limit);
    loser.mood = if loser.wealth > 0 || above_floor {
        Mood::Worried
    } else {
        Mood::Sad
    };

    let (won_with, lost_with) = match (winner.choice, loser.choice) {
        (Some(w), Some(l)) => (w, l),
        _ => return format!("{} wins {}", winner.initial(), loser.initial()),
    };
    format!(
        "{} wins {}: {} {} {}",
        winner.initial(),
        loser.initial(),
        won_with,
        won_with.verb(),
        lost_with
    )
}
