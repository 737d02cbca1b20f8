//! Round Scheduler
//!
//! One tick of play: every adjacent pair in population order plays once.

use crate::choices::ChoiceSource;
use crate::components::{AgentId, Population};
use crate::config::DebtFloor;

use super::contest::{resolve_contest, ContestResult};

/// What happened to one scheduled pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairOutcome {
    pub first: AgentId,
    pub second: AgentId,
    /// `None` when the pair sat out at the debt floor
    pub result: Option<ContestResult>,
}

/// Summary of a single round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundReport {
    /// Agents that were eligible at the start of the round
    pub participants: Vec<AgentId>,
    pub pairs: Vec<PairOutcome>,
}

impl RoundReport {
    pub fn played(&self) -> usize {
        self.pairs.iter().filter(|p| p.result.is_some()).count()
    }

    pub fn skipped(&self) -> usize {
        self.pairs.iter().filter(|p| p.result.is_none()).count()
    }

    pub fn ties(&self) -> usize {
        self.pairs
            .iter()
            .filter(|p| p.result == Some(ContestResult::Tie))
            .count()
    }

    /// Contests an agent actually played this round
    pub fn contests_for(&self, id: AgentId) -> usize {
        self.pairs
            .iter()
            .filter(|p| p.result.is_some() && (p.first == id || p.second == id))
            .count()
    }
}

/// Plays one round.
///
/// With a concrete floor, agents at or below it are dropped before pairing;
/// the remaining agents keep their order and each plays its neighbours. A
/// pair can still be skipped mid-round if an earlier contest this round
/// pushed one side exactly onto the floor.
pub fn play_round<C: ChoiceSource + ?Sized>(
    population: &mut Population,
    floor: DebtFloor,
    choices: &mut C,
) -> RoundReport {
    let participants: Vec<AgentId> = population
        .ids()
        .filter(|id| match (floor.limit(), population.get(*id)) {
            (Some(limit), Some(agent)) => agent.wealth > limit,
            _ => true,
        })
        .collect();

    let mut pairs = Vec::with_capacity(participants.len().saturating_sub(1));
    for window in participants.windows(2) {
        let (first, second) = (window[0], window[1]);
        let result = population
            .pair_mut(first, second)
            .and_then(|(a, b)| resolve_contest(a, b, floor, &mut *choices))
            .map(|contest| contest.result);
        pairs.push(PairOutcome {
            first,
            second,
            result,
        });
    }

    RoundReport {
        participants,
        pairs,
    }
}
