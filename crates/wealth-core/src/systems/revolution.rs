//! Revolution System
//!
//! When inequality crosses the configured Gini threshold the population
//! revolts in three phases: a warning, the eruption, and finally the
//! redistribution of the rich agents' surplus to those with nothing.

use tracing::info;
use wealth_events::{Mood, Phase};

use crate::components::{AgentId, Population};
use crate::error::{DivisionSite, SimError};

pub const TENSE_MESSAGE: &str = "The air is tense...";
pub const CHANGE_MESSAGE: &str = "Change is coming";
pub const GIVE_BACK_MESSAGE: &str = "Give back what you took!";
pub const ERUPTION_MESSAGE: &str = "...";
pub const HAVE_MESSAGE: &str = "Fine, take it, we share!";
pub const HAVE_NOT_MESSAGE: &str = "Finally, our fair share!";
pub const REST_MESSAGE: &str = "Phew, that passed us by";

/// Inclusive trigger check; a disabled threshold never fires.
pub fn should_revolt(gini: f64, threshold: Option<f64>) -> bool {
    threshold.is_some_and(|t| gini >= t)
}

/// Stages of a revolution, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevolutionPhase {
    Warning,
    Eruption,
    Redistribution,
}

impl RevolutionPhase {
    pub fn next(self) -> Option<Self> {
        match self {
            RevolutionPhase::Warning => Some(RevolutionPhase::Eruption),
            RevolutionPhase::Eruption => Some(RevolutionPhase::Redistribution),
            RevolutionPhase::Redistribution => None,
        }
    }

    /// Phase tag carried by the rendered frame
    pub fn frame_phase(self) -> Phase {
        match self {
            RevolutionPhase::Warning => Phase::Warning,
            RevolutionPhase::Eruption => Phase::Eruption,
            RevolutionPhase::Redistribution => Phase::Redistribution,
        }
    }
}

/// Sets everyone's mood by wealth tier as the tension builds.
pub fn apply_warning(population: &mut Population, initial_wealth: i64) {
    for agent in population.iter_mut() {
        if agent.wealth > initial_wealth {
            agent.set_state(Mood::Fearful, TENSE_MESSAGE);
        } else if agent.wealth > 0 {
            agent.set_state(Mood::Worried, CHANGE_MESSAGE);
        } else {
            agent.set_state(Mood::Angry, GIVE_BACK_MESSAGE);
        }
    }
}

pub fn apply_eruption(population: &mut Population) {
    for agent in population.iter_mut() {
        agent.set_state(Mood::Exploding, ERUPTION_MESSAGE);
    }
}

/// Outcome of the redistribution phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redistribution {
    /// Agents above the initial wealth, in population order
    pub haves: Vec<AgentId>,
    /// Agents at or below zero, in population order
    pub have_nots: Vec<AgentId>,
    /// Wealth actually taken from the haves
    pub pool: i64,
    /// Amount every have-not was set to
    pub share: i64,
    /// Integer-division leftover
    pub remainder: i64,
    /// Have-not that received the remainder on top of its share
    pub remainder_recipient: AgentId,
}

/// Takes the haves down to half the initial wealth and splits what was taken
/// evenly among the have-nots.
///
/// Every have-not's wealth is *set* to the share (debts are forgiven). The
/// leftover from the integer division goes to the last have-not in
/// population order. Agents in between are left untouched apart from mood.
///
/// Fails with `DivisionByZero` if nobody is at or below zero. The check runs
/// before any agent is modified.
pub fn redistribute(
    population: &mut Population,
    initial_wealth: i64,
) -> Result<Redistribution, SimError> {
    let mut haves = Vec::new();
    let mut have_nots = Vec::new();
    for id in population.ids() {
        match population.get(id).map(|a| a.wealth) {
            Some(wealth) if wealth > initial_wealth => haves.push(id),
            Some(wealth) if wealth <= 0 => have_nots.push(id),
            _ => {}
        }
    }

    let remainder_recipient = *have_nots
        .last()
        .ok_or(SimError::DivisionByZero(DivisionSite::RevolutionShare))?;

    let reset_wealth = initial_wealth / 2;
    let mut pool = 0;
    for id in &haves {
        if let Some(agent) = population.get_mut(*id) {
            pool += agent.wealth;
            agent.wealth = reset_wealth;
            agent.set_state(Mood::Shocked, HAVE_MESSAGE);
        }
    }
    pool -= reset_wealth * haves.len() as i64;

    let recipients = have_nots.len() as i64;
    let share = pool / recipients;
    let remainder = pool - recipients * share;

    for id in &have_nots {
        if let Some(agent) = population.get_mut(*id) {
            agent.wealth = share;
            agent.set_state(Mood::Happy, HAVE_NOT_MESSAGE);
        }
    }
    if let Some(agent) = population.get_mut(remainder_recipient) {
        agent.wealth += remainder;
    }

    for id in population.ids() {
        if haves.contains(&id) || have_nots.contains(&id) {
            continue;
        }
        if let Some(agent) = population.get_mut(id) {
            agent.set_state(Mood::Relieved, REST_MESSAGE);
        }
    }

    info!(
        haves = haves.len(),
        have_nots = have_nots.len(),
        pool,
        share,
        remainder,
        "wealth redistributed"
    );

    Ok(Redistribution {
        haves,
        have_nots,
        pool,
        share,
        remainder,
        remainder_recipient,
    })
}

/// Three-phase state machine driven one step at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revolution {
    next: Option<RevolutionPhase>,
    outcome: Option<Redistribution>,
}

impl Default for Revolution {
    fn default() -> Self {
        Self::new()
    }
}

impl Revolution {
    pub fn new() -> Self {
        Self {
            next: Some(RevolutionPhase::Warning),
            outcome: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.next.is_none()
    }

    /// Redistribution result, once that phase has run
    pub fn outcome(&self) -> Option<&Redistribution> {
        self.outcome.as_ref()
    }

    /// Applies the next phase and returns it, or `None` once complete.
    pub fn advance(
        &mut self,
        population: &mut Population,
        initial_wealth: i64,
    ) -> Result<Option<RevolutionPhase>, SimError> {
        let Some(phase) = self.next else {
            return Ok(None);
        };
        info!(?phase, "revolution phase");
        match phase {
            RevolutionPhase::Warning => apply_warning(population, initial_wealth),
            RevolutionPhase::Eruption => apply_eruption(population),
            RevolutionPhase::Redistribution => {
                self.outcome = Some(redistribute(population, initial_wealth)?);
            }
        }
        self.next = phase.next();
        Ok(Some(phase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Agent;

    fn population_with(wealths: &[(&str, i64)]) -> Population {
        Population::from_agents(
            wealths
                .iter()
                .map(|(name, wealth)| Agent::new(*name, *wealth))
                .collect(),
        )
    }

    #[test]
    fn test_trigger_is_inclusive() {
        assert!(should_revolt(0.7, Some(0.7)));
        assert!(should_revolt(0.71, Some(0.7)));
        assert!(!should_revolt(0.69, Some(0.7)));
        assert!(!should_revolt(0.99, None));
    }

    #[test]
    fn test_warning_tiers() {
        let mut population = population_with(&[
            ("Rich", 6),
            ("Mid", 5),
            ("Low", 1),
            ("Broke", 0),
            ("Debt", -2),
        ]);
        apply_warning(&mut population, 5);

        let moods: Vec<Mood> = population.iter().map(|a| a.mood).collect();
        assert_eq!(
            moods,
            vec![Mood::Fearful, Mood::Worried, Mood::Worried, Mood::Angry, Mood::Angry]
        );
        assert_eq!(population.find("Rich").unwrap().result, TENSE_MESSAGE);
        assert_eq!(population.find("Debt").unwrap().result, GIVE_BACK_MESSAGE);
        // Warning never touches wealth
        assert_eq!(population.wealths(), vec![6, 5, 1, 0, -2]);
    }

    #[test]
    fn test_eruption() {
        let mut population = population_with(&[("A", 9), ("B", -1)]);
        apply_eruption(&mut population);
        assert!(population
            .iter()
            .all(|a| a.mood == Mood::Exploding && a.result == ERUPTION_MESSAGE));
        assert_eq!(population.wealths(), vec![9, -1]);
    }

    #[test]
    fn test_redistribution_worked_example() {
        let mut population = population_with(&[
            ("Alice", 8),
            ("Bob", 0),
            ("Cecil", 3),
            ("Dave", 7),
            ("Emma", -1),
            ("Fred", 0),
        ]);

        let outcome = redistribute(&mut population, 5).unwrap();

        assert_eq!(outcome.haves, vec![AgentId(0), AgentId(3)]);
        assert_eq!(outcome.have_nots, vec![AgentId(1), AgentId(4), AgentId(5)]);
        // 15 taken down to 2 + 2
        assert_eq!(outcome.pool, 11);
        assert_eq!(outcome.share, 3);
        assert_eq!(outcome.remainder, 2);
        assert_eq!(outcome.remainder_recipient, AgentId(5));
        assert_eq!(population.wealths(), vec![2, 3, 3, 2, 3, 5]);

        // Everything removed from the haves lands with the have-nots
        let have_not_total: i64 = outcome
            .have_nots
            .iter()
            .map(|id| population.get(*id).unwrap().wealth)
            .sum();
        assert_eq!(have_not_total, outcome.pool);
    }

    #[test]
    fn test_redistribution_moods() {
        let mut population = population_with(&[("Rich", 9), ("Mid", 4), ("Poor", -3)]);
        redistribute(&mut population, 5).unwrap();

        let rich = population.find("Rich").unwrap();
        assert_eq!((rich.mood, rich.result.as_str()), (Mood::Shocked, HAVE_MESSAGE));
        let mid = population.find("Mid").unwrap();
        assert_eq!((mid.mood, mid.result.as_str()), (Mood::Relieved, REST_MESSAGE));
        let poor = population.find("Poor").unwrap();
        assert_eq!((poor.mood, poor.result.as_str()), (Mood::Happy, HAVE_NOT_MESSAGE));
        // 9 -> 2 frees 7 for a single have-not
        assert_eq!(population.wealths(), vec![2, 4, 7]);
    }

    #[test]
    fn test_reset_uses_integer_division() {
        let mut population = population_with(&[("Rich", 10), ("Poor", 0)]);
        let outcome = redistribute(&mut population, 7).unwrap();
        // 7 / 2 == 3
        assert_eq!(population.wealths(), vec![3, 7]);
        assert_eq!(outcome.pool, 7);
    }

    #[test]
    fn test_haves_reset_to_zero_stay_haves() {
        // initial_wealth 1 resets haves to 0, which must not make them have-nots
        let mut population = population_with(&[("Rich", 4), ("Poor", -1)]);
        let outcome = redistribute(&mut population, 1).unwrap();

        assert_eq!(outcome.have_nots, vec![AgentId(1)]);
        assert_eq!(population.wealths(), vec![0, 4]);
        assert_eq!(population.find("Rich").unwrap().mood, Mood::Shocked);
    }

    #[test]
    fn test_no_haves_sets_debtors_to_zero() {
        let mut population = population_with(&[("A", 3), ("B", -4), ("C", 0)]);
        let outcome = redistribute(&mut population, 5).unwrap();
        assert_eq!(outcome.pool, 0);
        assert_eq!(population.wealths(), vec![3, 0, 0]);
    }

    #[test]
    fn test_no_have_nots_fails_without_mutation() {
        let mut population = population_with(&[("Rich", 12), ("Mid", 3)]);
        apply_eruption(&mut population);
        let before = population.clone();

        let err = redistribute(&mut population, 5).unwrap_err();

        assert!(err.is_division_by_zero(DivisionSite::RevolutionShare));
        assert_eq!(population, before);
    }

    #[test]
    fn test_state_machine_order() {
        let mut population = population_with(&[("Rich", 10), ("Poor", 0)]);
        let mut revolution = Revolution::new();

        let phase = revolution.advance(&mut population, 5).unwrap();
        assert_eq!(phase, Some(RevolutionPhase::Warning));
        assert_eq!(population.find("Rich").unwrap().mood, Mood::Fearful);
        let phase = revolution.advance(&mut population, 5).unwrap();
        assert_eq!(phase, Some(RevolutionPhase::Eruption));
        assert_eq!(population.find("Poor").unwrap().mood, Mood::Exploding);
        assert!(revolution.outcome().is_none());
        assert_eq!(
            revolution.advance(&mut population, 5).unwrap(),
            Some(RevolutionPhase::Redistribution)
        );
        assert!(revolution.is_complete());
        assert_eq!(revolution.outcome().map(|o| o.pool), Some(8));
        assert_eq!(revolution.advance(&mut population, 5).unwrap(), None);
    }

    #[test]
    fn test_frame_phases() {
        assert_eq!(RevolutionPhase::Warning.frame_phase(), Phase::Warning);
        assert_eq!(RevolutionPhase::Redistribution.next(), None);
    }
}
