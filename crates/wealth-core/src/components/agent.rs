//! Agent Components
//!
//! Each agent is one named participant. The population is created once at
//! startup and only ever mutated; agents never join or leave.

use wealth_events::{AgentSnapshot, Choice, Mood};

/// Result text shown before the first round
pub const WAITING_RESULT: &str = "Waiting to start...";

/// Stable index of an agent within its population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub usize);

/// A single participant
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub name: String,
    pub wealth: i64,
    pub mood: Mood,
    /// Most recent contest move
    pub choice: Option<Choice>,
    /// Most recent contest or revolution outcome
    pub result: String,
}

impl Agent {
    pub fn new(name: impl Into<String>, wealth: i64) -> Self {
        Self {
            name: name.into(),
            wealth,
            mood: Mood::Neutral,
            choice: None,
            result: WAITING_RESULT.to_string(),
        }
    }

    /// Single-letter abbreviation used in result descriptions
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Sets mood and result together
    pub fn set_state(&mut self, mood: Mood, result: impl Into<String>) {
        self.mood = mood;
        self.result = result.into();
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            name: self.name.clone(),
            wealth: self.wealth,
            mood: self.mood,
            choice: self.choice,
            result: self.result.clone(),
        }
    }
}

/// Fixed-size, ordered arena of agents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Creates one agent per name, all starting with `initial_wealth`
    pub fn new<I, S>(names: I, initial_wealth: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            agents: names
                .into_iter()
                .map(|name| Agent::new(name, initial_wealth))
                .collect(),
        }
    }

    /// Wraps agents built elsewhere, keeping their order
    pub fn from_agents(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = AgentId> {
        (0..self.agents.len()).map(AgentId)
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.0)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.0)
    }

    /// Finds an agent by name
    pub fn find(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent> {
        self.agents.iter_mut()
    }

    /// Borrows two distinct agents mutably at once.
    ///
    /// Returns `None` if either id is out of range or both are the same.
    pub fn pair_mut(&mut self, a: AgentId, b: AgentId) -> Option<(&mut Agent, &mut Agent)> {
        if a == b || a.0 >= self.agents.len() || b.0 >= self.agents.len() {
            return None;
        }
        if a.0 < b.0 {
            let (left, right) = self.agents.split_at_mut(b.0);
            Some((&mut left[a.0], &mut right[0]))
        } else {
            let (left, right) = self.agents.split_at_mut(a.0);
            Some((&mut right[0], &mut left[b.0]))
        }
    }

    /// Current wealth values in population order
    pub fn wealths(&self) -> Vec<i64> {
        self.agents.iter().map(|a| a.wealth).collect()
    }

    pub fn total_wealth(&self) -> i64 {
        self.agents.iter().map(|a| a.wealth).sum()
    }

    /// Sum of absolute wealth, debts counted as positive
    pub fn absolute_wealth(&self) -> i64 {
        self.agents.iter().map(|a| a.wealth.abs()).sum()
    }

    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        self.agents.iter().map(Agent::snapshot).collect()
    }
}
