//! Simulation Loop
//!
//! Owns the population and drives it: play a round, recompute statistics,
//! render, poll for stop, revolt if inequality is too high, wait, repeat.

use tracing::{debug, info, warn};
use wealth_events::{FrameSnapshot, Phase};

use crate::choices::ChoiceSource;
use crate::clock::Clock;
use crate::components::Population;
use crate::config::Config;
use crate::error::SimError;
use crate::output::{PopulationStats, Renderer, RunStats};
use crate::setup::create_population;
use crate::systems::{play_round, should_revolt, Revolution, RoundReport};

pub struct Simulation<C: ChoiceSource, K: Clock> {
    config: Config,
    population: Population,
    choices: C,
    clock: K,
    tick: u64,
    stats: RunStats,
}

impl<C: ChoiceSource, K: Clock> Simulation<C, K> {
    /// Builds the standard fifteen-player simulation.
    pub fn new(config: Config, choices: C, clock: K) -> Result<Self, SimError> {
        let population = create_population(&config.economy);
        Self::with_population(config, population, choices, clock)
    }

    /// Builds a simulation over a caller-supplied population.
    pub fn with_population(
        config: Config,
        population: Population,
        choices: C,
        clock: K,
    ) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            config,
            population,
            choices,
            clock,
            tick: 0,
            stats: RunStats::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn run_stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub fn choices(&self) -> &C {
        &self.choices
    }

    pub fn population_stats(&self) -> Result<PopulationStats, SimError> {
        PopulationStats::compute(&self.population)
    }

    /// Snapshot of the current state tagged with `phase`
    pub fn frame(&self, phase: Phase) -> Result<FrameSnapshot, SimError> {
        let stats = self.population_stats()?;
        Ok(self.frame_with(phase, stats))
    }

    fn frame_with(&self, phase: Phase, stats: PopulationStats) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.tick,
            phase,
            agents: self.population.snapshots(),
            gini: stats.gini,
            total_wealth: stats.total_wealth,
            absolute_wealth: stats.absolute_wealth,
        }
    }

    /// Plays one round and advances the tick counter.
    pub fn step(&mut self) -> RoundReport {
        let report = play_round(
            &mut self.population,
            self.config.economy.debt_threshold,
            &mut self.choices,
        );
        self.tick += 1;

        let played = report.played() as u64;
        let ties = report.ties() as u64;
        self.stats.ticks += 1;
        self.stats.contests += played;
        self.stats.ties += ties;
        self.stats.wins += played - ties;
        self.stats.skipped_pairs += report.skipped() as u64;

        debug!(tick = self.tick, played, skipped = report.skipped(), "round complete");
        report
    }

    /// Whether the current statistics call for a revolution
    pub fn revolution_due(&self, stats: &PopulationStats) -> bool {
        should_revolt(stats.gini, self.config.economy.gini_revolution_threshold)
    }

    /// Runs all three revolution phases, rendering and dwelling after each.
    /// Returns the completed state machine, which holds the redistribution.
    pub fn run_revolution<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> Result<Revolution, SimError> {
        info!(tick = self.tick, "revolution triggered");
        let initial_wealth = self.config.economy.initial_wealth;
        let mut revolution = Revolution::new();

        while let Some(phase) = revolution.advance(&mut self.population, initial_wealth)? {
            let frame = self.frame(phase.frame_phase())?;
            renderer.render(&frame)?;
            self.clock.sleep(self.config.timing.phase_dwell());
        }

        self.stats.revolutions += 1;
        Ok(revolution)
    }

    /// Runs until the renderer asks to stop or `max_ticks` rounds have been
    /// played. Returns the run counters.
    ///
    /// A division-by-zero in the statistics or the redistribution aborts the
    /// run and is returned to the caller; the population keeps the state
    /// that caused it.
    pub fn run<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<RunStats, SimError> {
        let initial = self.frame(Phase::Waiting)?;
        renderer.render(&initial)?;
        self.clock.sleep(self.config.timing.start_delay());

        let max_ticks = self.config.simulation.max_ticks;
        loop {
            if max_ticks.is_some_and(|max| self.tick >= max) {
                info!(tick = self.tick, "tick limit reached");
                break;
            }

            self.step();
            let stats = self.population_stats().inspect_err(|e| {
                warn!(tick = self.tick, error = %e, "could not compute statistics");
            })?;
            renderer.render(&self.frame_with(Phase::Playing, stats))?;

            if renderer.stop_requested() {
                info!(tick = self.tick, "stop requested");
                break;
            }

            if self.revolution_due(&stats) {
                self.run_revolution(renderer).inspect_err(|e| {
                    warn!(tick = self.tick, error = %e, "revolution failed");
                })?;
            }

            self.clock.sleep(self.config.timing.frame_interval());
        }

        Ok(self.stats.clone())
    }
}
