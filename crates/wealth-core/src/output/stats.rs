//! Statistics
//!
//! Inequality metric and per-run counters.

use std::borrow::Cow;

use crate::components::Population;
use crate::error::{DivisionSite, SimError};

/// Shifts a sequence so its minimum is zero, if the minimum is negative.
///
/// Non-negative input is returned untouched; pairwise differences are
/// preserved either way.
pub fn rebase_to_minimum(values: &[i64]) -> Cow<'_, [i64]> {
    match values.iter().min() {
        Some(&min) if min < 0 => Cow::Owned(values.iter().map(|v| v + min.abs()).collect()),
        _ => Cow::Borrowed(values),
    }
}

/// Gini coefficient of a wealth distribution.
///
/// Values are rebased to a zero minimum first. The coefficient is half the
/// mean absolute difference over all ordered pairs (self-pairs included)
/// divided by the mean. O(n²), fine for the population sizes involved.
///
/// Fails with `DivisionByZero` when the rebased mean is zero, i.e. every
/// value is equal to a non-positive minimum.
pub fn gini(values: &[i64]) -> Result<f64, SimError> {
    let xs = rebase_to_minimum(values);
    let n = xs.len() as i64;
    let total: i64 = xs.iter().sum();
    if n == 0 || total == 0 {
        return Err(SimError::DivisionByZero(DivisionSite::GiniMean));
    }

    let pair_sum: i64 = xs
        .iter()
        .map(|xi| xs.iter().map(|xj| (xi - xj).abs()).sum::<i64>())
        .sum();

    // 0.5 * (pair_sum / n²) / (total / n), folded into one division so exact
    // ratios such as 7/10 come out as the nearest float.
    Ok(pair_sum as f64 / (2.0 * n as f64 * total as f64))
}

/// Summary figures shown under the agent table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationStats {
    pub gini: f64,
    pub total_wealth: i64,
    pub absolute_wealth: i64,
}

impl PopulationStats {
    pub fn compute(population: &Population) -> Result<Self, SimError> {
        Ok(Self {
            gini: gini(&population.wealths())?,
            total_wealth: population.total_wealth(),
            absolute_wealth: population.absolute_wealth(),
        })
    }
}

/// Counters accumulated over a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub contests: u64,
    pub wins: u64,
    pub ties: u64,
    /// Pairs that sat out because one side was exactly at the debt floor
    pub skipped_pairs: u64,
    pub revolutions: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of contests that ended in a tie
    pub fn tie_rate(&self) -> f64 {
        if self.contests == 0 {
            0.0
        } else {
            self.ties as f64 / self.contests as f64
        }
    }
}
