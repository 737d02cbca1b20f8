//! Frame Pacing
//!
//! Dwell pauses between frames go through a `Clock` so tests can run the
//! loop without real time passing.

use std::time::Duration;

pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadClock;

impl Clock for ThreadClock {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Records requested pauses without sleeping
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    elapsed: Duration,
    pauses: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total time the simulation asked to wait
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.elapsed += duration;
        self.pauses.push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_accumulates() {
        let mut clock = ManualClock::new();
        clock.sleep(Duration::from_millis(300));
        clock.sleep(Duration::from_secs(1));

        assert_eq!(clock.elapsed(), Duration::from_millis(1300));
        assert_eq!(clock.pauses().len(), 2);
    }
}
