//! Suspension points for the round loop
//!
//! The engine never sleeps directly; it asks a [`Clock`]. Production uses
//! [`SystemClock`], tests and fast-forward runs use [`SimulatedClock`].

use std::time::Duration;

/// Something the engine can suspend on between ticks
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration);
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// Wall-clock sleeping (blocks the current thread)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Simulated time: records requested sleeps and returns immediately
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    elapsed: Duration,
    sleeps: Vec<Duration>,
    track_sleeps: bool,
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self {
            elapsed: Duration::ZERO,
            sleeps: Vec::new(),
            track_sleeps: true,
        }
    }
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accumulate elapsed time; for unbounded runs
    pub fn untracked() -> Self {
        Self {
            track_sleeps: false,
            ..Self::default()
        }
    }

    /// Total simulated time spent sleeping
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Every sleep requested so far, in order (empty when untracked)
    pub fn sleeps(&self) -> &[Duration] {
        &self.sleeps
    }
}

impl Clock for SimulatedClock {
    fn sleep(&mut self, duration: Duration) {
        self.elapsed += duration;
        if self.track_sleeps {
            self.sleeps.push(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_clock_accumulates() {
        let mut clock = SimulatedClock::new();
        clock.sleep(Duration::from_secs(1));
        clock.sleep(Duration::from_millis(150));
        assert_eq!(clock.elapsed(), Duration::from_millis(1150));
        assert_eq!(clock.sleeps().len(), 2);
    }

    #[test]
    fn test_untracked_clock_keeps_only_elapsed() {
        let mut clock = SimulatedClock::untracked();
        for _ in 0..1000 {
            clock.sleep(Duration::from_millis(150));
        }
        assert_eq!(clock.elapsed(), Duration::from_millis(150_000));
        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn test_clock_through_mut_ref() {
        fn nap<C: Clock>(mut clock: C) {
            clock.sleep(Duration::from_millis(5));
        }

        let mut clock = SimulatedClock::new();
        nap(&mut clock);
        nap(&mut clock);
        assert_eq!(clock.elapsed(), Duration::from_millis(10));
    }
}
