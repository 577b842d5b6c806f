//! The round loop
//!
//! WAITING → FLYING → CRASHED → WAITING, forever. Each phase publishes to
//! the sink and then suspends on the clock; the first failed publish ends
//! the run.

use std::convert::Infallible;

use rand::Rng;

use super::clock::Clock;
use super::crash::draw_crash_point;
use super::multiplier::Multiplier;
use super::state::{Round, Snapshot};
use crate::error::EngineError;
use crate::settings::{CrashDisplay, Settings};
use crate::sink::StateSink;

/// Outcome of one completed round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub number: u64,
    pub crash_point: Multiplier,
    /// Multiplier sent with the CRASHED snapshot
    pub final_multiplier: Multiplier,
    /// Multiplier snapshots published while flying
    pub flight_ticks: u32,
}

/// Drives rounds and publishes their state.
///
/// The sink, clock and random source are injected once and held for the
/// engine's lifetime.
pub struct RoundEngine<S, C, R> {
    settings: Settings,
    sink: S,
    clock: C,
    rng: R,
    round: Round,
    completed: u64,
}

impl<S: StateSink, C: Clock, R: Rng> RoundEngine<S, C, R> {
    pub fn new(settings: Settings, sink: S, clock: C, rng: R) -> Self {
        let round = Round::waiting(1, settings.countdown_secs);
        Self {
            settings,
            sink,
            clock,
            rng,
            round,
            completed: 0,
        }
    }

    /// Run rounds until a publish fails
    pub fn run(&mut self) -> Result<Infallible, EngineError> {
        log::info!("Round engine started");
        loop {
            self.run_round()?;
        }
    }

    /// Run exactly `rounds` full cycles
    pub fn run_rounds(&mut self, rounds: u64) -> Result<Vec<RoundSummary>, EngineError> {
        (0..rounds).map(|_| self.run_round()).collect()
    }

    /// One WAITING → FLYING → CRASHED cycle
    pub fn run_round(&mut self) -> Result<RoundSummary, EngineError> {
        let number = self.completed + 1;
        self.round = Round::waiting(number, self.settings.countdown_secs);

        self.count_down()?;

        let crash_point = draw_crash_point(&mut self.rng, self.settings.crash_scale);
        log::info!("Round {} started", number);
        log::debug!("Round {} will crash at {}x", number, crash_point);
        self.round.take_off(crash_point);
        self.publish(&Snapshot::takeoff())?;

        let flight_ticks = self.fly()?;

        let reported = match self.settings.crash_display {
            CrashDisplay::CrashPoint => crash_point,
            CrashDisplay::LastStep => self.round.multiplier,
        };
        self.round.crash(reported);
        log::info!("Round {} crashed at {}x", number, reported);
        self.publish(&Snapshot::crashed(reported))?;
        self.clock.sleep(self.settings.crash_pause());

        self.completed = number;
        Ok(RoundSummary {
            number,
            crash_point,
            final_multiplier: reported,
            flight_ticks,
        })
    }

    fn count_down(&mut self) -> Result<(), EngineError> {
        let tick = self.settings.waiting_tick();
        while self.round.countdown > 0 {
            let snapshot = self.round.waiting_snapshot();
            self.publish(&snapshot)?;
            self.clock.sleep(tick);
            self.round.countdown -= 1;
        }
        Ok(())
    }

    fn fly(&mut self) -> Result<u32, EngineError> {
        let tick = self.settings.flight_tick();
        let mut ticks = 0;
        while self.round.is_airborne() {
            self.publish(&Snapshot::flight(self.round.multiplier))?;
            log::trace!("Round {} at {}x", self.round.number, self.round.multiplier);
            self.round.multiplier = self.round.multiplier.advanced();
            self.clock.sleep(tick);
            ticks += 1;
        }
        Ok(ticks)
    }

    fn publish(&mut self, snapshot: &Snapshot) -> Result<(), EngineError> {
        self.sink.publish(snapshot)?;
        Ok(())
    }

    /// The round in progress (or the last one finished)
    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn rounds_completed(&self) -> u64 {
        self.completed
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
