//! Crash Round - a perpetual crash-game round engine
//!
//! Core modules:
//! - `round`: Round state machine (countdown, flight, crash)
//! - `sink`: Where round snapshots are published
//! - `settings`: Tunables loaded from JSON
//! - `error`: Configuration and runtime errors

pub mod error;
pub mod round;
pub mod settings;
pub mod sink;

pub use error::{ConfigError, EngineError};
pub use round::{Multiplier, RoundEngine, RoundStatus, Snapshot};
pub use settings::{CrashDisplay, Settings, SinkKind};
pub use sink::{SinkError, StateSink};

/// Design defaults
pub mod consts {
    /// Countdown length before takeoff (seconds)
    pub const COUNTDOWN_SECS: u32 = 5;
    /// Delay between countdown ticks
    pub const WAITING_TICK_MS: u64 = 1000;
    /// Delay between flight ticks
    pub const FLIGHT_TICK_MS: u64 = 150;
    /// Settlement pause after a crash
    pub const CRASH_PAUSE_MS: u64 = 4000;
    /// Scale of the crash curve: crash = 1 + u1 * u2 * K
    pub const CRASH_SCALE: f64 = 15.0;
    /// Largest K whose crash points still fit in `u32` hundredths
    pub const MAX_CRASH_SCALE: f64 = 42_000_000.0;
}
