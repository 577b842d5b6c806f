//! Engine settings
//!
//! Loaded from an optional JSON file; every field falls back to the design
//! defaults in [`crate::consts`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Where snapshots are published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Kept in process (useful with `--rounds`)
    Memory,
    /// JSON lines on standard output
    #[default]
    Stdout,
    /// Merged record persisted to `output`
    File,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Memory => "memory",
            SinkKind::Stdout => "stdout",
            SinkKind::File => "file",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Some(SinkKind::Memory),
            "stdout" | "-" => Some(SinkKind::Stdout),
            "file" => Some(SinkKind::File),
            _ => None,
        }
    }
}

/// Which value the CRASHED snapshot reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CrashDisplay {
    /// Exactly the drawn crash point
    #[default]
    CrashPoint,
    /// The first stepped value at or past the crash point
    LastStep,
}

/// Engine tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Countdown length in seconds (W)
    pub countdown_secs: u32,
    /// Delay between countdown ticks
    pub waiting_tick_ms: u64,
    /// Delay between flight ticks
    pub flight_tick_ms: u64,
    /// Settlement pause after a crash
    pub crash_pause_ms: u64,

    // === Odds ===
    /// Crash curve scale (K)
    pub crash_scale: f64,
    pub crash_display: CrashDisplay,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,

    // === Output ===
    pub sink: SinkKind,
    /// Target file for the file sink
    pub output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            countdown_secs: COUNTDOWN_SECS,
            waiting_tick_ms: WAITING_TICK_MS,
            flight_tick_ms: FLIGHT_TICK_MS,
            crash_pause_ms: CRASH_PAUSE_MS,

            crash_scale: CRASH_SCALE,
            crash_display: CrashDisplay::default(),
            seed: None,

            sink: SinkKind::default(),
            output: None,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=MAX_CRASH_SCALE).contains(&self.crash_scale) {
            return Err(ConfigError::InvalidCrashScale(self.crash_scale));
        }
        if self.flight_tick_ms == 0 {
            return Err(ConfigError::ZeroInterval("flight_tick_ms"));
        }
        if self.sink == SinkKind::File && self.output.is_none() {
            return Err(ConfigError::MissingOutputPath);
        }
        Ok(())
    }

    pub fn waiting_tick(&self) -> Duration {
        Duration::from_millis(self.waiting_tick_ms)
    }

    pub fn flight_tick(&self) -> Duration {
        Duration::from_millis(self.flight_tick_ms)
    }

    pub fn crash_pause(&self) -> Duration {
        Duration::from_millis(self.crash_pause_ms)
    }
}
