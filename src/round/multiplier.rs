//! Fixed-point payout multiplier
//!
//! Multipliers are stored as integer hundredths so that stepping is exact:
//! a hundred 0.01 steps from 1.00 land on 2.00, not 2.0000000000000013.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Payout multiplier in hundredths (1.00 = 100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Multiplier(u32);

/// Above this the flight step is 0.05
pub const FAST_THRESHOLD: Multiplier = Multiplier(500);
/// Above this the flight step is 0.02
pub const MEDIUM_THRESHOLD: Multiplier = Multiplier(200);

impl Multiplier {
    /// The starting multiplier of every round
    pub const ONE: Self = Self(100);

    /// Build from hundredths, clamping to the 1.00 floor
    pub const fn from_hundredths(hundredths: u32) -> Self {
        if hundredths < 100 {
            Self::ONE
        } else {
            Self(hundredths)
        }
    }

    /// Nearest multiplier to a float value (ties away from zero)
    pub fn from_f64(value: f64) -> Self {
        let hundredths = (value * 100.0).round();
        if !hundredths.is_finite() || hundredths < 100.0 {
            return Self::ONE;
        }
        Self::from_hundredths(hundredths.min(u32::MAX as f64) as u32)
    }

    #[inline]
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Step applied when advancing from this value.
    ///
    /// Brackets are checked highest first: 0.05 above 5.00, 0.02 above 2.00,
    /// 0.01 otherwise.
    pub fn step(self) -> u32 {
        if self > FAST_THRESHOLD {
            5
        } else if self > MEDIUM_THRESHOLD {
            2
        } else {
            1
        }
    }

    /// The next value on the flight curve
    pub fn advanced(self) -> Self {
        Self(self.0.saturating_add(self.step()))
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Error returned when a multiplier string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid multiplier {0:?}")]
pub struct ParseMultiplierError(String);

impl FromStr for Multiplier {
    type Err = ParseMultiplierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| ParseMultiplierError(s.to_string()))?;
        if !value.is_finite() || value < 1.0 {
            return Err(ParseMultiplierError(s.to_string()));
        }
        Ok(Self::from_f64(value))
    }
}
